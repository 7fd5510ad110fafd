//! Drawing surface used by the renderer.
//!
//! The renderer only needs a handful of primitives, so it draws through the
//! [`Surface`] trait. The browser implementation wraps
//! [`CanvasRenderingContext2d`]; tests record the calls instead.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::scale::ViewTransform;

/// Minimal 2d drawing API the renderer paints through.
pub trait Surface {
	/// Erase the whole `width` x `height` surface.
	fn clear(&self, width: f64, height: f64);
	/// Start drawing in world space under `view`.
	fn push_view(&self, view: &ViewTransform);
	/// Undo the matching [`Surface::push_view`].
	fn pop_view(&self);
	/// Stroke a straight segment.
	fn line(&self, from: (f64, f64), to: (f64, f64), stroke: &str, width: f64);
	/// Fill a disc.
	fn circle(&self, center: (f64, f64), radius: f64, fill: &str);
	/// Radial gradient disc fading from `inner` at the centre to `outer` at `radius`.
	fn glow(&self, center: (f64, f64), radius: f64, inner: &str, outer: &str);
	/// Text centred horizontally and vertically on `at`.
	fn text(&self, text: &str, at: (f64, f64), font: &str, fill: &str);
}

impl Surface for CanvasRenderingContext2d {
	fn clear(&self, width: f64, height: f64) {
		self.clear_rect(0.0, 0.0, width, height);
	}

	fn push_view(&self, view: &ViewTransform) {
		self.save();
		if view.is_identity() {
			return;
		}
		let _ = self.translate(view.cx, view.cy);
		let _ = self.scale(view.k, view.k);
		let _ = self.translate(-view.cx, -view.cy);
	}

	fn pop_view(&self) {
		self.restore();
	}

	fn line(&self, from: (f64, f64), to: (f64, f64), stroke: &str, width: f64) {
		self.set_stroke_style_str(stroke);
		self.set_line_width(width);
		self.begin_path();
		self.move_to(from.0, from.1);
		self.line_to(to.0, to.1);
		self.stroke();
	}

	fn circle(&self, center: (f64, f64), radius: f64, fill: &str) {
		self.begin_path();
		let _ = self.arc(center.0, center.1, radius, 0.0, 2.0 * PI);
		self.set_fill_style_str(fill);
		self.fill();
	}

	fn glow(&self, center: (f64, f64), radius: f64, inner: &str, outer: &str) {
		let (x, y) = center;
		let Ok(gradient) = self.create_radial_gradient(x, y, 0.0, x, y, radius) else {
			return;
		};
		if gradient.add_color_stop(0.0, inner).is_err()
			|| gradient.add_color_stop(1.0, outer).is_err()
		{
			return;
		}

		self.begin_path();
		let _ = self.arc(x, y, radius, 0.0, 2.0 * PI);
		#[allow(deprecated)]
		self.set_fill_style(&gradient);
		self.fill();
	}

	fn text(&self, text: &str, at: (f64, f64), font: &str, fill: &str) {
		self.set_fill_style_str(fill);
		self.set_font(font);
		self.set_text_align("center");
		self.set_text_baseline("middle");
		let _ = self.fill_text(text, at.0, at.1);
	}
}
