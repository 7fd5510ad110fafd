//! Visual size configuration and the zoom view transform.
//!
//! # Coordinate Spaces
//!
//! - **World-space**: where the layout lives. Node positions, radii and the
//!   simulation margins are all world-space values.
//! - **Screen-space**: pixel coordinates on the canvas, as reported by pointer
//!   events.
//!
//! The two are related by [`ViewTransform`], a uniform scale about the canvas
//! centre. At zoom 1.0 they coincide.

use serde::Deserialize;

/// Node circle and label sizes.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct NodeScaleConfig {
	/// Radius of an unselected node in world units.
	pub radius: f64,
	/// Radius of the selected node in world units.
	pub selected_radius: f64,
	/// Glow halo radius as a multiple of the selected radius.
	pub glow_factor: f64,
	/// Label font size in pixels.
	pub label_size: f64,
	/// Label font size for the selected node, drawn bold.
	pub selected_label_size: f64,
}

impl Default for NodeScaleConfig {
	fn default() -> Self {
		Self {
			radius: 22.0,
			selected_radius: 28.0,
			glow_factor: 2.0,
			label_size: 13.0,
			selected_label_size: 14.0,
		}
	}
}

impl NodeScaleConfig {
	/// Radius used for both drawing and hit-testing.
	pub fn display_radius(&self, selected: bool) -> f64 {
		if selected {
			self.selected_radius
		} else {
			self.radius
		}
	}

	/// CSS font for the node name.
	pub fn label_font(&self, selected: bool) -> String {
		if selected {
			format!("bold {}px sans-serif", self.selected_label_size)
		} else {
			format!("{}px sans-serif", self.label_size)
		}
	}
}

/// Edge line and relationship label sizes.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct EdgeScaleConfig {
	/// Stroke width of edge lines.
	pub line_width: f64,
	/// Perpendicular distance of the relationship label from the edge line.
	pub label_offset: f64,
	/// Relationship label font size in pixels.
	pub label_size: f64,
}

impl Default for EdgeScaleConfig {
	fn default() -> Self {
		Self {
			line_width: 1.5,
			label_offset: 8.0,
			label_size: 12.0,
		}
	}
}

impl EdgeScaleConfig {
	/// CSS font for relationship labels.
	pub fn label_font(&self) -> String {
		format!("{}px sans-serif", self.label_size)
	}
}

/// Complete scale configuration for all graph elements.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScaleConfig {
	/// Node sizes.
	pub node: NodeScaleConfig,
	/// Edge sizes.
	pub edge: EdgeScaleConfig,
}

/// Uniform zoom about a fixed centre point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
	/// Zoom factor (1.0 = 100%).
	pub k: f64,
	/// Fixed point of the zoom, in canvas pixels.
	pub cx: f64,
	/// See `cx`.
	pub cy: f64,
}

impl ViewTransform {
	/// Zoom `k` about the centre of a `width` x `height` canvas.
	pub fn centered(k: f64, width: f64, height: f64) -> Self {
		Self {
			k,
			cx: width / 2.0,
			cy: height / 2.0,
		}
	}

	/// Map a canvas pixel to layout coordinates.
	pub fn screen_to_world(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			self.cx + (sx - self.cx) / self.k,
			self.cy + (sy - self.cy) / self.k,
		)
	}

	/// True at zoom 1, where screen and world coincide.
	pub fn is_identity(&self) -> bool {
		(self.k - 1.0).abs() < f64::EPSILON
	}
}

#[cfg(test)]
impl ViewTransform {
	pub(crate) fn world_to_screen(&self, wx: f64, wy: f64) -> (f64, f64) {
		(
			self.cx + (wx - self.cx) * self.k,
			self.cy + (wy - self.cy) * self.k,
		)
	}
}
