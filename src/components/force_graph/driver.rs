//! Animation driver: the per-frame step-then-paint sequence and the
//! `requestAnimationFrame` loop that runs it until cancelled.
//!
//! [`FrameLoop`] owns its own re-scheduling closure and a [`CancelToken`].
//! Cancelling (or dropping) the loop clears the pending frame and releases the
//! closure, so nothing keeps ticking after the canvas unmounts.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use super::error::CanvasError;
use super::render;
use super::scale::ScaleConfig;
use super::state::GraphState;
use super::surface::Surface;
use super::theme::Theme;

/// Shared cancellation flag. Clones observe the same flag.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
	/// A token that is not cancelled yet.
	pub fn new() -> Self {
		Self::default()
	}

	/// Flag every clone as cancelled.
	pub fn cancel(&self) {
		self.0.set(true);
	}

	/// Whether any clone has been cancelled.
	pub fn is_cancelled(&self) -> bool {
		self.0.get()
	}
}

/// One animation frame: step the layout fully, then paint.
pub fn advance_frame<S: Surface + ?Sized>(
	state: &mut GraphState,
	surface: &S,
	scale: &ScaleConfig,
	theme: &Theme,
) {
	state.tick();
	render::paint(surface, state, scale, theme);
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// A `requestAnimationFrame` loop that runs until cancelled or dropped.
pub struct FrameLoop {
	token: CancelToken,
	pending: Rc<Cell<Option<i32>>>,
	callback: FrameCallback,
}

impl FrameLoop {
	/// Schedule `on_frame` for the next frame and every frame after it.
	pub fn start(mut on_frame: impl FnMut() + 'static) -> Result<Self, CanvasError> {
		let window = web_sys::window().ok_or(CanvasError::NoWindow)?;
		let token = CancelToken::new();
		let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
		let callback: FrameCallback = Rc::new(RefCell::new(None));

		let (token_inner, pending_inner, callback_inner) =
			(token.clone(), pending.clone(), callback.clone());
		*callback.borrow_mut() = Some(Closure::new(move || {
			pending_inner.set(None);
			if token_inner.is_cancelled() {
				return;
			}
			on_frame();

			let Some(window) = web_sys::window() else {
				return;
			};
			if let Some(ref cb) = *callback_inner.borrow() {
				match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
					Ok(id) => pending_inner.set(Some(id)),
					Err(err) => log::warn!("knowledge-graph: frame request failed: {err:?}"),
				}
			}
		}));

		let first = callback
			.borrow()
			.as_ref()
			.map(|cb| window.request_animation_frame(cb.as_ref().unchecked_ref()))
			.transpose()?;
		pending.set(first);

		Ok(Self {
			token,
			pending,
			callback,
		})
	}

	/// Stop the loop. Safe to call more than once.
	pub fn cancel(&self) {
		self.token.cancel();
		if let Some(id) = self.pending.take() {
			if let Some(window) = web_sys::window() {
				let _ = window.cancel_animation_frame(id);
			}
		}
		// Breaks the closure's reference to itself.
		self.callback.borrow_mut().take();
	}
}

impl Drop for FrameLoop {
	fn drop(&mut self) {
		self.cancel();
	}
}

/// A `window` event listener that detaches itself when dropped.
pub struct WindowListener {
	event: &'static str,
	callback: Closure<dyn FnMut()>,
}

impl WindowListener {
	/// Register `handler` for `event` on `window`.
	pub fn add(
		event: &'static str,
		handler: impl FnMut() + 'static,
	) -> Result<Self, CanvasError> {
		let window = web_sys::window().ok_or(CanvasError::NoWindow)?;
		let callback: Closure<dyn FnMut()> = Closure::new(handler);
		window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
		Ok(Self { event, callback })
	}
}

impl Drop for WindowListener {
	fn drop(&mut self) {
		if let Some(window) = web_sys::window() {
			let _ = window.remove_event_listener_with_callback(
				self.event,
				self.callback.as_ref().unchecked_ref(),
			);
		}
	}
}
