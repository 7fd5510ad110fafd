//! Leptos component wrapping the knowledge graph canvas.
//!
//! The component creates an HTML canvas element, translates mouse/wheel events
//! into [`PointerInput`]s for the interaction controller, and drives a
//! [`FrameLoop`] that steps the layout and repaints every frame. The loop and
//! the window resize listener are torn down when the component unmounts.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, info, warn};
use send_wrapper::SendWrapper;
use wasm_bindgen::JsCast;
use web_sys::{
	CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement, MouseEvent, WheelEvent,
};

use super::config::GraphConfig;
use super::driver::{FrameLoop, WindowListener, advance_frame};
use super::error::CanvasError;
use super::interaction::{PointerInput, SelectionChange};
use super::scale::ScaleConfig;
use super::state::GraphState;
use super::theme::Theme;
use super::types::{GraphData, GraphNode};

/// Bundles graph state with visual configuration (scaling, theme).
struct GraphContext {
	state: GraphState,
	scale: ScaleConfig,
	theme: Theme,
}

type Shared<T> = Rc<RefCell<Option<T>>>;

/// How the canvas picks its pixel size.
#[derive(Clone, Copy, Debug)]
struct Sizing {
	fullscreen: bool,
	width: Option<f64>,
	height: Option<f64>,
}

impl Sizing {
	fn measure(&self, canvas: &HtmlCanvasElement) -> Result<(f64, f64), CanvasError> {
		let viewport = if self.fullscreen {
			let window = web_sys::window().ok_or(CanvasError::NoWindow)?;
			Some((
				window.inner_width()?.as_f64().unwrap_or(800.0),
				window.inner_height()?.as_f64().unwrap_or(600.0),
			))
		} else {
			None
		};
		let parent = canvas
			.parent_element()
			.map(|p| (p.client_width() as f64, p.client_height() as f64));
		Ok(self.resolve(viewport, parent))
	}

	/// Explicit dimensions win, then the viewport (fullscreen only), then the
	/// parent's client box, then 800x600.
	fn resolve(&self, viewport: Option<(f64, f64)>, parent: Option<(f64, f64)>) -> (f64, f64) {
		let (auto_w, auto_h) = viewport
			.filter(|_| self.fullscreen)
			.or(parent)
			.unwrap_or((800.0, 600.0));
		(self.width.unwrap_or(auto_w), self.height.unwrap_or(auto_h))
	}
}

fn selection_payload(state: &GraphState, change: SelectionChange) -> Option<GraphNode> {
	match change {
		SelectionChange::Selected(id) => {
			debug!("knowledge-graph: selected {id}");
			state.node(&id).cloned()
		}
		SelectionChange::Cleared => {
			debug!("knowledge-graph: selection cleared");
			None
		}
	}
}

fn canvas_point(
	canvas_ref: NodeRef<leptos::html::Canvas>,
	ev: &MouseEvent,
) -> Option<(f64, f64)> {
	let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
	let rect = canvas.get_bounding_client_rect();
	Some((
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}

/// Feed one input to the controller, update the cursor, and report any
/// selection change to `on_select` once the state borrow is released.
fn dispatch(
	context: &Shared<GraphContext>,
	canvas_ref: NodeRef<leptos::html::Canvas>,
	on_select: Option<Callback<Option<GraphNode>>>,
	input: PointerInput,
) {
	let (payload, cursor) = {
		let mut guard = context.borrow_mut();
		let Some(c) = guard.as_mut() else {
			return;
		};
		let zoom = c.state.interaction.zoom();
		let change = c.state.handle_input(input, &c.scale);
		if c.state.interaction.zoom() != zoom {
			debug!("knowledge-graph: zoom {:.2}", c.state.interaction.zoom());
		}
		(
			change.map(|change| selection_payload(&c.state, change)),
			c.state.interaction.cursor(),
		)
	};

	if let Some(canvas) = canvas_ref.get() {
		let canvas: HtmlCanvasElement = canvas.into();
		let _ = HtmlElement::style(&canvas).set_property("cursor", cursor);
	}
	if let (Some(payload), Some(on_select)) = (payload, on_select) {
		on_select.run(payload);
	}
}

fn mount(
	canvas: &HtmlCanvasElement,
	sizing: Sizing,
	data: GraphData,
	config: &GraphConfig,
	context: &Shared<GraphContext>,
	frame_loop: &Shared<FrameLoop>,
	resize_listener: &Shared<WindowListener>,
) -> Result<(), CanvasError> {
	let (w, h) = sizing.measure(canvas)?;
	canvas.set_width(w as u32);
	canvas.set_height(h as u32);

	let ctx: CanvasRenderingContext2d = canvas
		.get_context("2d")?
		.ok_or(CanvasError::NoContext)?
		.dyn_into()
		.map_err(|_| CanvasError::NoContext)?;

	info!(
		"knowledge-graph: mounting {} nodes, {} edges on {w}x{h} canvas",
		data.nodes.len(),
		data.edges.len()
	);
	*context.borrow_mut() = Some(GraphContext {
		state: GraphState::new(data, w, h, config, &mut rand::thread_rng()),
		scale: config.scale.clone(),
		theme: Theme::default(),
	});

	let (context_resize, canvas_resize) = (context.clone(), canvas.clone());
	*resize_listener.borrow_mut() = Some(WindowListener::add("resize", move || {
		let (nw, nh) = match sizing.measure(&canvas_resize) {
			Ok(size) => size,
			Err(err) => {
				warn!("knowledge-graph: resize measurement failed: {err}");
				return;
			}
		};
		canvas_resize.set_width(nw as u32);
		canvas_resize.set_height(nh as u32);
		if let Some(ref mut c) = *context_resize.borrow_mut() {
			c.state.resize(nw, nh);
		}
		debug!("knowledge-graph: resized to {nw}x{nh}");
	})?);

	let context_anim = context.clone();
	*frame_loop.borrow_mut() = Some(FrameLoop::start(move || {
		if let Some(ref mut c) = *context_anim.borrow_mut() {
			advance_frame(&mut c.state, &ctx, &c.scale, &c.theme);
		}
	})?);

	Ok(())
}

/// Renders an interactive knowledge graph on a canvas element.
///
/// Pass graph data via the reactive `data` signal. The component sizes itself
/// to its parent container by default; set `fullscreen = true` to fill the
/// viewport. Explicit `width`/`height` override automatic sizing. The canvas is
/// re-measured whenever the window resizes.
///
/// `on_select` receives the selected node, or `None` when the selection is
/// cleared. Each change of the `reset` signal clears the selection.
#[component]
pub fn ForceGraphCanvas(
	#[prop(into)] data: Signal<GraphData>,
	#[prop(optional)] config: GraphConfig,
	#[prop(default = false)] fullscreen: bool,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
	#[prop(optional, into)] reset: Option<Signal<u32>>,
	#[prop(optional)] on_select: Option<Callback<Option<GraphNode>>>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Shared<GraphContext> = Rc::new(RefCell::new(None));
	let frame_loop: Shared<FrameLoop> = Rc::new(RefCell::new(None));
	let resize_listener: Shared<WindowListener> = Rc::new(RefCell::new(None));
	let sizing = Sizing {
		fullscreen,
		width,
		height,
	};

	let (context_init, frame_loop_init, resize_init) =
		(context.clone(), frame_loop.clone(), resize_listener.clone());
	Effect::new(move |_| {
		let graph = data.get();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();

		// Already mounted: keep the loop and existing positions, swap the data.
		let change = match *context_init.borrow_mut() {
			Some(ref mut c) => Some(
				c.state
					.set_data(graph.clone(), &mut rand::thread_rng())
					.map(|change| selection_payload(&c.state, change)),
			),
			None => None,
		};
		if let Some(change) = change {
			if let (Some(payload), Some(on_select)) = (change, on_select) {
				on_select.run(payload);
			}
			return;
		}

		if let Err(err) = mount(
			&canvas,
			sizing,
			graph,
			&config,
			&context_init,
			&frame_loop_init,
			&resize_init,
		) {
			warn!("knowledge-graph: canvas mount failed: {err}");
		}
	});

	if let Some(reset) = reset {
		let context_reset = context.clone();
		Effect::new(move |prev: Option<u32>| {
			let count = reset.get();
			if prev.is_some_and(|prev| prev != count) {
				let payload = context_reset
					.borrow_mut()
					.as_mut()
					.and_then(|c| c.state.reset())
					.map(|_| None::<GraphNode>);
				debug!("knowledge-graph: reset requested");
				if let (Some(payload), Some(on_select)) = (payload, on_select) {
					on_select.run(payload);
				}
			}
			count
		});
	}

	let teardown = SendWrapper::new((frame_loop, resize_listener, context.clone()));
	on_cleanup(move || {
		let (frame_loop, resize_listener, context) = teardown.take();
		if let Some(frame_loop) = frame_loop.borrow_mut().take() {
			frame_loop.cancel();
		}
		resize_listener.borrow_mut().take();
		context.borrow_mut().take();
		debug!("knowledge-graph: unmounted");
	});

	let context_md = context.clone();
	let on_mousedown = move |ev: MouseEvent| {
		if let Some((x, y)) = canvas_point(canvas_ref, &ev) {
			dispatch(&context_md, canvas_ref, on_select, PointerInput::Down { x, y });
		}
	};

	let context_mm = context.clone();
	let on_mousemove = move |ev: MouseEvent| {
		if let Some((x, y)) = canvas_point(canvas_ref, &ev) {
			dispatch(&context_mm, canvas_ref, on_select, PointerInput::Move { x, y });
		}
	};

	let context_mu = context.clone();
	let on_mouseup = move |_: MouseEvent| {
		dispatch(&context_mu, canvas_ref, on_select, PointerInput::Up);
	};

	let context_ml = context.clone();
	let on_mouseleave = move |_: MouseEvent| {
		dispatch(&context_ml, canvas_ref, on_select, PointerInput::Leave);
	};

	let context_wh = context;
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		dispatch(
			&context_wh,
			canvas_ref,
			on_select,
			PointerInput::Wheel {
				delta_y: ev.delta_y(),
			},
		);
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="knowledge-graph-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:wheel=on_wheel
			style="display: block; width: 100%; height: 100%;"
		/>
	}
}
