//! knowledge-graph: interactive canvas visualization of a small portfolio graph.
//!
//! This crate provides a WASM-based graph component where typed nodes drift
//! slowly inside the canvas, can be dragged and selected, and reveal their
//! details in a side card.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

// Only needed to switch on the `js` entropy source for `rand` on wasm32.
use getrandom as _;

pub mod components;
mod sample;

use components::detail_panel::NodeDetail;
pub use components::force_graph::{
	ForceGraphCanvas, GraphConfig, GraphData, GraphEdge, GraphNode, NodeType, Theme,
};

/// Pixel height of the graph canvas in [`App`].
pub const GRAPH_HEIGHT: f64 = 500.0;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("knowledge-graph: logging initialized");
}

/// Text content of the `<script>` element with the given id, if present.
fn script_text(element_id: &str) -> Option<String> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id(element_id)?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

/// Graph data from `#graph-data`, or the built-in portfolio when the element
/// is absent or its JSON does not parse.
fn load_graph_data() -> GraphData {
	let parsed = script_text("graph-data").and_then(|json_text| {
		serde_json::from_str::<GraphData>(&json_text)
			.inspect_err(|e| warn!("knowledge-graph: failed to parse graph data: {e}"))
			.ok()
	});

	match parsed {
		Some(data) => {
			info!(
				"knowledge-graph: loaded {} nodes, {} edges",
				data.nodes.len(),
				data.edges.len()
			);
			data
		}
		None => {
			info!("knowledge-graph: no embedded graph, using sample portfolio");
			sample::portfolio()
		}
	}
}

/// Tuning overrides from `#graph-config`; defaults when absent or invalid.
fn load_config() -> GraphConfig {
	let Some(json_text) = script_text("graph-config") else {
		return GraphConfig::default();
	};
	GraphConfig::from_json(&json_text).unwrap_or_else(|e| {
		warn!("knowledge-graph: failed to parse graph config: {e}");
		GraphConfig::default()
	})
}

/// Main application component.
/// Loads graph data and config from the DOM and renders the graph with its
/// legend, reset button and detail card.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let graph_data = load_graph_data();
	let graph_signal = Signal::derive(move || graph_data.clone());
	let config = load_config();

	let (selected, set_selected) = signal(None::<GraphNode>);
	let (reset_count, set_reset_count) = signal(0u32);
	let on_select = Callback::new(move |node: Option<GraphNode>| set_selected.set(node));
	let on_reset = Callback::new(move |_: ()| set_reset_count.update(|n| *n += 1));

	let theme = Theme::default();
	let legend = NodeType::ALL
		.iter()
		.map(|&kind| {
			let swatch = format!("background: {};", theme.node_color(kind).to_css());
			view! {
				<span class="legend-item">
					<span class="legend-swatch" style=swatch></span>
					{kind.as_str().to_uppercase()}
				</span>
			}
		})
		.collect_view();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Knowledge Graph" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="knowledge-graph">
			<div class="graph-toolbar">
				<button class="graph-reset" on:click=move |_| on_reset.run(())>"RESET VIEW"</button>
				<div class="graph-legend">{legend}</div>
			</div>
			<div class="graph-frame" style=format!("height: {GRAPH_HEIGHT}px;")>
				<ForceGraphCanvas
					data=graph_signal
					config=config
					height=Some(GRAPH_HEIGHT)
					reset=reset_count
					on_select=on_select
				/>
			</div>
			{move || {
				selected.get().map(|node| view! { <NodeDetail node=node on_close=on_reset /> })
			}}
			<p class="graph-hint">
				"CLICK AND DRAG NODES TO INTERACT WITH THE GRAPH. SCROLL TO ZOOM."
			</p>
		</div>
	}
}
