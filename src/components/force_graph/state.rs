//! Per-instance graph state: the model, its layout and the interaction state.
//!
//! Created once when the component mounts, then mutated by the animation loop
//! (`tick`) and by pointer handlers (`handle_input`). Everything lives in this
//! one owned value, so two canvases on a page never share positions.

use rand::Rng;

use super::config::GraphConfig;
use super::interaction::{InteractionController, PointerInput, SelectionChange};
use super::layout::LayoutSimulation;
use super::scale::{ScaleConfig, ViewTransform};
use super::types::{GraphData, GraphNode};

/// Everything one canvas owns between frames.
pub struct GraphState {
	/// Nodes and edges being shown.
	pub data: GraphData,
	/// Node positions and velocities.
	pub layout: LayoutSimulation,
	/// Selection, drag and zoom.
	pub interaction: InteractionController,
	/// Canvas width in pixels.
	pub width: f64,
	/// Canvas height in pixels.
	pub height: f64,
}

impl GraphState {
	/// Place every node at a random spot inside the canvas.
	pub fn new<R: Rng + ?Sized>(
		data: GraphData,
		width: f64,
		height: f64,
		config: &GraphConfig,
		rng: &mut R,
	) -> Self {
		let mut layout = LayoutSimulation::new(config.simulation.clone());
		layout.initialize(&data.nodes, width, height, rng);

		Self {
			data,
			layout,
			interaction: InteractionController::new(config.zoom.clone()),
			width,
			height,
		}
	}

	/// Swap in a new node/edge set, keeping positions of nodes that survive.
	///
	/// Returns `Cleared` if the selected node is gone.
	pub fn set_data<R: Rng + ?Sized>(
		&mut self,
		data: GraphData,
		rng: &mut R,
	) -> Option<SelectionChange> {
		self.layout
			.initialize(&data.nodes, self.width, self.height, rng);
		self.data = data;

		let orphaned = self
			.interaction
			.selected()
			.is_some_and(|id| self.data.node(id).is_none());
		if orphaned {
			self.interaction.reset()
		} else {
			None
		}
	}

	/// Advance the layout by one frame. The dragged node, if any, stays put.
	pub fn tick(&mut self) {
		self.layout
			.step(self.width, self.height, self.interaction.dragged());
	}

	/// Route a pointer input through the controller under the current zoom.
	pub fn handle_input(
		&mut self,
		input: PointerInput,
		scale: &ScaleConfig,
	) -> Option<SelectionChange> {
		let view = self.view();
		self.interaction.handle(
			input,
			&self.data.nodes,
			&mut self.layout,
			&scale.node,
			&view,
		)
	}

	/// Clear the selection.
	pub fn reset(&mut self) -> Option<SelectionChange> {
		self.interaction.reset()
	}

	/// Look up a node by id.
	pub fn node(&self, id: &str) -> Option<&GraphNode> {
		self.data.node(id)
	}

	/// Current zoom as a view transform.
	pub fn view(&self) -> ViewTransform {
		ViewTransform::centered(self.interaction.zoom(), self.width, self.height)
	}

	/// New canvas size. Positions are not moved; the next `tick` re-applies the
	/// margins against the new bounds.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}

#[cfg(test)]
impl GraphState {
	pub(crate) fn selected_node(&self) -> Option<&GraphNode> {
		self.interaction.selected().and_then(|id| self.node(id))
	}

	pub(crate) fn with_seed(
		data: GraphData,
		width: f64,
		height: f64,
		config: &GraphConfig,
		seed: u64,
	) -> Self {
		use rand::SeedableRng;
		Self::new(
			data,
			width,
			height,
			config,
			&mut rand::rngs::StdRng::seed_from_u64(seed),
		)
	}
}
