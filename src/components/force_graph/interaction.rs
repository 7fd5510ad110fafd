//! Pointer interaction: selection, node dragging and zoom.
//!
//! The controller is a two-state machine (`Idle` / `Dragging`) fed with
//! [`PointerInput`] values in canvas-local screen coordinates. It knows nothing
//! about the DOM; the canvas component translates browser events into inputs.

use serde::Deserialize;

use super::layout::LayoutSimulation;
use super::scale::{NodeScaleConfig, ViewTransform};
use super::types::GraphNode;

/// A pointer event in canvas-local screen pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerInput {
	/// Button pressed.
	Down {
		/// Pixels from the canvas left edge.
		x: f64,
		/// Pixels from the canvas top edge.
		y: f64,
	},
	/// Pointer moved.
	Move {
		/// Pixels from the canvas left edge.
		x: f64,
		/// Pixels from the canvas top edge.
		y: f64,
	},
	/// Button released.
	Up,
	/// Pointer left the canvas.
	Leave,
	/// Scroll wheel turned.
	Wheel {
		/// Positive scrolls down (zoom out).
		delta_y: f64,
	},
}

/// Zoom limits and per-notch factors.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ZoomConfig {
	/// Smallest zoom factor. Never below [`MIN_ZOOM`].
	pub min: f64,
	/// Largest zoom factor.
	pub max: f64,
	/// Multiplier for one notch scrolled up.
	pub zoom_in: f64,
	/// Multiplier for one notch scrolled down.
	pub zoom_out: f64,
}

/// Floor for [`ZoomConfig::min`]; a zero zoom would make the view transform singular.
pub const MIN_ZOOM: f64 = 0.05;

impl Default for ZoomConfig {
	fn default() -> Self {
		Self {
			min: 0.5,
			max: 3.0,
			zoom_in: 1.1,
			zoom_out: 0.9,
		}
	}
}

/// Controller state.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Mode {
	/// No button held on a node.
	#[default]
	Idle,
	/// A node follows the pointer until release.
	Dragging {
		/// Node being dragged.
		node_id: String,
		/// Pointer minus node centre at drag start, in world units.
		offset: (f64, f64),
	},
}

/// Emitted when the selected node changes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectionChange {
	/// The node with this id became selected.
	Selected(String),
	/// Nothing is selected any more.
	Cleared,
}

/// Selection, drag and zoom state for one canvas.
#[derive(Clone, Debug)]
pub struct InteractionController {
	config: ZoomConfig,
	mode: Mode,
	selected: Option<String>,
	hovered: Option<String>,
	zoom: f64,
}

impl Default for InteractionController {
	fn default() -> Self {
		Self::new(ZoomConfig::default())
	}
}

impl InteractionController {
	/// Starts Idle with nothing selected and zoom 1 (pulled into range).
	pub fn new(mut config: ZoomConfig) -> Self {
		config.min = config.min.max(MIN_ZOOM);
		config.max = config.max.max(config.min);
		Self {
			zoom: 1.0_f64.max(config.min).min(config.max),
			config,
			mode: Mode::Idle,
			selected: None,
			hovered: None,
		}
	}

	/// Id of the selected node.
	pub fn selected(&self) -> Option<&str> {
		self.selected.as_deref()
	}

	/// Whether `id` is the selected node.
	pub fn is_selected(&self, id: &str) -> bool {
		self.selected.as_deref() == Some(id)
	}

	/// Id of the node being dragged, which the layout must leave alone.
	pub fn dragged(&self) -> Option<&str> {
		match &self.mode {
			Mode::Dragging { node_id, .. } => Some(node_id),
			Mode::Idle => None,
		}
	}

	/// Current zoom factor.
	pub fn zoom(&self) -> f64 {
		self.zoom
	}

	/// CSS cursor matching the current state.
	pub fn cursor(&self) -> &'static str {
		match self.mode {
			Mode::Dragging { .. } => "grabbing",
			Mode::Idle if self.hovered.is_some() => "pointer",
			Mode::Idle => "default",
		}
	}

	/// Topmost node whose circle contains the world-space point.
	///
	/// Nodes are drawn in slice order, so the scan runs in reverse to prefer the
	/// node painted last where circles overlap.
	pub fn hit_test<'a>(
		&self,
		nodes: &'a [GraphNode],
		layout: &LayoutSimulation,
		scale: &NodeScaleConfig,
		x: f64,
		y: f64,
	) -> Option<&'a GraphNode> {
		nodes.iter().rev().find(|node| {
			let Some((nx, ny)) = layout.position(&node.id) else {
				return false;
			};
			let (dx, dy) = (x - nx, y - ny);
			(dx * dx + dy * dy).sqrt() <= scale.display_radius(self.is_selected(&node.id))
		})
	}

	/// Apply one pointer input. Returns the selection change it caused, if any.
	pub fn handle(
		&mut self,
		input: PointerInput,
		nodes: &[GraphNode],
		layout: &mut LayoutSimulation,
		scale: &NodeScaleConfig,
		view: &ViewTransform,
	) -> Option<SelectionChange> {
		match input {
			PointerInput::Down { x, y } => {
				let (wx, wy) = view.screen_to_world(x, y);
				let hit = self
					.hit_test(nodes, layout, scale, wx, wy)
					.and_then(|node| Some((node.id.clone(), layout.position(&node.id)?)));

				match hit {
					Some((node_id, (nx, ny))) => {
						self.mode = Mode::Dragging {
							node_id: node_id.clone(),
							offset: (wx - nx, wy - ny),
						};
						self.select(Some(node_id))
					}
					None => self.select(None),
				}
			}
			PointerInput::Move { x, y } => {
				let (wx, wy) = view.screen_to_world(x, y);
				match &self.mode {
					Mode::Dragging { node_id, offset } => {
						layout.set_position(node_id, wx - offset.0, wy - offset.1);
					}
					Mode::Idle => {
						self.hovered = self
							.hit_test(nodes, layout, scale, wx, wy)
							.map(|node| node.id.clone());
					}
				}
				None
			}
			PointerInput::Up => {
				self.mode = Mode::Idle;
				None
			}
			PointerInput::Leave => {
				self.mode = Mode::Idle;
				self.hovered = None;
				None
			}
			PointerInput::Wheel { delta_y } => {
				self.apply_wheel(delta_y);
				None
			}
		}
	}

	/// Clear the selection. An in-progress drag keeps going until pointer-up.
	pub fn reset(&mut self) -> Option<SelectionChange> {
		self.select(None)
	}

	fn apply_wheel(&mut self, delta_y: f64) {
		let factor = if delta_y > 0.0 {
			self.config.zoom_out
		} else if delta_y < 0.0 {
			self.config.zoom_in
		} else {
			return;
		};
		self.zoom = (self.zoom * factor).clamp(self.config.min, self.config.max);
	}

	fn select(&mut self, id: Option<String>) -> Option<SelectionChange> {
		if self.selected == id {
			return None;
		}
		self.selected = id;
		Some(match &self.selected {
			Some(id) => SelectionChange::Selected(id.clone()),
			None => SelectionChange::Cleared,
		})
	}
}

#[cfg(test)]
impl InteractionController {
	pub(crate) fn mode(&self) -> &Mode {
		&self.mode
	}

	pub(crate) fn hovered(&self) -> Option<&str> {
		self.hovered.as_deref()
	}
}
