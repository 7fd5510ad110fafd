//! Frame rendering for the knowledge graph.
//!
//! Draw order is fixed for correct layering:
//! 1. Clear the surface
//! 2. Edge lines, each followed by its relationship label
//! 3. Nodes in declaration order: glow (selected only), disc, then name
//!
//! Anything whose position is not yet known is skipped for this frame.

use super::scale::ScaleConfig;
use super::state::GraphState;
use super::surface::Surface;
use super::theme::Theme;

/// Renders the complete graph to the surface. Reads state, never mutates it.
pub fn paint<S: Surface + ?Sized>(
	surface: &S,
	state: &GraphState,
	config: &ScaleConfig,
	theme: &Theme,
) {
	surface.clear(state.width, state.height);
	surface.push_view(&state.view());
	draw_edges(surface, state, config, theme);
	draw_nodes(surface, state, config, theme);
	surface.pop_view();
}

fn draw_edges<S: Surface + ?Sized>(
	surface: &S,
	state: &GraphState,
	config: &ScaleConfig,
	theme: &Theme,
) {
	let stroke = theme.edge.color.to_css();
	let label_fill = theme.edge.label_color.to_css();
	let font = config.edge.label_font();

	for edge in &state.data.edges {
		let (Some(from), Some(to)) = (
			state.layout.position(&edge.source),
			state.layout.position(&edge.target),
		) else {
			continue;
		};

		surface.line(from, to, &stroke, config.edge.line_width);

		if edge.relationship.is_empty() {
			continue;
		}
		let at = label_anchor(from, to, config.edge.label_offset);
		surface.text(&edge.relationship.to_uppercase(), at, &font, &label_fill);
	}
}

/// Midpoint of the segment pushed `offset` along its upward-facing normal.
fn label_anchor(from: (f64, f64), to: (f64, f64), offset: f64) -> (f64, f64) {
	let (mx, my) = ((from.0 + to.0) / 2.0, (from.1 + to.1) / 2.0);
	let (dx, dy) = (to.0 - from.0, to.1 - from.1);
	let len = (dx * dx + dy * dy).sqrt();
	if len < 0.001 {
		return (mx, my - offset);
	}

	let (mut nx, mut ny) = (-dy / len, dx / len);
	if ny > 0.0 {
		(nx, ny) = (-nx, -ny);
	}
	(mx + nx * offset, my + ny * offset)
}

fn draw_nodes<S: Surface + ?Sized>(
	surface: &S,
	state: &GraphState,
	config: &ScaleConfig,
	theme: &Theme,
) {
	let label_fill = theme.node.label_color.to_css();

	for node in &state.data.nodes {
		let Some(center) = state.layout.position(&node.id) else {
			continue;
		};
		let selected = state.interaction.is_selected(&node.id);
		let radius = config.node.display_radius(selected);
		let color = theme.node_color(node.kind);

		if selected {
			surface.glow(
				center,
				radius * config.node.glow_factor,
				&color.with_alpha(theme.node.glow_alpha).to_css(),
				&color.with_alpha(0.0).to_css(),
			);
		}

		let fill = if selected {
			color
		} else {
			color.with_alpha(theme.node.idle_alpha)
		};
		surface.circle(center, radius, &fill.to_css());
		surface.text(
			&node.name.to_uppercase(),
			center,
			&config.node.label_font(selected),
			&label_fill,
		);
	}
}

#[cfg(test)]
pub(crate) mod tests {
	use std::cell::RefCell;

	use super::super::config::GraphConfig;
	use super::super::interaction::PointerInput;
	use super::super::scale::ViewTransform;
	use super::super::types::{GraphData, GraphEdge, GraphNode, NodeType};
	use super::*;

	#[derive(Clone, Debug, PartialEq)]
	pub(crate) enum Op {
		Clear(f64, f64),
		PushView(ViewTransform),
		PopView,
		Line((f64, f64), (f64, f64)),
		Circle((f64, f64), f64, String),
		Glow((f64, f64), f64),
		Text(String, (f64, f64), String),
	}

	#[derive(Default)]
	pub(crate) struct RecordingSurface {
		pub(crate) ops: RefCell<Vec<Op>>,
	}

	impl Surface for RecordingSurface {
		fn clear(&self, width: f64, height: f64) {
			self.ops.borrow_mut().push(Op::Clear(width, height));
		}
		fn push_view(&self, view: &ViewTransform) {
			self.ops.borrow_mut().push(Op::PushView(*view));
		}
		fn pop_view(&self) {
			self.ops.borrow_mut().push(Op::PopView);
		}
		fn line(&self, from: (f64, f64), to: (f64, f64), _stroke: &str, _width: f64) {
			self.ops.borrow_mut().push(Op::Line(from, to));
		}
		fn circle(&self, center: (f64, f64), radius: f64, fill: &str) {
			self.ops
				.borrow_mut()
				.push(Op::Circle(center, radius, fill.to_string()));
		}
		fn glow(&self, center: (f64, f64), radius: f64, _inner: &str, _outer: &str) {
			self.ops.borrow_mut().push(Op::Glow(center, radius));
		}
		fn text(&self, text: &str, at: (f64, f64), font: &str, _fill: &str) {
			self.ops
				.borrow_mut()
				.push(Op::Text(text.to_string(), at, font.to_string()));
		}
	}

	pub(crate) fn node(id: &str, kind: NodeType) -> GraphNode {
		GraphNode {
			id: id.into(),
			name: id.into(),
			kind,
			content: String::new(),
			images: Vec::new(),
			links: Vec::new(),
		}
	}

	fn two_node_state() -> GraphState {
		let data = GraphData {
			nodes: vec![node("a", NodeType::Project), node("b", NodeType::Technology)],
			edges: vec![GraphEdge {
				source: "a".into(),
				target: "b".into(),
				relationship: "uses".into(),
			}],
		};
		let mut state = GraphState::with_seed(data, 800.0, 600.0, &GraphConfig::default(), 42);
		state.layout.set_position("a", 100.0, 200.0);
		state.layout.set_position("b", 300.0, 200.0);
		state
	}

	fn render(state: &GraphState) -> Vec<Op> {
		let surface = RecordingSurface::default();
		paint(&surface, state, &ScaleConfig::default(), &Theme::default());
		surface.ops.into_inner()
	}

	#[test]
	fn mounted_nodes_start_inside_margins() {
		let data = two_node_state().data;
		let state = GraphState::with_seed(data, 800.0, 600.0, &GraphConfig::default(), 7);
		for id in ["a", "b"] {
			let (x, y) = state.layout.position(id).unwrap();
			assert!((30.0..=770.0).contains(&x));
			assert!((30.0..=570.0).contains(&y));
		}
	}

	#[test]
	fn edge_is_drawn_with_uppercased_label_above_midpoint() {
		let ops = render(&two_node_state());

		assert_eq!(ops[0], Op::Clear(800.0, 600.0));
		assert!(matches!(ops[1], Op::PushView(_)));
		assert_eq!(ops[2], Op::Line((100.0, 200.0), (300.0, 200.0)));
		assert_eq!(
			ops[3],
			Op::Text("USES".into(), (200.0, 192.0), "12px sans-serif".into())
		);
		assert_eq!(ops.last(), Some(&Op::PopView));
	}

	#[test]
	fn edges_are_drawn_before_nodes() {
		let ops = render(&two_node_state());
		let last_line = ops.iter().rposition(|op| matches!(op, Op::Line(..)));
		let first_circle = ops.iter().position(|op| matches!(op, Op::Circle(..)));
		assert!(last_line < first_circle);
	}

	#[test]
	fn unselected_nodes_are_translucent_with_plain_labels() {
		let ops = render(&two_node_state());
		assert!(ops.contains(&Op::Circle(
			(100.0, 200.0),
			22.0,
			"rgba(16, 185, 129, 0.8)".into()
		)));
		assert!(ops.contains(&Op::Text(
			"A".into(),
			(100.0, 200.0),
			"13px sans-serif".into()
		)));
		assert!(!ops.iter().any(|op| matches!(op, Op::Glow(..))));
	}

	#[test]
	fn selected_node_gets_glow_then_opaque_larger_disc() {
		let mut state = two_node_state();
		state.handle_input(PointerInput::Down { x: 300.0, y: 200.0 }, &ScaleConfig::default());

		let ops = render(&state);
		let glow = ops
			.iter()
			.position(|op| *op == Op::Glow((300.0, 200.0), 56.0))
			.unwrap();
		assert_eq!(
			ops[glow + 1],
			Op::Circle((300.0, 200.0), 28.0, "#8b5cf6".into())
		);
		assert_eq!(
			ops[glow + 2],
			Op::Text("B".into(), (300.0, 200.0), "bold 14px sans-serif".into())
		);
	}

	#[test]
	fn nodes_and_edges_without_positions_are_skipped() {
		let mut state = two_node_state();
		state.data.nodes.push(node("late", NodeType::Topic));
		state.data.edges.push(GraphEdge {
			source: "a".into(),
			target: "late".into(),
			relationship: "links".into(),
		});

		let ops = render(&state);
		assert_eq!(ops.iter().filter(|op| matches!(op, Op::Line(..))).count(), 1);
		assert_eq!(ops.iter().filter(|op| matches!(op, Op::Circle(..))).count(), 2);
	}

	#[test]
	fn label_anchor_sits_off_the_line() {
		let (x, y) = label_anchor((0.0, 0.0), (0.0, 100.0), 8.0);
		assert!((x.abs() - 8.0).abs() < 1e-9);
		assert!((y - 50.0).abs() < 1e-9);

		let (x, y) = label_anchor((50.0, 50.0), (50.0, 50.0), 8.0);
		assert_eq!((x, y), (50.0, 42.0));
	}
}
