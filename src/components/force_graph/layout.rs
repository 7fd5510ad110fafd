//! Kinetic layout: per-node position and velocity with boundary containment.
//!
//! Nodes never attract or repel each other. Each step moves a node by its
//! velocity, reflects it off a margin inset from the canvas edges, and damps
//! the velocity. The result is a slow perpetual drift rather than a layout that
//! converges.

use std::collections::HashMap;

use rand::Rng;
use serde::Deserialize;

use super::types::GraphNode;

/// Tunables for the kinetic integrator.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
	/// Distance from each canvas edge that nodes bounce off.
	pub margin: f64,
	/// Inset of the rectangle initial positions are sampled from.
	pub spawn_padding: f64,
	/// Width of the initial velocity range; components are uniform in `±speed / 2`.
	pub initial_speed: f64,
	/// Fraction of the perpendicular velocity kept after a bounce.
	pub restitution: f64,
	/// Per-step velocity multiplier.
	pub damping: f64,
}

impl Default for SimulationConfig {
	fn default() -> Self {
		Self {
			margin: 30.0,
			spawn_padding: 100.0,
			initial_speed: 0.5,
			restitution: 0.8,
			damping: 0.99,
		}
	}
}

/// Position and velocity of one node, in canvas pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NodePosition {
	/// Centre, in canvas pixels.
	pub x: f64,
	/// Centre, in canvas pixels.
	pub y: f64,
	/// Pixels per frame.
	pub vx: f64,
	/// Pixels per frame.
	pub vy: f64,
}

/// Owned position table for one visualizer instance, keyed by node id.
#[derive(Clone, Debug, Default)]
pub struct LayoutSimulation {
	config: SimulationConfig,
	positions: HashMap<String, NodePosition>,
}

impl LayoutSimulation {
	/// An empty table; call [`initialize`](Self::initialize) to place nodes.
	pub fn new(config: SimulationConfig) -> Self {
		Self {
			config,
			positions: HashMap::new(),
		}
	}

	/// Place every node that has no position yet.
	///
	/// Nodes already in the table keep their position and velocity, so calling
	/// this again with the same node set is a no-op. Entries for ids that are no
	/// longer in `nodes` are dropped.
	pub fn initialize<R: Rng + ?Sized>(
		&mut self,
		nodes: &[GraphNode],
		width: f64,
		height: f64,
		rng: &mut R,
	) {
		self.positions
			.retain(|id, _| nodes.iter().any(|node| &node.id == id));

		let (x_lo, x_hi) = spawn_range(width, self.config.spawn_padding, self.config.margin);
		let (y_lo, y_hi) = spawn_range(height, self.config.spawn_padding, self.config.margin);
		let speed = self.config.initial_speed;

		for node in nodes {
			if self.positions.contains_key(&node.id) {
				continue;
			}
			let position = NodePosition {
				x: x_lo + rng.r#gen::<f64>() * (x_hi - x_lo),
				y: y_lo + rng.r#gen::<f64>() * (y_hi - y_lo),
				vx: (rng.r#gen::<f64>() - 0.5) * speed,
				vy: (rng.r#gen::<f64>() - 0.5) * speed,
			};
			self.positions.insert(node.id.clone(), position);
		}
	}

	/// Advance every node except `pinned` by one frame.
	pub fn step(&mut self, width: f64, height: f64, pinned: Option<&str>) {
		let SimulationConfig {
			margin,
			restitution,
			damping,
			..
		} = self.config;

		for (id, pos) in self.positions.iter_mut() {
			if pinned == Some(id.as_str()) {
				continue;
			}

			pos.x += pos.vx;
			pos.y += pos.vy;

			reflect(&mut pos.x, &mut pos.vx, bounds(width, margin), restitution);
			reflect(&mut pos.y, &mut pos.vy, bounds(height, margin), restitution);

			pos.vx *= damping;
			pos.vy *= damping;
		}
	}

	/// Move a node directly, leaving its velocity untouched. Unknown ids are ignored.
	pub fn set_position(&mut self, id: &str, x: f64, y: f64) {
		if let Some(pos) = self.positions.get_mut(id) {
			pos.x = x;
			pos.y = y;
		}
	}

	/// Current `(x, y)` of a node, or `None` if it has not been placed.
	pub fn position(&self, id: &str) -> Option<(f64, f64)> {
		self.positions.get(id).map(|p| (p.x, p.y))
	}
}

#[cfg(test)]
impl NodePosition {
	pub(crate) fn speed(&self) -> f64 {
		(self.vx * self.vx + self.vy * self.vy).sqrt()
	}
}

#[cfg(test)]
impl LayoutSimulation {
	pub(crate) fn node_position(&self, id: &str) -> Option<&NodePosition> {
		self.positions.get(id)
	}

	pub(crate) fn node_position_mut(&mut self, id: &str) -> Option<&mut NodePosition> {
		self.positions.get_mut(id)
	}

	pub(crate) fn config(&self) -> &SimulationConfig {
		&self.config
	}

	pub(crate) fn len(&self) -> usize {
		self.positions.len()
	}
}

/// Sampling interval along one axis: inset by `padding` when the canvas is large
/// enough, otherwise by `margin`, otherwise the midpoint.
fn spawn_range(extent: f64, padding: f64, margin: f64) -> (f64, f64) {
	let inset = if extent > 2.0 * padding {
		padding
	} else if extent > 2.0 * margin {
		margin
	} else {
		extent / 2.0
	};
	(inset, extent - inset)
}

/// Allowed interval along one axis. Collapses to the midpoint when the canvas is
/// narrower than both margins together.
fn bounds(extent: f64, margin: f64) -> (f64, f64) {
	if extent > 2.0 * margin {
		(margin, extent - margin)
	} else {
		(extent / 2.0, extent / 2.0)
	}
}

fn reflect(pos: &mut f64, vel: &mut f64, (lo, hi): (f64, f64), restitution: f64) {
	if *pos < lo {
		*pos = lo;
		*vel = -*vel * restitution;
	} else if *pos > hi {
		*pos = hi;
		*vel = -*vel * restitution;
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::super::types::NodeType;
	use super::*;

	fn node(id: &str) -> GraphNode {
		GraphNode {
			id: id.into(),
			name: id.to_uppercase(),
			kind: NodeType::Topic,
			content: String::new(),
			images: Vec::new(),
			links: Vec::new(),
		}
	}

	fn nodes(n: usize) -> Vec<GraphNode> {
		(0..n).map(|i| node(&format!("n{i}"))).collect()
	}

	fn within(layout: &LayoutSimulation, id: &str, width: f64, height: f64) -> bool {
		let margin = layout.config().margin;
		let (x, y) = layout.position(id).unwrap();
		(margin..=width - margin).contains(&x) && (margin..=height - margin).contains(&y)
	}

	#[test]
	fn initialize_places_nodes_inside_margins() {
		let mut rng = StdRng::seed_from_u64(1);
		let mut layout = LayoutSimulation::new(SimulationConfig::default());
		let ns = nodes(50);
		layout.initialize(&ns, 800.0, 500.0, &mut rng);

		assert_eq!(layout.len(), 50);
		for n in &ns {
			assert!(within(&layout, &n.id, 800.0, 500.0));
			let p = layout.node_position(&n.id).unwrap();
			assert!(p.vx.abs() <= 0.25 && p.vy.abs() <= 0.25);
		}
	}

	#[test]
	fn small_canvas_still_spawns_inside_margins() {
		let mut rng = StdRng::seed_from_u64(2);
		let mut layout = LayoutSimulation::new(SimulationConfig::default());
		let ns = nodes(20);
		layout.initialize(&ns, 150.0, 120.0, &mut rng);
		for n in &ns {
			assert!(within(&layout, &n.id, 150.0, 120.0));
		}
	}

	#[test]
	fn initialize_is_idempotent_per_id() {
		let mut rng = StdRng::seed_from_u64(3);
		let mut layout = LayoutSimulation::new(SimulationConfig::default());
		let mut ns = nodes(3);
		layout.initialize(&ns, 800.0, 600.0, &mut rng);
		let before = *layout.node_position("n1").unwrap();

		ns.push(node("extra"));
		layout.initialize(&ns, 800.0, 600.0, &mut rng);

		assert_eq!(*layout.node_position("n1").unwrap(), before);
		assert!(layout.position("extra").is_some());
		assert_eq!(layout.len(), 4);
	}

	#[test]
	fn initialize_drops_removed_nodes() {
		let mut rng = StdRng::seed_from_u64(4);
		let mut layout = LayoutSimulation::new(SimulationConfig::default());
		layout.initialize(&nodes(3), 800.0, 600.0, &mut rng);
		layout.initialize(&nodes(2), 800.0, 600.0, &mut rng);
		assert_eq!(layout.len(), 2);
		assert!(layout.position("n2").is_none());
	}

	#[test]
	fn step_keeps_nodes_in_bounds_under_large_velocities() {
		let mut rng = StdRng::seed_from_u64(5);
		let mut layout = LayoutSimulation::new(SimulationConfig::default());
		let ns = nodes(30);
		layout.initialize(&ns, 640.0, 480.0, &mut rng);
		for (i, n) in ns.iter().enumerate() {
			let p = layout.node_position_mut(&n.id).unwrap();
			p.vx = if i % 2 == 0 { 900.0 } else { -750.0 };
			p.vy = (i as f64 - 15.0) * 40.0;
		}

		for _ in 0..500 {
			layout.step(640.0, 480.0, None);
			for n in &ns {
				assert!(within(&layout, &n.id, 640.0, 480.0));
			}
		}
	}

	#[test]
	fn degenerate_canvas_holds_nodes_at_the_midpoint() {
		let mut rng = StdRng::seed_from_u64(10);
		let mut layout = LayoutSimulation::new(SimulationConfig::default());
		layout.initialize(&nodes(3), 0.0, 0.0, &mut rng);
		for _ in 0..3 {
			layout.step(0.0, 0.0, None);
			for i in 0..3 {
				assert_eq!(layout.position(&format!("n{i}")), Some((0.0, 0.0)));
			}
		}

		layout.initialize(&nodes(1), 40.0, 400.0, &mut rng);
		for _ in 0..50 {
			layout.step(40.0, 400.0, None);
			let (x, y) = layout.position("n0").unwrap();
			assert_eq!(x, 20.0);
			assert!((30.0..=370.0).contains(&y));
		}
	}

	#[test]
	fn bounce_reflects_and_attenuates_velocity() {
		let mut layout = LayoutSimulation::new(SimulationConfig::default());
		let mut rng = StdRng::seed_from_u64(6);
		layout.initialize(&[node("a")], 400.0, 400.0, &mut rng);
		*layout.node_position_mut("a").unwrap() = NodePosition {
			x: 32.0,
			y: 200.0,
			vx: -5.0,
			vy: 0.0,
		};

		layout.step(400.0, 400.0, None);

		let p = layout.node_position("a").unwrap();
		assert_eq!(p.x, 30.0);
		assert!((p.vx - 5.0 * 0.8 * 0.99).abs() < 1e-9);
	}

	#[test]
	fn speed_never_increases_without_collisions() {
		let mut layout = LayoutSimulation::new(SimulationConfig::default());
		let mut rng = StdRng::seed_from_u64(7);
		layout.initialize(&[node("a")], 2000.0, 2000.0, &mut rng);
		*layout.node_position_mut("a").unwrap() = NodePosition {
			x: 1000.0,
			y: 1000.0,
			vx: 0.3,
			vy: -0.2,
		};

		let mut last = layout.node_position("a").unwrap().speed();
		for _ in 0..200 {
			layout.step(2000.0, 2000.0, None);
			let speed = layout.node_position("a").unwrap().speed();
			assert!(speed < last);
			last = speed;
		}
	}

	#[test]
	fn pinned_node_is_not_moved_by_step() {
		let mut layout = LayoutSimulation::new(SimulationConfig::default());
		let mut rng = StdRng::seed_from_u64(8);
		layout.initialize(&nodes(2), 800.0, 600.0, &mut rng);
		layout.set_position("n0", 5.0, 5.0);
		let pinned = *layout.node_position("n0").unwrap();
		let free = *layout.node_position("n1").unwrap();

		for _ in 0..10 {
			layout.step(800.0, 600.0, Some("n0"));
		}

		assert_eq!(*layout.node_position("n0").unwrap(), pinned);
		assert_ne!(*layout.node_position("n1").unwrap(), free);
	}

	#[test]
	fn set_position_ignores_unknown_ids_and_keeps_velocity() {
		let mut layout = LayoutSimulation::new(SimulationConfig::default());
		let mut rng = StdRng::seed_from_u64(9);
		layout.initialize(&[node("a")], 800.0, 600.0, &mut rng);
		let before = *layout.node_position("a").unwrap();

		layout.set_position("ghost", 1.0, 1.0);
		layout.set_position("a", 120.0, 140.0);

		assert!(layout.position("ghost").is_none());
		let after = layout.node_position("a").unwrap();
		assert_eq!((after.x, after.y), (120.0, 140.0));
		assert_eq!((after.vx, after.vy), (before.vx, before.vy));
	}
}
