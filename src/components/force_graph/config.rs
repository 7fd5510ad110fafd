//! Tunables for one graph instance, loadable from JSON.

use serde::Deserialize;

use super::interaction::ZoomConfig;
use super::layout::SimulationConfig;
use super::scale::ScaleConfig;

/// Everything a host page may override. Missing fields keep their defaults.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
	/// Layout tunables.
	pub simulation: SimulationConfig,
	/// Zoom limits and factors.
	pub zoom: ZoomConfig,
	/// Node and edge sizes.
	pub scale: ScaleConfig,
}

impl GraphConfig {
	/// Parse a (possibly partial) JSON object.
	pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(json)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_object_yields_defaults() {
		let config = GraphConfig::from_json("{}").unwrap();
		assert_eq!(config, GraphConfig::default());
		assert_eq!(config.simulation.margin, 30.0);
		assert_eq!(config.simulation.restitution, 0.8);
		assert_eq!(config.simulation.damping, 0.99);
		assert_eq!((config.zoom.min, config.zoom.max), (0.5, 3.0));
	}

	#[test]
	fn nested_overrides_apply() {
		let config = GraphConfig::from_json(
			r#"{ "simulation": { "damping": 0.95 }, "zoom": { "max": 5.0 } }"#,
		)
		.unwrap();
		assert_eq!(config.simulation.damping, 0.95);
		assert_eq!(config.simulation.margin, 30.0);
		assert_eq!(config.zoom.max, 5.0);
		assert_eq!(config.zoom.min, 0.5);
	}

	#[test]
	fn malformed_json_is_an_error() {
		assert!(GraphConfig::from_json(r#"{ "zoom": 3 "#).is_err());
	}
}
