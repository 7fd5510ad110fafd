//! Visual theming for the force graph.
//!
//! Provides the node type palette and the stroke/label colors.

use super::types::NodeType;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Opacity in `0.0..=1.0`.
	pub a: f64,
}

impl Color {
	/// Opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Color with explicit alpha.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Same channels, different alpha.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// `#rrggbb` when opaque, otherwise `rgba(...)`.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// One fill color per node type, plus a fallback for [`NodeType::Other`].
#[derive(Clone, Debug)]
pub struct TypePalette {
	/// Fill for [`NodeType::Project`].
	pub project: Color,
	/// Fill for [`NodeType::Technology`].
	pub technology: Color,
	/// Fill for [`NodeType::Skill`].
	pub skill: Color,
	/// Fill for [`NodeType::Experience`].
	pub experience: Color,
	/// Fill for [`NodeType::Topic`].
	pub topic: Color,
	/// Fill for unknown types.
	pub fallback: Color,
}

impl TypePalette {
	/// Fill color for `kind`.
	pub fn color_for(&self, kind: NodeType) -> Color {
		match kind {
			NodeType::Project => self.project,
			NodeType::Technology => self.technology,
			NodeType::Skill => self.skill,
			NodeType::Experience => self.experience,
			NodeType::Topic => self.topic,
			NodeType::Other => self.fallback,
		}
	}
}

impl Default for TypePalette {
	fn default() -> Self {
		Self {
			project: Color::rgb(16, 185, 129),    // Green
			technology: Color::rgb(139, 92, 246), // Purple
			skill: Color::rgb(245, 158, 11),      // Amber
			experience: Color::rgb(239, 68, 68),  // Red
			topic: Color::rgb(6, 182, 212),       // Cyan
			fallback: Color::rgb(59, 130, 246),   // Blue
		}
	}
}

/// Node visual style.
#[derive(Clone, Debug)]
pub struct NodeStyle {
	/// Fill alpha of nodes that are not selected.
	pub idle_alpha: f64,
	/// Alpha at the centre of the selection glow; fades to transparent at the rim.
	pub glow_alpha: f64,
	/// Node name color.
	pub label_color: Color,
}

/// Edge visual style.
#[derive(Clone, Debug)]
pub struct EdgeStyle {
	/// Edge stroke.
	pub color: Color,
	/// Relationship label color.
	pub label_color: Color,
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	/// Theme identifier.
	pub name: &'static str,
	/// Per-type node fills.
	pub palette: TypePalette,
	/// Node styling.
	pub node: NodeStyle,
	/// Edge styling.
	pub edge: EdgeStyle,
}

impl Theme {
	/// Light strokes on a transparent canvas; the page supplies the background.
	pub fn default_theme() -> Self {
		Self {
			name: "default",
			palette: TypePalette::default(),
			node: NodeStyle {
				idle_alpha: 0.8,
				glow_alpha: 0.5,
				label_color: Color::rgb(255, 255, 255),
			},
			edge: EdgeStyle {
				color: Color::rgba(200, 200, 200, 0.4),
				label_color: Color::rgba(220, 220, 220, 0.9),
			},
		}
	}

	/// Base fill for a node of type `kind`.
	pub fn node_color(&self, kind: NodeType) -> Color {
		self.palette.color_for(kind)
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::default_theme()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn opaque_colors_format_as_hex() {
		assert_eq!(Color::rgb(16, 185, 129).to_css(), "#10b981");
	}

	#[test]
	fn translucent_colors_format_as_rgba() {
		assert_eq!(
			Color::rgb(16, 185, 129).with_alpha(0.8).to_css(),
			"rgba(16, 185, 129, 0.8)"
		);
	}

	#[test]
	fn every_type_has_its_own_color() {
		let theme = Theme::default();
		let mut seen: Vec<String> = NodeType::ALL
			.iter()
			.map(|&kind| theme.node_color(kind).to_css())
			.collect();
		seen.push(theme.node_color(NodeType::Other).to_css());
		assert_eq!(seen[0], "#10b981");
		assert_eq!(seen[5], "#3b82f6");
		seen.sort();
		seen.dedup();
		assert_eq!(seen.len(), 6);
	}
}
