//! Graph data structures for input to the force graph component.

use serde::Deserialize;

/// Category of a node. Drives the node's fill color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
pub enum NodeType {
	/// A piece of delivered work.
	Project,
	/// A language, framework or tool.
	Technology,
	/// A capability.
	Skill,
	/// A role or position.
	Experience,
	/// A subject area.
	Topic,
	/// Any type name outside the known set. Rendered with the fallback color.
	#[default]
	#[serde(other)]
	Other,
}

impl NodeType {
	/// The known categories, in legend order.
	pub const ALL: [NodeType; 5] = [
		NodeType::Project,
		NodeType::Technology,
		NodeType::Skill,
		NodeType::Experience,
		NodeType::Topic,
	];

	/// Display name, as it appears in JSON.
	pub fn as_str(self) -> &'static str {
		match self {
			NodeType::Project => "Project",
			NodeType::Technology => "Technology",
			NodeType::Skill => "Skill",
			NodeType::Experience => "Experience",
			NodeType::Topic => "Topic",
			NodeType::Other => "Other",
		}
	}
}

/// An image attached to a node, shown in the detail panel.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct NodeImage {
	/// Image source.
	pub url: String,
	/// Caption and alt text.
	pub caption: String,
}

/// An outbound link attached to a node.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct NodeLink {
	/// Link target.
	pub url: String,
	/// Link text.
	pub label: String,
}

/// A node in the graph.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct GraphNode {
	/// Unique identifier for this node. Used to reference nodes in edges.
	pub id: String,
	/// Display name, drawn inside the node circle.
	pub name: String,
	/// Category, read from the JSON `type` field.
	#[serde(rename = "type", default)]
	pub kind: NodeType,
	/// Free-text description shown when the node is selected.
	#[serde(default)]
	pub content: String,
	/// Images for the detail panel; only the first is shown.
	#[serde(default)]
	pub images: Vec<NodeImage>,
	/// Outbound links for the detail panel.
	#[serde(default)]
	pub links: Vec<NodeLink>,
}

/// A labeled, directed relationship between two node ids.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct GraphEdge {
	/// Source node ID.
	pub source: String,
	/// Target node ID.
	pub target: String,
	/// Relationship label drawn at the edge midpoint.
	#[serde(default)]
	pub relationship: String,
}

/// Complete graph data: nodes and edges.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct GraphData {
	/// Nodes in draw order.
	#[serde(default)]
	pub nodes: Vec<GraphNode>,
	/// Edges; `links` is accepted as an alias.
	#[serde(default, alias = "links")]
	pub edges: Vec<GraphEdge>,
}

impl GraphData {
	/// Look up a node by id.
	pub fn node(&self, id: &str) -> Option<&GraphNode> {
		self.nodes.iter().find(|n| n.id == id)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn decodes_nodes_and_edges() {
		let json = r#"{
			"nodes": [
				{ "id": "a", "name": "Alpha", "type": "Project", "content": "first",
				  "images": [{ "url": "/a.svg", "caption": "diagram" }],
				  "links": [{ "url": "https://example.com", "label": "Repo" }] },
				{ "id": "b", "name": "Beta", "type": "Technology", "content": "second" }
			],
			"edges": [{ "source": "a", "target": "b", "relationship": "uses" }]
		}"#;
		let data: GraphData = serde_json::from_str(json).unwrap();

		assert_eq!(data.nodes.len(), 2);
		assert_eq!(data.nodes[0].kind, NodeType::Project);
		assert_eq!(data.nodes[0].images[0].caption, "diagram");
		assert_eq!(data.nodes[0].links[0].label, "Repo");
		assert!(data.nodes[1].images.is_empty());
		assert!(data.nodes[1].links.is_empty());
		assert_eq!(data.edges[0].relationship, "uses");
	}

	#[test]
	fn unknown_type_falls_back_to_other() {
		let node: GraphNode =
			serde_json::from_str(r#"{ "id": "x", "name": "X", "type": "Hobby" }"#).unwrap();
		assert_eq!(node.kind, NodeType::Other);
	}

	#[test]
	fn links_alias_is_accepted_for_edges() {
		let data: GraphData = serde_json::from_str(
			r#"{ "nodes": [], "links": [{ "source": "a", "target": "b" }] }"#,
		)
		.unwrap();
		assert_eq!(data.edges.len(), 1);
		assert_eq!(data.edges[0].relationship, "");
	}

	#[test]
	fn node_lookup_by_id() {
		let data: GraphData = serde_json::from_str(
			r#"{ "nodes": [{ "id": "a", "name": "A", "type": "Skill" }] }"#,
		)
		.unwrap();
		assert_eq!(data.node("a").map(|n| n.name.as_str()), Some("A"));
		assert!(data.node("missing").is_none());
	}
}
