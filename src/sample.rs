//! Built-in portfolio graph, used when the host page does not embed one.

use crate::components::force_graph::{
	GraphData, GraphEdge, GraphNode, NodeImage, NodeLink, NodeType,
};

fn node(id: &str, name: &str, kind: NodeType, content: &str) -> GraphNode {
	GraphNode {
		id: id.into(),
		name: name.into(),
		kind,
		content: content.into(),
		images: Vec::new(),
		links: Vec::new(),
	}
}

fn edge(source: &str, target: &str, relationship: &str) -> GraphEdge {
	GraphEdge {
		source: source.into(),
		target: target.into(),
		relationship: relationship.into(),
	}
}

/// A small portfolio: two projects, the tools behind them, and the skills and
/// roles that connect them.
pub fn portfolio() -> GraphData {
	let mut rag = node(
		"project-rag-assistant",
		"RAG Assistant",
		NodeType::Project,
		"Conversational assistant over internal documents with retrieval, \
		 per-user memory and pluggable model providers.",
	);
	rag.images.push(NodeImage {
		url: "/placeholder.svg".into(),
		caption: "Retrieval pipeline overview".into(),
	});
	rag.links.push(NodeLink {
		url: "https://example.com/rag-assistant".into(),
		label: "Case study".into(),
	});

	let mut twins = node(
		"project-synthetic-data",
		"Synthetic Data",
		NodeType::Project,
		"Simulation-driven image dataset generation for vision models in \
		 data-scarce plant environments.",
	);
	twins.images.push(NodeImage {
		url: "/placeholder.svg".into(),
		caption: "Scenario randomisation".into(),
	});

	GraphData {
		nodes: vec![
			rag,
			twins,
			node(
				"tech-python",
				"Python",
				NodeType::Technology,
				"Main language for data processing, ML and backend services.",
			),
			node(
				"tech-docker",
				"Docker",
				NodeType::Technology,
				"Container packaging for services and model deployments.",
			),
			node(
				"tech-mqtt",
				"MQTT",
				NodeType::Technology,
				"Lightweight pub/sub transport for streaming inference results.",
			),
			node(
				"skill-pipelines",
				"Data Pipelines",
				NodeType::Skill,
				"Ingestion, transformation and orchestration for analytics and ML.",
			),
			node(
				"skill-vision",
				"Computer Vision",
				NodeType::Skill,
				"Visual inspection, augmentation strategies and flow analysis.",
			),
			node(
				"exp-consulting",
				"Data Science Specialist",
				NodeType::Experience,
				"Led AI initiatives bridging IT and OT in manufacturing.",
			),
			node(
				"topic-digital-twins",
				"Digital Twins",
				NodeType::Topic,
				"Simulated replicas of physical systems kept in sync with live data.",
			),
		],
		edges: vec![
			edge("project-rag-assistant", "tech-python", "uses"),
			edge("project-rag-assistant", "tech-docker", "deployed with"),
			edge("project-synthetic-data", "skill-vision", "applies"),
			edge("project-synthetic-data", "tech-mqtt", "streams via"),
			edge("project-synthetic-data", "topic-digital-twins", "explores"),
			edge("exp-consulting", "project-rag-assistant", "delivered"),
			edge("exp-consulting", "project-synthetic-data", "delivered"),
			edge("skill-pipelines", "tech-python", "built in"),
		],
	}
}
