//! Interactive knowledge graph visualization component.
//!
//! Renders a small labeled graph on an HTML canvas with:
//! - A perpetual drift layout: nodes move by their velocity, bounce off a
//!   margin inside the canvas and slowly lose speed
//! - Node selection, dragging and wheel zoom
//! - Per-type node colors and a glow around the selected node
//!
//! The layout, renderer and interaction controller do not touch the DOM, so
//! they run (and are tested) natively; only [`ForceGraphCanvas`] and the frame
//! loop talk to the browser.
//!
//! # Example
//!
//! ```ignore
//! use knowledge_graph::{ForceGraphCanvas, GraphData, GraphEdge, GraphNode, NodeType};
//!
//! let data = GraphData {
//!     nodes: vec![
//!         GraphNode { id: "a".into(), name: "Rust".into(), kind: NodeType::Technology, .. },
//!         GraphNode { id: "b".into(), name: "Parser".into(), kind: NodeType::Project, .. },
//!     ],
//!     edges: vec![
//!         GraphEdge { source: "b".into(), target: "a".into(), relationship: "uses".into() },
//!     ],
//! };
//!
//! view! { <ForceGraphCanvas data=data.into() /> }
//! ```

mod component;
pub mod config;
pub mod driver;
pub mod error;
pub mod interaction;
pub mod layout;
pub mod render;
pub mod scale;
pub mod state;
pub mod surface;
pub mod theme;
mod types;

pub use component::ForceGraphCanvas;
pub use config::GraphConfig;
pub use theme::Theme;
pub use types::{GraphData, GraphEdge, GraphNode, NodeImage, NodeLink, NodeType};
