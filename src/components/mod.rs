//! UI components.

pub mod detail_panel;
pub mod force_graph;
