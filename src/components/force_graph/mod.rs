//! Force-directed graph layout and rendering.
//!
//! Maps the store's node/relationship snapshot into a live 2-D
//! arrangement on an HTML canvas:
//! - physics-based positioning (link springs, charge repulsion,
//!   centering) with a cooling alpha
//! - node dragging with pinned positions, plus pan and zoom
//! - per-frame redraw of circles, edge lines, and both label kinds
//!
//! # Example
//!
//! ```ignore
//! use knowledge_graph::components::force_graph::{GraphCanvas, LayoutInput};
//!
//! let data = Signal::derive(move || LayoutInput {
//!     nodes: store.nodes.get(),
//!     relationships: store.relationships.get(),
//! });
//!
//! view! { <GraphCanvas data=data /> }
//! ```

mod component;
mod render;
mod simulation;
mod state;
pub mod theme;
mod types;

pub use component::GraphCanvas;
pub use theme::Theme;
pub use types::{LayoutInput, Link};
