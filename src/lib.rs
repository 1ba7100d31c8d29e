//! knowledge-graph: browser-based viewer and editor for a small
//! node/relationship graph.
//!
//! Fetches the graph from the backend, renders it as an interactive
//! force-directed diagram on a canvas, and appends nodes and relationships
//! through modal forms that POST to the same backend.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::*;
use log::{Level, error, info};

pub mod api;
pub mod components;
pub mod store;
pub mod types;

pub use components::force_graph::{GraphCanvas, LayoutInput};
use components::node_modal::NodeModal;
use components::relationship_modal::RelationshipModal;
use store::provide_graph_store;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("knowledge-graph: logging initialized");
}

/// Main application component.
///
/// Owns the graph store, loads the initial snapshot, and renders the
/// diagram plus the two entry forms. A failed initial fetch leaves an
/// empty but fully usable page.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();
	let store = provide_graph_store();

	spawn_local(async move {
		match api::fetch_graph().await {
			Ok(graph) => {
				info!(
					"loaded {} nodes, {} relationships",
					graph.nodes.len(),
					graph.relationships.len()
				);
				store.set_graph_data(graph.nodes, graph.relationships);
			}
			Err(err) => error!("failed to fetch graph: {err}"),
		}
	});

	let node_modal_open = RwSignal::new(false);
	let relationship_modal_open = RwSignal::new(false);

	let data = Signal::derive(move || LayoutInput {
		nodes: store.nodes.get(),
		relationships: store.relationships.get(),
	});

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="Knowledge Graph" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<main class="graph-page">
			<h1>"Knowledge Graph"</h1>
			<div class="graph-toolbar">
				<button class="toolbar-add-node" on:click=move |_| node_modal_open.set(true)>
					"Add Node"
				</button>
				<button
					class="toolbar-add-relationship"
					on:click=move |_| relationship_modal_open.set(true)
				>
					"Add Relationship"
				</button>
			</div>
			<div class="graph-container">
				<GraphCanvas data=data />
			</div>
			<NodeModal open=node_modal_open />
			<RelationshipModal open=relationship_modal_open />
		</main>
	}
}
