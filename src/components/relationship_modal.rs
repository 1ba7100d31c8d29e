//! Add-Relationship entry form.

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::info;

use super::modal::Modal;
use super::validate_required;
use crate::api;
use crate::store::use_graph_store;
use crate::types::{NewRelationship, Node};

/// Modal form connecting two existing nodes with a labeled relationship.
///
/// The endpoint picklists are populated by a fresh graph fetch every time
/// the dialog opens, so they reflect the latest backend state rather than
/// whatever the store currently holds.
#[component]
pub fn RelationshipModal(
	/// Visibility signal owned by the page.
	#[prop(into)]
	open: RwSignal<bool>,
) -> impl IntoView {
	let store = use_graph_store();

	let nodes = RwSignal::new(Vec::<Node>::new());
	let fetch_error = RwSignal::new(String::new());
	let from_node = RwSignal::new(String::new());
	let to_node = RwSignal::new(String::new());
	let label = RwSignal::new(String::new());
	let from_error = RwSignal::new(String::new());
	let to_error = RwSignal::new(String::new());
	let label_error = RwSignal::new(String::new());
	let loading = RwSignal::new(false);

	// Deliberate re-fetch on every open instead of reading the store.
	Effect::new(move |_| {
		if open.get() {
			spawn_local(async move {
				fetch_error.set(String::new());
				match api::fetch_graph().await {
					Ok(graph) => nodes.set(graph.nodes),
					Err(err) => fetch_error.set(err.to_string()),
				}
			});
		}
	});

	let clear_inputs = move || {
		from_node.set(String::new());
		to_node.set(String::new());
		label.set(String::new());
		from_error.set(String::new());
		to_error.set(String::new());
		label_error.set(String::new());
	};

	let on_close = Callback::new(move |_: ()| {
		open.set(false);
	});

	let on_confirm = Callback::new(move |_: ()| {
		from_error.set(String::new());
		to_error.set(String::new());
		label_error.set(String::new());

		let mut valid = true;
		if let Err(message) = validate_required(&from_node.get_untracked(), "From Node") {
			from_error.set(message);
			valid = false;
		}
		if let Err(message) = validate_required(&to_node.get_untracked(), "To Node") {
			to_error.set(message);
			valid = false;
		}
		if let Err(message) = validate_required(&label.get_untracked(), "Relationship") {
			label_error.set(message);
			valid = false;
		}
		if !valid {
			return;
		}

		// Select values are the node ids the picklist rendered.
		let (Ok(from), Ok(to)) = (
			from_node.get_untracked().parse::<i64>(),
			to_node.get_untracked().parse::<i64>(),
		) else {
			from_error.set("From Node is required".to_string());
			return;
		};

		let payload = NewRelationship {
			id: js_sys::Date::now() as i64,
			from_node: from,
			to_node: to,
			relationship: label.get_untracked().trim().to_string(),
		};

		loading.set(true);
		spawn_local(async move {
			match api::create_relationship(&payload).await {
				Ok(created) => {
					info!(
						"relationship \"{}\" created as id {}",
						created.relationship, created.id
					);
					store.add_relationship(created);
					clear_inputs();
					open.set(false);
				}
				Err(err) => {
					from_error.set(err.to_string());
				}
			}
			loading.set(false);
		});
	});

	let confirm_text = Signal::derive(move || {
		if loading.get() {
			"Adding...".to_string()
		} else {
			"Add Relationship".to_string()
		}
	});

	let node_options = move |selected: RwSignal<String>| {
		nodes
			.get()
			.into_iter()
			.map(|node| {
				let value = node.id.to_string();
				let is_selected = selected.get() == value;
				view! {
					<option value=value selected=is_selected>
						{format!("{} ({})", node.name, node.node_type)}
					</option>
				}
			})
			.collect_view()
	};

	view! {
		<Modal
			open=open
			title="Add New Relationship"
			confirm_text=confirm_text
			on_confirm=on_confirm
			on_close=on_close
		>
			<Show when=move || !fetch_error.get().is_empty()>
				<p class="field-error">{move || fetch_error.get()}</p>
			</Show>

			<div class="field">
				<label>"From Node"</label>
				<select
					id="from-node"
					prop:value=move || from_node.get()
					on:change=move |ev| from_node.set(event_target_value(&ev))
				>
					<option value="" disabled=true>
						"Select From Node"
					</option>
					{move || node_options(from_node)}
				</select>
				<Show when=move || !from_error.get().is_empty()>
					<p class="field-error">{move || from_error.get()}</p>
				</Show>
			</div>

			<div class="field">
				<label>"To Node"</label>
				<select
					id="to-node"
					prop:value=move || to_node.get()
					on:change=move |ev| to_node.set(event_target_value(&ev))
				>
					<option value="" disabled=true>
						"Select To Node"
					</option>
					{move || node_options(to_node)}
				</select>
				<Show when=move || !to_error.get().is_empty()>
					<p class="field-error">{move || to_error.get()}</p>
				</Show>
			</div>

			<div class="field">
				<label>"Relationship"</label>
				<input
					id="relationship"
					type="text"
					placeholder="Enter Relationship"
					prop:value=move || label.get()
					on:input=move |ev| label.set(event_target_value(&ev))
				/>
				<Show when=move || !label_error.get().is_empty()>
					<p class="field-error">{move || label_error.get()}</p>
				</Show>
			</div>
		</Modal>
	}
}
