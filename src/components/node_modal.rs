//! Add-Node entry form.

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::info;

use super::modal::Modal;
use super::validate_required;
use crate::api;
use crate::store::use_graph_store;
use crate::types::Node;

/// Modal form collecting a node name and type tag.
///
/// Submission posts a node with a provisional timestamp id; the store
/// receives the backend's response node, whose id wins. Validation
/// failures never reach the network.
#[component]
pub fn NodeModal(
	/// Visibility signal owned by the page; the form closes itself on
	/// success or cancel by clearing it.
	#[prop(into)]
	open: RwSignal<bool>,
) -> impl IntoView {
	let store = use_graph_store();

	let name = RwSignal::new(String::new());
	let node_type = RwSignal::new(String::new());
	let name_error = RwSignal::new(String::new());
	let type_error = RwSignal::new(String::new());
	let loading = RwSignal::new(false);

	let clear_inputs = move || {
		name.set(String::new());
		node_type.set(String::new());
		name_error.set(String::new());
		type_error.set(String::new());
	};

	let on_close = Callback::new(move |_: ()| {
		open.set(false);
	});

	let on_confirm = Callback::new(move |_: ()| {
		let name_ok = match validate_required(&name.get_untracked(), "Node Name") {
			Ok(()) => {
				name_error.set(String::new());
				true
			}
			Err(message) => {
				name_error.set(message);
				false
			}
		};
		let type_ok = match validate_required(&node_type.get_untracked(), "Node Type") {
			Ok(()) => {
				type_error.set(String::new());
				true
			}
			Err(message) => {
				type_error.set(message);
				false
			}
		};
		if !name_ok || !type_ok {
			return;
		}

		let new_node = Node {
			// Provisional id; the backend's id replaces it on success.
			id: js_sys::Date::now() as i64,
			name: name.get_untracked().trim().to_string(),
			node_type: node_type.get_untracked(),
		};

		loading.set(true);
		spawn_local(async move {
			match api::create_node(&new_node).await {
				Ok(created) => {
					info!("node \"{}\" created as id {}", created.name, created.id);
					store.add_node(created);
					clear_inputs();
					open.set(false);
				}
				Err(err) => {
					name_error.set(err.to_string());
				}
			}
			// Cleared exactly once, whichever way the call went.
			loading.set(false);
		});
	});

	let confirm_text = Signal::derive(move || {
		if loading.get() {
			"Adding...".to_string()
		} else {
			"Add Node".to_string()
		}
	});

	view! {
		<Modal
			open=open
			title="Add New Node"
			confirm_text=confirm_text
			on_confirm=on_confirm
			on_close=on_close
		>
			<div class="field">
				<label>"Node Name"</label>
				<input
					id="node-name"
					type="text"
					placeholder="Enter Node Name"
					prop:value=move || name.get()
					on:input=move |ev| name.set(event_target_value(&ev))
				/>
				<Show when=move || !name_error.get().is_empty()>
					<p class="field-error">{move || name_error.get()}</p>
				</Show>
			</div>

			<div class="field">
				<label>"Node Type"</label>
				<select
					id="node-type"
					prop:value=move || node_type.get()
					on:change=move |ev| node_type.set(event_target_value(&ev))
				>
					<option value="">"Select Node Type"</option>
					<option value="company">"Company"</option>
					<option value="person">"Person"</option>
					<option value="ngo">"NGO"</option>
				</select>
				<Show when=move || !type_error.get().is_empty()>
					<p class="field-error">{move || type_error.get()}</p>
				</Show>
			</div>
		</Modal>
	}
}
