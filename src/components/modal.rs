//! Generic modal dialog shell shared by the entry forms.

use leptos::prelude::*;

/// Centered dialog with a title, arbitrary body content, and a
/// cancel/confirm button row. Purely presentational; visibility and both
/// button actions belong to the caller.
#[component]
pub fn Modal(
	/// Whether the dialog is shown.
	#[prop(into)]
	open: Signal<bool>,
	/// Heading text.
	#[prop(into)]
	title: String,
	/// Confirm button label; reactive so callers can swap in a busy label.
	#[prop(into)]
	confirm_text: Signal<String>,
	/// Invoked when the confirm button is pressed.
	on_confirm: Callback<()>,
	/// Invoked when the cancel button is pressed.
	on_close: Callback<()>,
	children: ChildrenFn,
) -> impl IntoView {
	view! {
		<Show when=move || open.get()>
			<div class="modal-backdrop">
				<div class="modal">
					<h2 class="modal-title">{title.clone()}</h2>
					<div class="modal-body">{children()}</div>
					<div class="modal-actions">
						<button class="modal-cancel" on:click=move |_| on_close.run(())>
							"Cancel"
						</button>
						<button class="modal-confirm" on:click=move |_| on_confirm.run(())>
							{move || confirm_text.get()}
						</button>
					</div>
				</div>
			</div>
		</Show>
	}
}
