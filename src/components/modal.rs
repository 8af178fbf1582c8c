//! Modal Chrome
//!
//! Overlay + body wrapper for the dialogs. Visibility is externally
//! controlled; clicking the overlay closes, clicking the body does not.

use leptos::children::ChildrenFn;
use leptos::prelude::*;

#[component]
pub fn Modal(
    is_open: ReadSignal<bool>,
    #[prop(into)] on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || is_open.get()>
            <div class="modal-overlay" on:click=move |_| on_close.run(())>
                <div
                    class="modal-body"
                    on:click=move |ev: web_sys::MouseEvent| ev.stop_propagation()
                >
                    {children()}
                </div>
            </div>
        </Show>
    }
}
