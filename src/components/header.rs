//! Dashboard Header Component
//!
//! Brand strip with the "new dish" trigger for the add dialog.

use leptos::prelude::*;

#[component]
pub fn Header(#[prop(into)] on_open_add: Callback<()>) -> impl IntoView {
    view! {
        <header class="dashboard-header">
            <span class="brand">"Dishboard"</span>
            <button class="new-dish-btn" on:click=move |_| on_open_add.run(())>
                <span class="text">"New Dish"</span>
                <span class="icon">"＋"</span>
            </button>
        </header>
    }
}
