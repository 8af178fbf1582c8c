//! Add Food Dialog
//!
//! Modal form for creating a new dish. Owns its [`FormHandle`]; on submit it
//! validates, hands the assembled draft to the dashboard, and closes. On
//! validation failure the dialog stays open and shows the message.

use leptos::prelude::*;

use crate::components::{Input, Modal};
use crate::form::{FieldKind, FormHandle};
use crate::models::FoodDraft;

#[component]
pub fn ModalAddFood(
    is_open: ReadSignal<bool>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] handle_add_food: Callback<FoodDraft>,
) -> impl IntoView {
    // FormHandle is Rc-backed, so it lives in thread-local arena storage.
    let form = StoredValue::new_local(FormHandle::new());
    let (form_error, set_form_error) = signal(None::<String>);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let handle = form.get_value();
        match FoodDraft::from_form(&handle) {
            Ok(draft) => {
                handle_add_food.run(draft);
                handle.reset();
                set_form_error.set(None);
                on_close.run(());
            }
            Err(err) => set_form_error.set(Some(err.to_string())),
        }
    };

    view! {
        <Modal is_open=is_open on_close=on_close>
            <form class="food-form" on:submit=on_submit>
                <h1>"New Dish"</h1>

                <Input
                    name="image"
                    kind=FieldKind::Url
                    form=form.get_value()
                    placeholder="Paste the image link here"
                    icon="🖼"
                />
                <Input name="name" form=form.get_value() placeholder="Ex: Veggie Lasagna" />
                <Input
                    name="price"
                    kind=FieldKind::Numeric
                    form=form.get_value()
                    placeholder="Ex: 19.90"
                />
                <Input name="description" form=form.get_value() placeholder="Description" />

                {move || {
                    form_error.get().map(|msg| view! { <p class="form-error">{msg}</p> })
                }}

                <button type="submit" class="submit-btn">
                    <span class="text">"Add Dish"</span>
                    <span class="icon">"✓"</span>
                </button>
            </form>
        </Modal>
    }
}
