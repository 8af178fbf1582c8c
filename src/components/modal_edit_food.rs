//! Edit Food Dialog
//!
//! Modal form pre-populated from the store's `editing_food`. The dialog only
//! seeds defaults and emits the submitted draft; merging the draft over the
//! stale record is the dashboard's job.

use leptos::prelude::*;

use crate::components::{Input, Modal};
use crate::form::{FieldKind, FormHandle};
use crate::models::FoodDraft;
use crate::store::{use_menu_store, MenuStateStoreFields};

#[component]
pub fn ModalEditFood(
    is_open: ReadSignal<bool>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] handle_update_food: Callback<FoodDraft>,
) -> impl IntoView {
    let store = use_menu_store();
    let form = StoredValue::new_local(FormHandle::new());
    let (form_error, set_form_error) = signal(None::<String>);

    // Seed every field from the record under edit whenever the dialog opens.
    Effect::new(move |_| {
        if !is_open.get() {
            return;
        }
        if let Some(food) = store.editing_food().get() {
            form.get_value().seed(&[
                ("image", food.image.clone()),
                ("name", food.name.clone()),
                ("price", food.price.to_string()),
                ("description", food.description.clone()),
            ]);
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match FoodDraft::from_form(&form.get_value()) {
            Ok(draft) => {
                handle_update_food.run(draft);
                set_form_error.set(None);
                on_close.run(());
            }
            Err(err) => set_form_error.set(Some(err.to_string())),
        }
    };

    view! {
        <Modal is_open=is_open on_close=on_close>
            <form class="food-form" on:submit=on_submit>
                <h1>"Edit Dish"</h1>

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
                    <span class="text">"Save Changes"</span>
                    <span class="icon">"✓"</span>
                </button>
            </form>
        </Modal>
    }
}
