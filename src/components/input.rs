//! Text Input Component
//!
//! Uncontrolled input registered with the enclosing dialog's [`FormHandle`].
//! The element keeps the authoritative value, so typing never re-renders
//! anything; the handle reads it back at submit time.

use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::form::{ElementAccessor, FieldKind, FormHandle};

/// Labeled/iconed text input bound to a form handle
///
/// `is_focused` tracks focus/blur; `is_filled` is recomputed only on blur.
#[component]
pub fn Input(
    #[prop(into)] name: String,
    form: FormHandle,
    #[prop(optional)] kind: FieldKind,
    #[prop(into, optional)] placeholder: String,
    #[prop(into, optional)] icon: Option<&'static str>,
) -> impl IntoView {
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let (is_focused, set_is_focused) = signal(false);
    let (is_filled, set_is_filled) = signal(false);

    // Register once the element exists; re-runs if the node is replaced.
    let register_form = form.clone();
    let register_name = name.clone();
    Effect::new(move |_| {
        if let Some(element) = input_ref.get() {
            register_form.register(&register_name, kind, Rc::new(ElementAccessor::new(element)));
        }
    });

    let container_class = move || match (is_focused.get(), is_filled.get()) {
        (true, _) => "input-field focused",
        (false, true) => "input-field filled",
        (false, false) => "input-field",
    };

    view! {
        <div class=container_class>
            {icon.map(|icon| view! { <span class="input-icon">{icon}</span> })}
            <input
                type="text"
                name=name
                placeholder=placeholder
                node_ref=input_ref
                on:focus=move |_| set_is_focused.set(true)
                on:blur=move |ev: web_sys::FocusEvent| {
                    set_is_focused.set(false);
                    if let Some(input) = ev
                        .target()
                        .and_then(|target| target.dyn_ref::<web_sys::HtmlInputElement>().cloned())
                    {
                        set_is_filled.set(!input.value().is_empty());
                    }
                }
            />
        </div>
    }
}
