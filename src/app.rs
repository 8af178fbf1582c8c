//! Dishboard Dashboard
//!
//! Sole owner of the canonical food collection. Every mutation goes through
//! the backend first; local state is only reconciled from the server's
//! response, never optimistically.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::FoodsApi;
use crate::components::{FoodCard, Header, ModalAddFood, ModalEditFood};
use crate::context::DashboardContext;
use crate::error::ApiError;
use crate::models::{Food, FoodDraft};
use crate::store::{
    store_append_food, store_remove_food, store_replace_food, store_set_editing, store_set_foods,
    LoadPhase, MenuState, MenuStateStoreFields, MenuStore, MutationPhase,
};

fn fail_mutation(store: MenuStore, err: &ApiError) {
    web_sys::console::error_1(&format!("[DASHBOARD] mutation failed: {err}").into());
    store.mutation().set(MutationPhase::Failed(err.to_string()));
}

#[component]
pub fn App() -> impl IntoView {
    let store: MenuStore = Store::new(MenuState::default());
    provide_context(store);

    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (add_modal_open, set_add_modal_open) = signal(false);
    let (edit_modal_open, set_edit_modal_open) = signal(false);

    let ctx = DashboardContext::new(
        (reload_trigger, set_reload_trigger),
        (add_modal_open, set_add_modal_open),
        (edit_modal_open, set_edit_modal_open),
    );
    provide_context(ctx);

    let api = FoodsApi::default();

    // Initial load; re-runs whenever the retry affordance bumps the trigger.
    let load_api = api.clone();
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        store.load().set(LoadPhase::Loading);
        let api = load_api.clone();
        spawn_local(async move {
            match api.list().await {
                Ok(foods) => store_set_foods(&store, foods),
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("[DASHBOARD] initial load failed: {err}").into(),
                    );
                    store.load().set(LoadPhase::Failed(err.to_string()));
                }
            }
        });
    });

    let add_api = api.clone();
    let handle_add_food = Callback::new(move |draft: FoodDraft| {
        let api = add_api.clone();
        store.mutation().set(MutationPhase::InFlight);
        spawn_local(async move {
            match api.create(&draft).await {
                Ok(created) => {
                    store_append_food(&store, created);
                    store.mutation().set(MutationPhase::Applied);
                }
                Err(err) => fail_mutation(store, &err),
            }
        });
    });

    let update_api = api.clone();
    let handle_update_food = Callback::new(move |draft: FoodDraft| {
        let Some(editing) = store.editing_food().get_untracked() else {
            return;
        };
        let api = update_api.clone();
        store.mutation().set(MutationPhase::InFlight);
        spawn_local(async move {
            match api.update(&editing.apply_draft(&draft)).await {
                Ok(updated) => {
                    store_replace_food(&store, updated);
                    store.mutation().set(MutationPhase::Applied);
                }
                Err(err) => fail_mutation(store, &err),
            }
        });
    });

    let delete_api = api.clone();
    let handle_delete_food = Callback::new(move |id: u64| {
        let api = delete_api.clone();
        store.mutation().set(MutationPhase::InFlight);
        spawn_local(async move {
            // Local removal only after the backend confirmed the delete.
            match api.delete(id).await {
                Ok(()) => {
                    store_remove_food(&store, id);
                    store.mutation().set(MutationPhase::Applied);
                }
                Err(err) => fail_mutation(store, &err),
            }
        });
    });

    let toggle_api = api;
    let handle_toggle_available = Callback::new(move |food: Food| {
        let api = toggle_api.clone();
        store.mutation().set(MutationPhase::InFlight);
        spawn_local(async move {
            match api.update(&food.toggled()).await {
                Ok(updated) => {
                    store_replace_food(&store, updated);
                    store.mutation().set(MutationPhase::Applied);
                }
                Err(err) => fail_mutation(store, &err),
            }
        });
    });

    let handle_edit_food = Callback::new(move |food: Food| {
        store_set_editing(&store, Some(food));
        ctx.open_edit_modal();
    });

    view! {
        <Header on_open_add=move |()| ctx.toggle_add_modal() />

        <ModalAddFood
            is_open=ctx.add_modal_open
            on_close=move |()| ctx.toggle_add_modal()
            handle_add_food=handle_add_food
        />
        <ModalEditFood
            is_open=ctx.edit_modal_open
            on_close=move |()| ctx.toggle_edit_modal()
            handle_update_food=handle_update_food
        />

        {move || match store.mutation().get() {
            MutationPhase::Failed(msg) => Some(view! {
                <div class="error-banner">
                    <span>{msg}</span>
                    <button
                        class="dismiss-btn"
                        on:click=move |_| store.mutation().set(MutationPhase::Idle)
                    >
                        "Dismiss"
                    </button>
                </div>
            }),
            _ => None,
        }}

        <main class="foods-container">
            {move || match store.load().get() {
                LoadPhase::Loading => view! { <p class="loading">"Loading menu..."</p> }.into_any(),
                LoadPhase::Failed(msg) => view! {
                    <div class="load-error">
                        <p>{msg}</p>
                        <button class="retry-btn" on:click=move |_| ctx.reload()>"Retry"</button>
                    </div>
                }.into_any(),
                LoadPhase::Loaded => view! {
                    <div class="food-list">
                        <For
                            each=move || store.foods().get()
                            key=|food| food.list_key()
                            children=move |food| view! {
                                <FoodCard
                                    food=food
                                    on_edit=handle_edit_food
                                    on_delete=handle_delete_food
                                    on_toggle=handle_toggle_available
                                />
                            }
                        />
                    </div>
                }.into_any(),
            }}
        </main>
    }
}
