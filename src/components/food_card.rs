//! Food Card Component
//!
//! One menu entry: image, name, description, price, plus the edit, delete,
//! and availability-toggle controls wired back to the dashboard. Delete goes
//! straight through; the backend is the source of truth and a reload brings
//! the record back if the call failed.

use leptos::prelude::*;

use crate::models::Food;

#[component]
pub fn FoodCard(
    food: Food,
    #[prop(into)] on_edit: Callback<Food>,
    #[prop(into)] on_delete: Callback<u64>,
    #[prop(into)] on_toggle: Callback<Food>,
) -> impl IntoView {
    let id = food.id;
    let edit_food = food.clone();
    let toggle_food = food.clone();

    let card_class = if food.available {
        "food-card"
    } else {
        "food-card unavailable"
    };
    let toggle_label = if food.available {
        "Available"
    } else {
        "Unavailable"
    };

    view! {
        <article class=card_class>
            <img class="food-image" src=food.image.clone() alt=food.name.clone() />
            <div class="food-info">
                <h3 class="food-name">{food.name.clone()}</h3>
                <p class="food-description">{food.description.clone()}</p>
                <span class="food-price">{format!("$ {:.2}", food.price)}</span>
            </div>
            <div class="food-actions">
                <button class="edit-btn" on:click=move |_| on_edit.run(edit_food.clone())>
                    "✎"
                </button>
                <button class="remove-btn" on:click=move |_| on_delete.run(id)>
                    "🗑"
                </button>
                <button
                    class="availability-btn"
                    on:click=move |_| on_toggle.run(toggle_food.clone())
                >
                    {toggle_label}
                </button>
            </div>
        </article>
    }
}
