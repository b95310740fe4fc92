//! Item Details Component
//!
//! Fetches one item record, renders it, and wires the order action into
//! the cart reconciler.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::cart::{reconcile, use_cart, Reconciliation};
use crate::loader::ItemSlot;
use crate::models::ImageSource;
use crate::toast::use_toasts;

/// Item-detail view: images and text on the left/right, order button below
#[component]
pub fn ItemDetails(
    /// Item id from the navigation context
    #[prop(into)] item_id: Signal<Option<String>>,
) -> impl IntoView {
    let cart = use_cart();
    let toasts = use_toasts();

    let (slot, set_slot) = signal(ItemSlot::new());
    // Fixed at 1 in this view; a change re-runs the fetch like an id change
    let (quantity, _set_quantity) = signal(1u32);

    // Fetch whenever the id or quantity hint changes. The slot ticket makes
    // sure a superseded response never lands.
    Effect::new(move |_| {
        let id = item_id.get();
        let hint = quantity.get();
        let ticket = set_slot.try_update(|slot| slot.begin()).unwrap_or_default();
        let Some(id) = id else { return };

        spawn_local(async move {
            match api::get_item(&id).await {
                Ok(mut record) => {
                    record.quantity = hint;
                    set_slot.try_update(|slot| slot.resolve(ticket, record));
                }
                Err(err) => {
                    // Diagnostic channel only; the view stays on "Loading..."
                    web_sys::console::error_1(
                        &format!("[ITEM] fetch failed for {}: {}", id, err).into(),
                    );
                }
            }
        });
    });

    on_cleanup(move || {
        let _ = set_slot.try_update(|slot| slot.retire());
    });

    let order = move |_| {
        // No-op until the record has loaded
        let Some(item) = slot.with(|slot| slot.record().cloned()) else {
            return;
        };
        match reconcile(&item, &cart.lines()) {
            Reconciliation::Added(line) => {
                cart.push(line);
                toasts.success("Item successfully added to cart");
            }
            Reconciliation::Duplicate => {
                toasts.error("This item is already in your cart.");
            }
        }
    };

    view! {
        <div class="item-details">
            {move || match slot.with(|slot| slot.record().cloned()) {
                None => view! { <div class="loading">"Loading..."</div> }.into_any(),
                Some(item) => {
                    let main = ImageSource::classify(&item.main_image);
                    let secondary = ImageSource::classify(&item.secondary_image);
                    let tertiary = ImageSource::classify(&item.tertiary_image);
                    view! {
                        <div class="item-layout">
                            <div class="item-images">
                                <img class="main-image" src=main.src() alt="Main"/>
                                <div class="side-images">
                                    <img src=secondary.src() alt="Secondary"/>
                                    <img src=tertiary.src() alt="Tertiary"/>
                                </div>
                            </div>
                            <div class="item-content">
                                <h3>"Name of the Dish:"</h3>
                                <p>{item.name.clone()}</p>
                                <h3>"Ingredients of the Dish:"</h3>
                                <p>{item.ingredients.clone()}</p>
                                <h3>"Price of the Dish:"</h3>
                                <p>{format!("From ${}", item.price)}</p>
                                <h3>"Description of the Dish:"</h3>
                                <p>{item.descriptions.clone()}</p>
                                <button class="order-btn" on:click=order>"Order Now"</button>
                            </div>
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
