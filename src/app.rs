//! Storefront App
//!
//! Provides the cart and toast contexts and mounts the item-detail view.

use leptos::prelude::*;

use crate::cart::CartContext;
use crate::components::{ItemDetails, ToastHost};
use crate::navigation;
use crate::toast::ToastContext;

#[component]
pub fn App() -> impl IntoView {
    provide_context(CartContext::new());
    provide_context(ToastContext::new());

    let item_id = navigation::use_item_id();

    view! {
        <ToastHost/>
        <main class="storefront">
            <ItemDetails item_id=item_id/>
        </main>
    }
}
