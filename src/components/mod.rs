//! UI Components
//!
//! Leptos components for the item-detail storefront view.

mod item_details;
mod toast_host;

pub use item_details::ItemDetails;
pub use toast_host::ToastHost;
