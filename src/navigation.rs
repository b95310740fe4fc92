//! Navigation Context
//!
//! Hash-route parsing for the item-detail view (`#/item/{id}`).

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Extract the item id from an `#/item/{id}` hash route
pub fn parse_item_route(hash: &str) -> Option<String> {
    let route = hash.strip_prefix('#').unwrap_or(hash);
    let id = route.strip_prefix("/item/")?;
    if id.is_empty() || id.contains('/') {
        return None;
    }
    Some(id.to_string())
}

/// Current item id from the window location, if any
pub fn item_id_from_location() -> Option<String> {
    let hash = web_sys::window()?.location().hash().ok()?;
    parse_item_route(&hash)
}

/// Signal tracking the item id across `hashchange` events
pub fn use_item_id() -> ReadSignal<Option<String>> {
    let (id, set_id) = signal(item_id_from_location());

    if let Some(window) = web_sys::window() {
        let listener = Closure::<dyn FnMut(web_sys::Event)>::new(move |_| {
            set_id.set(item_id_from_location());
        });
        if window
            .add_event_listener_with_callback("hashchange", listener.as_ref().unchecked_ref())
            .is_ok()
        {
            // Listener lives for the app lifetime
            listener.forget();
        }
    }

    id
}
