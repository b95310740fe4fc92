//! Cart State & Reconciliation
//!
//! Client-side cart store plus the duplicate-guarding reconciler.
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{CartLine, ItemRecord};

/// Cart contents with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct CartState {
    pub lines: Vec<CartLine>,
}

/// Copyable handle over the cart store, provided via context
#[derive(Clone, Copy)]
pub struct CartContext {
    store: Store<CartState>,
}

impl CartContext {
    pub fn new() -> Self {
        Self {
            store: Store::new(CartState::default()),
        }
    }

    /// Snapshot of the current line items
    pub fn lines(&self) -> Vec<CartLine> {
        self.store.lines().get()
    }

    /// Cart mutation entry point; appends unconditionally. Duplicate
    /// guarding is the reconciler's job, not the store's.
    pub fn push(&self, line: CartLine) {
        self.store.lines().write().push(line);
    }
}

impl Default for CartContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the cart from context
pub fn use_cart() -> CartContext {
    expect_context::<CartContext>()
}

/// Outcome of the duplicate check
#[derive(Debug, Clone, PartialEq)]
pub enum Reconciliation {
    /// Not in the cart yet; append this line and report success
    Added(CartLine),
    /// Already present; leave the cart untouched
    Duplicate,
}

/// Decide whether `item` may enter the cart. Linear scan is fine for a
/// personal cart; switch to a map keyed by id if carts ever grow large.
pub fn reconcile(item: &ItemRecord, lines: &[CartLine]) -> Reconciliation {
    if lines.iter().any(|line| line.id == item.id) {
        Reconciliation::Duplicate
    } else {
        Reconciliation::Added(CartLine::from_record(item))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: &str) -> ItemRecord {
        ItemRecord {
            id: id.to_string(),
            name: "Pizza".to_string(),
            ingredients: "cheese, tomato".to_string(),
            price: 9.5,
            main_image: "pizza.png".to_string(),
            secondary_image: "data:image/png;base64,iVBORw0KG".to_string(),
            tertiary_image: "side.png".to_string(),
            descriptions: "classic".to_string(),
            quantity: 1,
        }
    }

    #[test]
    fn test_first_order_is_added() {
        let item = make_item("a1");
        let lines = Vec::new();

        match reconcile(&item, &lines) {
            Reconciliation::Added(line) => {
                assert_eq!(line.id, "a1");
                assert_eq!(line.quantity, 1);
            }
            Reconciliation::Duplicate => panic!("empty cart should accept the item"),
        }
    }

    #[test]
    fn test_second_order_is_duplicate() {
        let item = make_item("a1");
        let mut lines = Vec::new();

        match reconcile(&item, &lines) {
            Reconciliation::Added(line) => lines.push(line),
            Reconciliation::Duplicate => panic!("first order must be added"),
        }
        assert_eq!(reconcile(&item, &lines), Reconciliation::Duplicate);
        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn test_order_action_is_idempotent() {
        let item = make_item("a1");
        let mut lines = Vec::new();
        let mut outcomes = Vec::new();

        for _ in 0..3 {
            let outcome = reconcile(&item, &lines);
            if let Reconciliation::Added(line) = &outcome {
                lines.push(line.clone());
            }
            outcomes.push(outcome);
        }

        // Exactly one line, one success, duplicates after that
        assert_eq!(lines.len(), 1);
        assert!(matches!(outcomes[0], Reconciliation::Added(_)));
        assert_eq!(outcomes[1], Reconciliation::Duplicate);
        assert_eq!(outcomes[2], Reconciliation::Duplicate);
    }

    #[test]
    fn test_distinct_ids_do_not_collide() {
        let mut lines = Vec::new();
        for id in ["a1", "b2", "c3"] {
            match reconcile(&make_item(id), &lines) {
                Reconciliation::Added(line) => lines.push(line),
                Reconciliation::Duplicate => panic!("distinct id {} rejected", id),
            }
        }
        assert_eq!(lines.len(), 3);
    }
}
