//! Fetch Lifecycle Bookkeeping
//!
//! Latest-wins slot for the item fetch. Every fetch takes a ticket from
//! `begin`, and only the ticket from the most recent `begin` may publish
//! its result, so a superseded or post-teardown response is discarded
//! instead of clobbering newer state.

use crate::models::ItemRecord;

/// View state for the item-detail fetch
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemSlot {
    generation: u64,
    record: Option<ItemRecord>,
}

impl ItemSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new fetch generation. Clears the record so a stale item
    /// never renders while the next one loads.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.record = None;
        self.generation
    }

    /// Publish a fetch result. Ignored unless `ticket` is still current.
    pub fn resolve(&mut self, ticket: u64, record: ItemRecord) -> bool {
        if ticket != self.generation {
            return false;
        }
        self.record = Some(record);
        true
    }

    /// Tear down the slot; outstanding tickets can no longer publish.
    pub fn retire(&mut self) {
        self.generation += 1;
        self.record = None;
    }

    /// Current view state; `None` means still loading
    pub fn record(&self) -> Option<&ItemRecord> {
        self.record.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record(id: &str) -> ItemRecord {
        ItemRecord {
            id: id.to_string(),
            name: format!("Dish {}", id),
            ingredients: "cheese, tomato".to_string(),
            price: 9.5,
            main_image: "pizza.png".to_string(),
            secondary_image: "second.png".to_string(),
            tertiary_image: "side.png".to_string(),
            descriptions: "classic".to_string(),
            quantity: 1,
        }
    }

    #[test]
    fn test_resolve_applies_current_ticket() {
        let mut slot = ItemSlot::new();
        let ticket = slot.begin();
        assert!(slot.record().is_none());

        assert!(slot.resolve(ticket, make_record("a1")));
        assert_eq!(slot.record().unwrap().id, "a1");
    }

    #[test]
    fn test_retire_discards_late_response() {
        let mut slot = ItemSlot::new();
        let ticket = slot.begin();
        slot.retire();

        // The fetch resolves after teardown
        assert!(!slot.resolve(ticket, make_record("a1")));
        assert!(slot.record().is_none());
    }

    #[test]
    fn test_superseded_fetch_is_discarded() {
        let mut slot = ItemSlot::new();
        let first = slot.begin();
        let second = slot.begin();

        // Newer fetch lands first, then the stale one straggles in
        assert!(slot.resolve(second, make_record("b2")));
        assert!(!slot.resolve(first, make_record("a1")));
        assert_eq!(slot.record().unwrap().id, "b2");
    }

    #[test]
    fn test_latest_wins_regardless_of_resolve_order() {
        let mut slot = ItemSlot::new();
        let first = slot.begin();
        let second = slot.begin();

        // Stale response arrives first this time
        assert!(!slot.resolve(first, make_record("a1")));
        assert!(slot.record().is_none());
        assert!(slot.resolve(second, make_record("b2")));
        assert_eq!(slot.record().unwrap().id, "b2");
    }

    #[test]
    fn test_begin_clears_previous_record() {
        let mut slot = ItemSlot::new();
        let ticket = slot.begin();
        slot.resolve(ticket, make_record("a1"));

        // Navigating to a new item must not leave the old one on screen
        slot.begin();
        assert!(slot.record().is_none());
    }
}
