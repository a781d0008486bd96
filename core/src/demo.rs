//! Sample items for seeding a store in demonstrations.

use crate::error::ValidationError;
use crate::item::Item;

const DEMO_ITEMS: [(&str, i32, &str); 4] = [
    ("Dishwasher tablets", 1, "80st/pack - Rea"),
    ("Ground meat", 1, "2kg - origin Sweden"),
    ("Apples", 10, "Pink Lady"),
    ("Toothpaste", 1, "Colgate"),
];

/// Four unpurchased grocery items with fresh ids.
pub fn items() -> Result<Vec<Item>, ValidationError> {
    DEMO_ITEMS
        .iter()
        .map(|&(name, quantity, notes)| {
            let mut item = Item::new(name)?;
            item.set_quantity(quantity);
            item.set_notes(Some(notes.to_string()));
            Ok(item)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_items_are_valid_and_unpurchased() {
        let items = items().unwrap();
        assert_eq!(items.len(), 4);
        assert_eq!(items.len(), DEMO_ITEMS.len());
        assert_eq!(items[2].name(), "Apples");
        assert_eq!(items[2].quantity(), 10);
        assert_eq!(items[2].notes(), Some("Pink Lady"));
        assert!(items.iter().all(|item| !item.is_purchased()));
    }

    #[test]
    fn demo_items_get_fresh_ids() {
        let first = items().unwrap();
        let second = items().unwrap();
        assert_ne!(first[0].id(), second[0].id());
    }
}
