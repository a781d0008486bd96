//! The shopping list entry.
//!
//! # Design
//! Fields are private so every write goes through a setter: `name` is a hard
//! validation (blank input is an error), `quantity` is a soft one (anything
//! below 1 is clamped), `notes` is stored verbatim. Deserialization funnels
//! through [`ItemRecord`] so a serialized item cannot bypass those rules; a
//! supplied id must not be blank.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

/// Smallest quantity an item can hold.
pub const MIN_QUANTITY: i32 = 1;

/// A single shopping list entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ItemRecord")]
pub struct Item {
    id: String,
    name: String,
    quantity: i32,
    notes: Option<String>,
    purchased: bool,
}

impl Default for Item {
    fn default() -> Self {
        Self {
            id: new_id(),
            name: String::new(),
            quantity: MIN_QUANTITY,
            notes: None,
            purchased: false,
        }
    }
}

impl Item {
    /// Create an item with a validated name and default quantity.
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        let mut item = Self::default();
        item.set_name(name)?;
        Ok(item)
    }

    /// Unique identifier, fixed at construction.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Trimmed name; empty only on a default-constructed item.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Quantity, always at least [`MIN_QUANTITY`].
    pub fn quantity(&self) -> i32 {
        self.quantity
    }

    /// Notes exactly as they were given.
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Whether the item has been marked as bought.
    pub fn is_purchased(&self) -> bool {
        self.purchased
    }

    /// Store `name` trimmed. Blank input is rejected and leaves the item as it was.
    pub fn set_name(&mut self, name: &str) -> Result<(), ValidationError> {
        self.name = validate_name(name)?;
        Ok(())
    }

    /// Store `quantity`, clamping anything below [`MIN_QUANTITY`].
    pub fn set_quantity(&mut self, quantity: i32) {
        self.quantity = clamp_quantity(quantity);
    }

    /// Store `notes` verbatim, without trimming.
    pub fn set_notes(&mut self, notes: Option<String>) {
        self.notes = notes;
    }

    /// Mark the item as bought or not.
    pub fn set_purchased(&mut self, purchased: bool) {
        self.purchased = purchased;
    }

    /// Flip the purchased flag.
    pub fn toggle_purchased(&mut self) {
        self.purchased = !self.purchased;
    }
}

pub(crate) fn validate_name(name: &str) -> Result<String, ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::blank("name"));
    }
    Ok(trimmed.to_string())
}

/// A supplied id must carry at least one non-whitespace character; an absent
/// one is generated.
fn validate_id(id: Option<String>) -> Result<String, ValidationError> {
    match id {
        Some(id) if id.trim().is_empty() => Err(ValidationError::blank("id")),
        Some(id) => Ok(id),
        None => Ok(new_id()),
    }
}

fn clamp_quantity(quantity: i32) -> i32 {
    quantity.max(MIN_QUANTITY)
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Unvalidated wire form of an [`Item`].
///
/// `name` is optional here so that a `null` or missing name is reported as a
/// [`ValidationError`] rather than a generic serde error.
#[derive(Debug, Deserialize)]
struct ItemRecord {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default = "default_quantity")]
    quantity: i32,
    #[serde(default)]
    notes: Option<String>,
    #[serde(default)]
    purchased: bool,
}

fn default_quantity() -> i32 {
    MIN_QUANTITY
}

impl TryFrom<ItemRecord> for Item {
    type Error = ValidationError;

    fn try_from(record: ItemRecord) -> Result<Self, Self::Error> {
        let id = validate_id(record.id)?;
        let name = validate_name(record.name.as_deref().unwrap_or_default())?;
        Ok(Item {
            id,
            name,
            quantity: clamp_quantity(record.quantity),
            notes: record.notes,
            purchased: record.purchased,
        })
    }
}
