//! In-memory shopping list core.
//!
//! # Overview
//! An [`Item`] is a validated shopping list entry; a [`Store`] keeps items in
//! insertion order and exposes the [`ShoppingList`] operations over them. No
//! persistence, no I/O: callers (UI, CLI, HTTP handler) own their own
//! serialization and transport.
//!
//! # Design
//! - `Item` fields are private; setters enforce the rules. A blank name is a
//!   [`ValidationError`], a quantity below 1 is clamped to 1.
//! - Unknown ids are never errors: lookups return `None`, mutations `false`.
//! - `Store` is single-owner. [`SharedStore`] wraps one in a coarse lock for
//!   callers that need to share it across threads.

pub mod config;
pub mod demo;
pub mod error;
pub mod item;
pub mod logging;
pub mod shared;
pub mod store;

pub use config::StoreConfig;
pub use error::ValidationError;
pub use item::Item;
pub use shared::SharedStore;
pub use store::{ShoppingList, Store};
