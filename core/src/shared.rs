//! A cloneable, lock-guarded handle to a [`Store`].
//!
//! # Design
//! One `RwLock` covers the whole store. Every mutation holds the write lock
//! for its full duration; reads hold the read lock just long enough to copy
//! out owned values. Clones share the same store, so each thread or session
//! can own its own handle and call the `&mut self` operations freely.
//!
//! A poisoned lock is taken over rather than propagated: each store
//! operation is a single `Vec` edit, so a panicking holder cannot leave the
//! list half-updated.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::ValidationError;
use crate::item::Item;
use crate::store::{ShoppingList, Store};

#[derive(Debug, Clone, Default)]
pub struct SharedStore {
    inner: Arc<RwLock<Store>>,
}

impl From<Store> for SharedStore {
    fn from(store: Store) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }
}

impl SharedStore {
    /// A handle to a fresh [`Store::new`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Owned copy of the current store contents.
    pub fn snapshot(&self) -> Store {
        self.read().clone()
    }

    /// Number of items in the shared list.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether the shared list holds no items.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> RwLockReadGuard<'_, Store> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Store> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ShoppingList for SharedStore {
    fn add(
        &mut self,
        name: &str,
        quantity: i32,
        notes: Option<&str>,
    ) -> Result<Item, ValidationError> {
        self.write().add(name, quantity, notes)
    }

    fn get_all(&self) -> Vec<Item> {
        self.read().get_all()
    }

    fn get_by_id(&self, id: &str) -> Option<Item> {
        self.read().get_by_id(id)
    }

    fn update(
        &mut self,
        id: &str,
        name: &str,
        quantity: i32,
        notes: Option<&str>,
    ) -> Result<Option<Item>, ValidationError> {
        self.write().update(id, name, quantity, notes)
    }

    fn delete(&mut self, id: &str) -> bool {
        self.write().delete(id)
    }

    fn search(&self, query: &str) -> Vec<Item> {
        self.read().search(query)
    }

    fn clear_purchased(&mut self) -> usize {
        self.write().clear_purchased()
    }

    fn toggle_purchased(&mut self, id: &str) -> bool {
        self.write().toggle_purchased(id)
    }

    fn reorder(&mut self, ordered_ids: &[&str]) -> bool {
        self.write().reorder(ordered_ids)
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;

    #[test]
    fn clones_share_the_same_store() {
        let mut a = SharedStore::new();
        let b = a.clone();

        let item = a.add("Milk", 1, None).unwrap();
        assert_eq!(b.get_by_id(item.id()), Some(item));
        assert_eq!(b.len(), 1);
    }

    #[test]
    fn snapshot_is_detached() {
        let mut shared = SharedStore::from(Store::with_demo_items().unwrap());
        let mut snapshot = shared.snapshot();

        let first = snapshot.get_all()[0].id().to_string();
        assert!(snapshot.delete(&first));

        assert_eq!(shared.len(), 4);
        assert!(shared.get_by_id(&first).is_some());
        assert!(shared.delete(&first));
        assert_eq!(shared.len(), 3);
    }

    #[test]
    fn concurrent_adds_are_all_kept() {
        let shared = SharedStore::new();

        let handles: Vec<_> = (0..8)
            .map(|t| {
                let mut handle = shared.clone();
                thread::spawn(move || {
                    for i in 0..25 {
                        handle.add(&format!("t{t}-{i}"), i, None).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let all = shared.get_all();
        assert_eq!(all.len(), 200);
        // Per-thread insertion order survives interleaving.
        for t in 0..8 {
            let prefix = format!("t{t}-");
            let seen: Vec<_> = all
                .iter()
                .filter(|item| item.name().starts_with(&prefix))
                .map(|item| item.name().to_string())
                .collect();
            let expected: Vec<_> = (0..25).map(|i| format!("t{t}-{i}")).collect();
            assert_eq!(seen, expected);
        }
    }

    #[test]
    fn poisoned_lock_is_recovered() {
        let mut shared = SharedStore::new();
        shared.add("Milk", 1, None).unwrap();

        let poisoner = shared.clone();
        let _ = thread::spawn(move || {
            let _guard = poisoner.write();
            panic!("poison the lock");
        })
        .join();

        assert_eq!(shared.len(), 1);
        assert!(shared.add("Bread", 1, None).is_ok());
    }
}
