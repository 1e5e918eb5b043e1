use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::models::{DataItem, NewDataItem};

#[derive(Debug)]
struct Inner {
    items: BTreeMap<i64, DataItem>,
    next_id: i64,
}

/// Shareable in-memory item store for use across async handlers
///
/// Cloning is cheap and every clone sees the same items. Writers hold the
/// lock for the whole assign-id-and-insert step, so ids are unique and
/// strictly increasing even under concurrent requests. Ids are never reused
/// after deletion.
#[derive(Debug, Clone)]
pub struct Store {
    inner: Arc<RwLock<Inner>>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// Create an empty store whose first id is 1
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                items: BTreeMap::new(),
                next_id: 1,
            })),
        }
    }

    /// Insert a new item, assigning it the next id
    pub fn insert(&self, new_item: NewDataItem) -> DataItem {
        let mut inner = self.inner.write();
        let id = inner.next_id;
        inner.next_id += 1;

        let item = DataItem {
            id,
            name: new_item.name,
            value: new_item.value,
        };
        inner.items.insert(id, item.clone());

        tracing::debug!("Inserted item with id: {}", id);
        item
    }

    pub fn get(&self, id: i64) -> Option<DataItem> {
        self.inner.read().items.get(&id).cloned()
    }

    /// All items in insertion order
    pub fn list(&self) -> Vec<DataItem> {
        self.inner.read().items.values().cloned().collect()
    }

    /// Remove an item, returning it if it was present
    pub fn delete(&self, id: i64) -> Option<DataItem> {
        let removed = self.inner.write().items.remove(&id);
        if removed.is_some() {
            tracing::debug!("Removed item with id: {}", id);
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.inner.read().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
