//! Per-user selection stores.

use std::collections::HashMap;
use std::sync::Arc;

use teamboard_core::selection::SelectionStore;
use teamboard_core::types::DbId;
use tokio::sync::RwLock;

/// Holds one [`SelectionStore`] per authenticated user.
///
/// Stores are created on first access and dropped by [`SelectionRegistry::remove`]
/// when the user's session ends.
#[derive(Default)]
pub struct SelectionRegistry {
    stores: RwLock<HashMap<DbId, Arc<SelectionStore>>>,
}

impl SelectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The user's store, creating an empty one if needed.
    pub async fn store_for(&self, user_id: DbId) -> Arc<SelectionStore> {
        if let Some(store) = self.stores.read().await.get(&user_id) {
            return Arc::clone(store);
        }
        let mut stores = self.stores.write().await;
        Arc::clone(stores.entry(user_id).or_default())
    }

    /// Clear and drop the user's store. Returns `true` if one existed.
    pub async fn remove(&self, user_id: DbId) -> bool {
        match self.stores.write().await.remove(&user_id) {
            Some(store) => {
                store.clear();
                true
            }
            None => false,
        }
    }

    pub async fn len(&self) -> usize {
        self.stores.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.stores.read().await.is_empty()
    }
}
