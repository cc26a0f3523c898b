//! In-process [`ContactStore`] adapter.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use super::{ContactStore, StoreError};
use crate::contact::{Contact, ContactId, NewContact};

/// Contacts held in memory for the lifetime of the process.
///
/// Ids start at 1 and grow by one per insert. Deleted ids are not reused,
/// matching an auto-increment column.
#[derive(Debug)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

#[derive(Debug)]
struct Inner {
    next_id: ContactId,
    rows: BTreeMap<ContactId, Contact>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner { next_id: 1, rows: BTreeMap::new() }),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self { Self::new() }
}

#[async_trait]
impl ContactStore for MemoryStore {
    async fn get(&self, id: ContactId) -> Result<Contact, StoreError> {
        self.inner
            .read()
            .await
            .rows
            .get(&id)
            .cloned()
            .ok_or(StoreError::NoRecord)
    }

    async fn find_all(&self) -> Result<Vec<Contact>, StoreError> {
        Ok(self.inner.read().await.rows.values().cloned().collect())
    }

    async fn insert(&self, fields: NewContact) -> Result<ContactId, StoreError> {
        let mut inner = self.inner.write().await;
        let id = inner.next_id;
        inner.next_id = id
            .checked_add(1)
            .ok_or_else(|| StoreError::Other("contact id space exhausted".to_owned()))?;
        inner.rows.insert(id, Contact::from_new(id, fields));
        debug!(id, "contact inserted");
        Ok(id)
    }

    async fn update(&self, id: ContactId, fields: NewContact) -> Result<ContactId, StoreError> {
        let mut inner = self.inner.write().await;
        let row = inner.rows.get_mut(&id).ok_or(StoreError::NoRecord)?;
        *row = Contact::from_new(id, fields);
        debug!(id, "contact updated");
        Ok(id)
    }

    async fn delete(&self, id: ContactId) -> Result<ContactId, StoreError> {
        let mut inner = self.inner.write().await;
        inner.rows.remove(&id).ok_or(StoreError::NoRecord)?;
        debug!(id, "contact deleted");
        Ok(id)
    }
}
