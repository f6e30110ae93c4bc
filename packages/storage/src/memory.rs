use crate::{DocumentStore, StorageError};
use formcraft_document::FormDocument;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// In-memory store keyed by document id. Used in tests and for unsaved
/// scratch sessions; contents are lost when the store drops.
#[derive(Default)]
pub struct MemoryStore {
    documents: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentStore for MemoryStore {
    async fn save(&self, key: &str, document: &FormDocument) -> Result<(), StorageError> {
        let json = document.to_json()?;
        self.documents.write().await.insert(key.to_string(), json);
        Ok(())
    }

    async fn load(&self, key: &str) -> Result<Option<FormDocument>, StorageError> {
        let documents = self.documents.read().await;
        match documents.get(key) {
            Some(json) => Ok(Some(FormDocument::from_json(json)?)),
            None => Ok(None),
        }
    }

    async fn list(&self) -> Result<Vec<String>, StorageError> {
        let mut keys: Vec<String> = self.documents.read().await.keys().cloned().collect();
        keys.sort();
        Ok(keys)
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.documents.write().await.remove(key);
        Ok(())
    }
}
