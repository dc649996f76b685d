use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::{JobRecord, NewJob};
use crate::store::document::{from_document, to_document};
use crate::store::{JobStore, StoreError};

/// In-process store for tests. Round-trips through the stored document shape.
#[derive(Default)]
pub struct InMemoryJobStore {
    documents: Mutex<Vec<(String, serde_json::Value)>>,
}

impl InMemoryJobStore {
    pub fn insert_raw(&self, id: &str, document: serde_json::Value) {
        self.documents
            .lock()
            .unwrap()
            .push((id.to_string(), document));
    }

    pub fn len(&self) -> usize {
        self.documents.lock().unwrap().len()
    }
}

#[async_trait]
impl JobStore for InMemoryJobStore {
    async fn list(&self) -> Result<Vec<JobRecord>, StoreError> {
        let mut records: Vec<JobRecord> = self
            .documents
            .lock()
            .unwrap()
            .iter()
            .map(|(id, doc)| from_document(id.clone(), doc.clone()))
            .collect();
        records.sort_by(|a, b| b.saved_at.cmp(&a.saved_at));
        Ok(records)
    }

    async fn create(&self, job: NewJob) -> Result<JobRecord, StoreError> {
        let id = Uuid::new_v4().to_string();
        let document = to_document(&job)?;
        self.insert_raw(&id, document);
        Ok(job.with_id(id))
    }
}
