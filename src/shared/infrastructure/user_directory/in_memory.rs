use crate::shared::infrastructure::user_directory::{DirectoryEntry, DirectoryError, UserDirectory};
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryUserDirectory {
    entries: RwLock<HashMap<String, DirectoryEntry>>,
    is_offline: bool,
}

impl InMemoryUserDirectory {
    pub fn with_entries(entries: impl IntoIterator<Item = DirectoryEntry>) -> Self {
        Self {
            entries: RwLock::new(
                entries
                    .into_iter()
                    .map(|entry| (entry.id.clone(), entry))
                    .collect(),
            ),
            is_offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }
}

#[async_trait::async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn find_employee(&self, employee_id: &str) -> Result<Option<DirectoryEntry>, DirectoryError> {
        if self.is_offline {
            return Err(DirectoryError::Backend("User directory offline".into()));
        }
        Ok(self.entries.read().await.get(employee_id).cloned())
    }
}
