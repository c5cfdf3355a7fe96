use crate::shared::infrastructure::user_directory::DirectoryEntry;
use crate::shared::infrastructure::user_directory::in_memory::InMemoryUserDirectory;

/// mgr-1 manages emp-1 and emp-2, mgr-2 manages emp-3. adm-1 reports to nobody.
pub fn org_directory() -> InMemoryUserDirectory {
    InMemoryUserDirectory::with_entries(
        [
            ("emp-1", Some("mgr-1")),
            ("emp-2", Some("mgr-1")),
            ("emp-3", Some("mgr-2")),
            ("mgr-1", Some("adm-1")),
            ("mgr-2", Some("adm-1")),
            ("adm-1", None),
        ]
        .into_iter()
        .map(|(id, manager_id)| DirectoryEntry {
            id: id.to_string(),
            manager_id: manager_id.map(str::to_string),
        }),
    )
}
