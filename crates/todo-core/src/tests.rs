//! Session Integration Tests
//!
//! Drives `TodoSession` over an in-memory store.

#[cfg(test)]
mod tests {
    use crate::domain::{Item, ItemId, TodoError, TodoResult};
    use crate::repository::{KeyValueStore, MemoryStore, DEFAULT_STORAGE_KEY};
    use crate::TodoSession;

    fn setup_session() -> TodoSession<MemoryStore> {
        TodoSession::open(MemoryStore::new(), DEFAULT_STORAGE_KEY)
    }

    fn reopen(session: TodoSession<MemoryStore>) -> TodoSession<MemoryStore> {
        TodoSession::open(session.store().clone(), DEFAULT_STORAGE_KEY)
    }

    /// Store whose writes always fail
    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> TodoResult<Option<String>> {
            Ok(None)
        }

        fn set(&mut self, _key: &str, _value: &str) -> TodoResult<()> {
            Err(TodoError::StorageUnavailable)
        }
    }

    #[test]
    fn test_open_empty_store() {
        let session = setup_session();
        assert!(session.list().is_empty());
        assert_eq!(session.store().writes(), 0);
    }

    #[test]
    fn test_add_then_remove_scenario() {
        let mut session = setup_session();

        assert_eq!(session.submit("Buy milk").unwrap(), Some(ItemId::new(1)));
        assert_eq!(session.submit("Walk dog").unwrap(), Some(ItemId::new(2)));
        session.remove(ItemId::new(1)).unwrap();

        assert_eq!(session.list().items(), &[Item::new(ItemId::new(2), "Walk dog")]);
    }

    #[test]
    fn test_submit_blank_is_ignored() {
        let mut session = setup_session();

        assert_eq!(session.submit("").unwrap(), None);
        assert_eq!(session.submit("   \t").unwrap(), None);

        assert_eq!(session.list().len(), 0);
        assert_eq!(session.store().writes(), 0);
    }

    #[test]
    fn test_submit_trims_text() {
        let mut session = setup_session();
        session.submit("  Call mom  ").unwrap();
        assert_eq!(session.list().items()[0].text(), "Call mom");
    }

    #[test]
    fn test_every_mutation_persists() {
        let mut session = setup_session();

        session.submit("a").unwrap();
        session.submit("b").unwrap();
        assert_eq!(session.store().writes(), 2);

        session.remove(ItemId::new(99)).unwrap();
        assert_eq!(session.store().writes(), 3);

        session.clear().unwrap();
        assert_eq!(session.store().writes(), 4);
        assert_eq!(
            session.store().raw(DEFAULT_STORAGE_KEY),
            Some(r#"{"version":1,"items":[]}"#)
        );
    }

    #[test]
    fn test_reopen_restores_list() {
        let mut session = setup_session();
        session.submit("a").unwrap();
        session.submit("b").unwrap();
        session.submit("c").unwrap();
        session.remove(ItemId::new(2)).unwrap();

        let session = reopen(session);
        let texts: Vec<&str> = session.list().iter().map(Item::text).collect();
        assert_eq!(texts, vec!["a", "c"]);
        assert_eq!(session.list().next_id(), ItemId::new(4));
    }

    #[test]
    fn test_ids_continue_after_last_removed() {
        let mut session = setup_session();
        session.submit("a").unwrap();
        session.submit("b").unwrap();
        session.remove(ItemId::new(2)).unwrap();

        // last.id + 1
        assert_eq!(session.submit("c").unwrap(), Some(ItemId::new(2)));
        assert_eq!(session.list().len(), 2);
    }

    #[test]
    fn test_open_malformed_starts_empty() {
        for raw in ["{not json", "42", r#"{"version":9,"items":[]}"#] {
            let store = MemoryStore::with_entry(DEFAULT_STORAGE_KEY, raw);
            let session = TodoSession::open(store, DEFAULT_STORAGE_KEY);
            assert!(session.list().is_empty(), "expected empty list for {raw:?}");
        }
    }

    #[test]
    fn test_open_legacy_then_upgrade_on_write() {
        let store = MemoryStore::with_entry(
            DEFAULT_STORAGE_KEY,
            r#"[{"_id":1,"_item":"old one"},{"_id":"2","_item":"old two"}]"#,
        );
        let mut session = TodoSession::open(store, DEFAULT_STORAGE_KEY);
        assert_eq!(session.list().len(), 2);

        // String id from old data compares equal once normalized
        session.remove("2".parse().unwrap()).unwrap();
        assert_eq!(
            session.store().raw(DEFAULT_STORAGE_KEY),
            Some(r#"{"version":1,"items":[{"id":1,"text":"old one"}]}"#)
        );
    }

    #[test]
    fn test_ids_stay_unique_after_max_stored_id() {
        let store = MemoryStore::with_entry(
            DEFAULT_STORAGE_KEY,
            r#"[{"_id":4294967295,"_item":"old"}]"#,
        );
        let mut session = TodoSession::open(store, DEFAULT_STORAGE_KEY);

        session.submit("new").unwrap();
        session.submit("newer").unwrap();

        let ids: Vec<u32> = session.list().iter().map(|item| item.id().get()).collect();
        assert_eq!(ids, vec![u32::MAX, 1, 2]);
    }

    #[test]
    fn test_other_keys_are_untouched() {
        let store = MemoryStore::with_entry("MyToDoList", r#"[{"_id":1,"_item":"x"}]"#);
        let mut session = TodoSession::open(store, DEFAULT_STORAGE_KEY);
        assert!(session.list().is_empty());

        session.submit("fresh").unwrap();
        assert!(session.store().raw("MyToDoList").is_some());
        assert_eq!(session.store().writes(), 1);
    }

    #[test]
    fn test_write_failure_keeps_in_memory_list() {
        let mut session = TodoSession::open(ReadOnlyStore, DEFAULT_STORAGE_KEY);
        let result = session.submit("offline");
        assert!(matches!(result, Err(TodoError::StorageUnavailable)));
        assert_eq!(session.list().len(), 1);
    }
}
