#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use todolist::db::db::Db;
    use todolist::db::todos::{StoreError, Todos};
    use todolist::libs::dao::ToDoDao;
    use todolist::libs::priority::Priority;
    use todolist::libs::repository::ToDoRepository;
    use todolist::libs::todo::ToDo;
    use todolist::libs::view_model::ToDoViewModel;

    fn view_model() -> ToDoViewModel {
        let dao = Arc::new(ToDoDao::new(Todos::new(Db::in_memory().unwrap())));
        ToDoViewModel::new(ToDoRepository::new(dao))
    }

    #[tokio::test]
    async fn test_mutations_apply_in_issue_order() {
        let vm = view_model();

        let first = vm.insert_data(ToDo::new("one", Priority::Low, "x"));
        let second = vm.insert_data(ToDo::new("two", Priority::Low, "x"));
        let cleared = vm.delete_all();
        let third = vm.insert_data(ToDo::new("three", Priority::Low, "x"));

        let (first, second) = (first.await.unwrap(), second.await.unwrap());
        assert!(second > first);
        assert_eq!(cleared.await.unwrap(), 2);
        third.await.unwrap();

        let mut live = vm.get_all_data();
        let snapshot = live.next().await.unwrap();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].title, "three");
    }

    #[tokio::test]
    async fn test_first_snapshot_sees_earlier_mutations() {
        let vm = view_model();

        // Not awaited: the subscription's first read is queued behind it.
        let _ = vm.insert_data(ToDo::new("queued", Priority::High, "x"));
        let mut live = vm.sort_by_high_priority();

        let snapshot = live.next().await.unwrap();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].title, "queued");
    }

    #[tokio::test]
    async fn test_handle_resolves_after_publish() {
        let vm = view_model();
        let mut live = vm.search_database("milk");
        assert!(live.next().await.unwrap().is_empty());

        vm.insert_data(ToDo::new("Buy milk", Priority::Medium, "x")).await.unwrap();

        let snapshot = live.try_next().unwrap();
        assert_eq!(snapshot[0].title, "Buy milk");
    }

    #[tokio::test]
    async fn test_update_of_missing_record_fails() {
        let vm = view_model();
        let ghost = ToDo::new("ghost", Priority::Low, "x").with_id(99);

        assert!(matches!(vm.update_data(ghost.clone()).await, Err(StoreError::NotFound(99))));
        assert!(matches!(vm.delete_data(ghost).await, Err(StoreError::NotFound(99))));
    }

    #[tokio::test]
    async fn test_undo_restores_identity() {
        let vm = view_model();
        let id = vm.insert_data(ToDo::new("Keep me", Priority::High, "please")).await.unwrap();
        let todo = vm.find(id).await.unwrap().unwrap();

        let (deleted, undo) = vm.delete_with_undo(todo.clone());
        deleted.await.unwrap();
        assert!(vm.find(id).await.unwrap().is_none());
        assert_eq!(undo.item(), &todo);

        assert_eq!(undo.undo(&vm).await.unwrap(), id);
        assert_eq!(vm.find(id).await.unwrap().unwrap(), todo);
    }

    #[tokio::test]
    async fn test_dropped_handle_still_runs() {
        let vm = view_model();
        let _ = vm.insert_data(ToDo::new("fire and forget", Priority::Low, "x"));

        let mut live = vm.get_all_data();
        assert_eq!(live.next().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_empty_database_flag() {
        let vm = view_model();
        let empty = vm.empty_database();

        vm.check_if_database_empty(&[]);
        assert!(*empty.borrow());

        vm.check_if_database_empty(&[ToDo::new("a", Priority::Low, "b")]);
        assert!(!*empty.borrow());
    }
}
