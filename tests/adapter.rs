#[cfg(test)]
mod tests {
    use todolist::libs::adapter::ListAdapter;
    use todolist::libs::diff::ListUpdateCallback;
    use todolist::libs::priority::Priority;
    use todolist::libs::todo::ToDo;

    /// Replays every dispatched edit on its own copy of the list.
    #[derive(Default)]
    struct Mirror {
        rows: Vec<ToDo>,
        events: usize,
    }

    impl ListUpdateCallback<ToDo> for Mirror {
        fn on_inserted(&mut self, position: usize, item: &ToDo) {
            self.rows.insert(position, item.clone());
            self.events += 1;
        }

        fn on_removed(&mut self, position: usize) {
            self.rows.remove(position);
            self.events += 1;
        }

        fn on_moved(&mut self, from: usize, to: usize) {
            let row = self.rows.remove(from);
            self.rows.insert(to, row);
            self.events += 1;
        }

        fn on_changed(&mut self, position: usize, item: &ToDo) {
            self.rows[position] = item.clone();
            self.events += 1;
        }
    }

    fn todo(id: i32, title: &str, priority: Priority) -> ToDo {
        ToDo::new(title, priority, "x").with_id(id)
    }

    #[test]
    fn test_first_snapshot_inserts_every_row() {
        let mut adapter = ListAdapter::new();
        let mut mirror = Mirror::default();
        let data = vec![todo(1, "a", Priority::Low), todo(2, "b", Priority::High)];

        assert_eq!(adapter.set_data(data.clone(), &mut mirror), 2);
        assert_eq!(mirror.rows, data);
        assert_eq!(adapter.item_count(), 2);
    }

    #[test]
    fn test_identical_snapshot_dispatches_nothing() {
        let mut adapter = ListAdapter::new();
        let mut mirror = Mirror::default();
        let data = vec![todo(1, "a", Priority::Low), todo(2, "b", Priority::High)];
        adapter.set_data(data.clone(), &mut mirror);
        let events = mirror.events;

        assert_eq!(adapter.set_data(data, &mut mirror), 0);
        assert_eq!(mirror.events, events);
    }

    #[test]
    fn test_resort_mirrors_exactly() {
        let mut adapter = ListAdapter::new();
        let mut mirror = Mirror::default();
        let by_row = vec![
            todo(1, "low one", Priority::Low),
            todo(2, "high", Priority::High),
            todo(3, "medium", Priority::Medium),
            todo(4, "low two", Priority::Low),
        ];
        let by_high = vec![by_row[1].clone(), by_row[2].clone(), by_row[0].clone(), by_row[3].clone()];
        adapter.set_data(by_row, &mut mirror);

        let edits = adapter.set_data(by_high.clone(), &mut mirror);
        assert!(edits <= 2);
        assert_eq!(mirror.rows, by_high);
        assert_eq!(adapter.data_list(), by_high.as_slice());
    }

    #[test]
    fn test_edited_row_is_a_single_change() {
        let mut adapter = ListAdapter::new();
        let mut mirror = Mirror::default();
        adapter.set_data(vec![todo(1, "a", Priority::Low), todo(2, "b", Priority::Low)], &mut mirror);

        let edited = vec![todo(1, "a", Priority::Low), todo(2, "b edited", Priority::High)];
        assert_eq!(adapter.set_data(edited.clone(), &mut mirror), 1);
        assert_eq!(mirror.rows, edited);
    }

    #[test]
    fn test_local_removal_is_not_repeated() {
        let mut adapter = ListAdapter::new();
        let mut mirror = Mirror::default();
        let data = vec![todo(1, "a", Priority::Low), todo(2, "b", Priority::Low), todo(3, "c", Priority::Low)];
        adapter.set_data(data.clone(), &mut mirror);

        let removed = adapter.remove_at(1, &mut mirror).unwrap();
        assert_eq!(removed.id, 2);
        assert_eq!(mirror.rows.len(), 2);

        // The store's next snapshot agrees with the screen.
        let after_delete = vec![data[0].clone(), data[2].clone()];
        assert_eq!(adapter.set_data(after_delete, &mut mirror), 0);

        // Undo brings the row back in its old place.
        assert_eq!(adapter.set_data(data.clone(), &mut mirror), 1);
        assert_eq!(mirror.rows, data);
    }

    #[test]
    fn test_remove_out_of_range_is_ignored() {
        let mut adapter: ListAdapter<ToDo> = ListAdapter::new();
        let mut mirror = Mirror::default();

        assert!(adapter.remove_at(0, &mut mirror).is_none());
        assert_eq!(mirror.events, 0);
    }

    #[test]
    fn test_reset_skips_dispatch() {
        let mut adapter = ListAdapter::new();
        let mut mirror = Mirror::default();

        adapter.reset(vec![todo(1, "a", Priority::Low)]);
        assert_eq!(mirror.events, 0);
        assert_eq!(adapter.get(0).unwrap().title, "a");

        adapter.set_data(vec![], &mut mirror);
        assert_eq!(mirror.events, 1);
    }
}
