//! Displayed list state.
//!
//! [`ListAdapter`] holds the list currently on screen. Feeding it a fresh
//! snapshot swaps the list and reports only the edits between the two to the
//! renderer, so untouched rows are never redrawn.

use super::diff::{calculate_diff, ListItem, ListUpdateCallback};

pub struct ListAdapter<T: ListItem> {
    data_list: Vec<T>,
}

impl<T: ListItem> ListAdapter<T> {
    pub fn new() -> Self {
        ListAdapter { data_list: Vec::new() }
    }

    pub fn data_list(&self) -> &[T] {
        &self.data_list
    }

    pub fn item_count(&self) -> usize {
        self.data_list.len()
    }

    pub fn get(&self, position: usize) -> Option<&T> {
        self.data_list.get(position)
    }

    /// Replaces the displayed list and dispatches the difference.
    ///
    /// Returns the number of edits dispatched; zero when nothing changed.
    pub fn set_data<C: ListUpdateCallback<T> + ?Sized>(&mut self, data: Vec<T>, callback: &mut C) -> usize {
        let script = calculate_diff(&self.data_list, &data);
        self.data_list = data;
        script.dispatch_updates_to(callback);
        script.len()
    }

    /// Replaces the displayed list without dispatching anything, for a
    /// screen that is about to be drawn from scratch.
    pub fn reset(&mut self, data: Vec<T>) {
        self.data_list = data;
    }

    /// Drops a row locally ahead of the store, as a swipe gesture does.
    /// The next snapshot from the store then produces no further edit for it.
    pub fn remove_at<C: ListUpdateCallback<T> + ?Sized>(&mut self, position: usize, callback: &mut C) -> Option<T> {
        if position >= self.data_list.len() {
            return None;
        }
        let item = self.data_list.remove(position);
        callback.on_removed(position);
        Some(item)
    }
}

impl<T: ListItem> Default for ListAdapter<T> {
    fn default() -> Self {
        Self::new()
    }
}
