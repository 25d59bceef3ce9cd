//! Pass-through between the view model and the data access object.

use super::dao::ToDoDao;
use super::live::LiveQuery;
use super::todo::{ToDo, ToDoQuery};
use crate::db::todos::StoreError;
use std::sync::Arc;

#[derive(Clone)]
pub struct ToDoRepository {
    dao: Arc<ToDoDao>,
}

impl ToDoRepository {
    pub fn new(dao: Arc<ToDoDao>) -> Self {
        ToDoRepository { dao }
    }

    pub fn insert_data(&self, todo: &ToDo) -> Result<i32, StoreError> {
        self.dao.insert_data(todo)
    }

    pub fn update_data(&self, todo: &ToDo) -> Result<(), StoreError> {
        self.dao.update_data(todo)
    }

    pub fn delete_item(&self, todo: &ToDo) -> Result<(), StoreError> {
        self.dao.delete_item(todo)
    }

    pub fn delete_all(&self) -> Result<usize, StoreError> {
        self.dao.delete_all()
    }

    pub fn get_all_data(&self) -> Result<LiveQuery, StoreError> {
        self.dao.get_all_data()
    }

    pub fn sort_by_high_priority(&self) -> Result<LiveQuery, StoreError> {
        self.dao.sort_by_high_priority()
    }

    pub fn sort_by_low_priority(&self) -> Result<LiveQuery, StoreError> {
        self.dao.sort_by_low_priority()
    }

    pub fn search_database(&self, query: &str) -> Result<LiveQuery, StoreError> {
        self.dao.search_database(query)
    }

    pub fn observe_pending(&self, query: ToDoQuery) -> LiveQuery {
        self.dao.observe_pending(query)
    }

    pub fn refresh(&self, subscription: u64) -> Result<(), StoreError> {
        self.dao.refresh(subscription)
    }

    pub fn fetch(&self, query: &ToDoQuery) -> Result<Vec<ToDo>, StoreError> {
        self.dao.fetch(query)
    }

    pub fn get_by_id(&self, id: i32) -> Result<Option<ToDo>, StoreError> {
        self.dao.get_by_id(id)
    }
}
