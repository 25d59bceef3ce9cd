use super::priority::Priority;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Identity value of a record the store has not assigned an id to yet.
pub const UNASSIGNED_ID: i32 = 0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToDo {
    pub id: i32,
    pub title: String,
    pub priority: Priority,
    pub description: String,
}

impl ToDo {
    pub fn new(title: &str, priority: Priority, description: &str) -> Self {
        ToDo {
            id: UNASSIGNED_ID,
            title: title.to_string(),
            priority,
            description: description.to_string(),
        }
    }

    /// Same record with the given identity; used for full-replace updates.
    pub fn with_id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn is_persisted(&self) -> bool {
        self.id != UNASSIGNED_ID
    }
}

/// The read queries the store answers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ToDoQuery {
    /// Every record in row order.
    All,
    /// High, then medium, then low; ties in row order.
    HighPriorityFirst,
    /// Low, then medium, then high; ties in row order.
    LowPriorityFirst,
    /// Records whose title contains the text, case-sensitively.
    Search(String),
}

/// List orderings a user can pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    All,
    High,
    Low,
}

impl SortOrder {
    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::All => "Insertion order",
            SortOrder::High => "High priority first",
            SortOrder::Low => "Low priority first",
        }
    }
}

impl From<SortOrder> for ToDoQuery {
    fn from(order: SortOrder) -> Self {
        match order {
            SortOrder::All => ToDoQuery::All,
            SortOrder::High => ToDoQuery::HighPriorityFirst,
            SortOrder::Low => ToDoQuery::LowPriorityFirst,
        }
    }
}

/// Checks user input before it is turned into a record.
///
/// Both fields must contain something other than whitespace. The store never
/// performs this check itself.
pub fn verify_data_from_user(title: &str, description: &str) -> bool {
    !(title.trim().is_empty() || description.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_has_no_identity() {
        let todo = ToDo::new("Buy milk", Priority::High, "2 litres");
        assert_eq!(todo.id, UNASSIGNED_ID);
        assert!(!todo.is_persisted());
        assert!(todo.with_id(4).is_persisted());
    }

    #[test]
    fn blank_fields_fail_validation() {
        assert!(verify_data_from_user("Title", "Description"));
        assert!(!verify_data_from_user("", "Description"));
        assert!(!verify_data_from_user("Title", "   "));
    }
}
