use super::diff::ListUpdateCallback;
use super::messages::Message;
use super::todo::ToDo;
use crate::msg_print;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn todos(todos: &[ToDo]) {
        let mut table = Table::new();

        table.add_row(row!["#", "ID", "TITLE", "PRIORITY", "DESCRIPTION"]);
        for (position, todo) in todos.iter().enumerate() {
            table.add_row(row![position, todo.id, todo.title, todo.priority, todo.description]);
        }
        table.printstd();
    }
}

/// Prints each list edit as one line instead of redrawing the table.
#[derive(Debug, Default)]
pub struct PatchPrinter {
    pub printed: usize,
}

impl ListUpdateCallback<ToDo> for PatchPrinter {
    fn on_inserted(&mut self, position: usize, item: &ToDo) {
        msg_print!(Message::RowInserted(position, describe(item)));
        self.printed += 1;
    }

    fn on_removed(&mut self, position: usize) {
        msg_print!(Message::RowRemoved(position));
        self.printed += 1;
    }

    fn on_moved(&mut self, from: usize, to: usize) {
        msg_print!(Message::RowMoved(from, to));
        self.printed += 1;
    }

    fn on_changed(&mut self, position: usize, item: &ToDo) {
        msg_print!(Message::RowChanged(position, describe(item)));
        self.printed += 1;
    }
}

fn describe(todo: &ToDo) -> String {
    format!("#{} {} [{}] {}", todo.id, todo.title, todo.priority, todo.description)
}
