//! Wording of every [`Message`].

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            // === CONFIGURATION ===
            Message::ConfigModuleDatabase => "Database settings".to_string(),
            Message::ConfigModuleList => "List settings".to_string(),
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigReset => "Configuration removed, defaults are in effect".to_string(),
            Message::PromptDbFileName => "Database file name".to_string(),
            Message::PromptDefaultOrder => "Order of the list when it opens".to_string(),
            Message::PromptConfirmDeleteAll => "Ask before deleting every task?".to_string(),

            // === MIGRATIONS ===
            Message::MigrationsFound(count) => format!("Found {} pending migrations", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All migrations completed".to_string(),
            Message::NothingToRollback => "Nothing to roll back".to_string(),
            Message::RollingBack(from, to) => format!("Rolling back from v{} to v{}", from, to),
            Message::RollbackCompleted(version) => format!("Rolled back to v{}", version),
            Message::DbVersion(current, latest, encoding) => {
                format!("Database schema v{} (latest v{}), priority encoding v{}", current, latest, encoding)
            }

            // === TASKS ===
            Message::ToDoAdded(id) => format!("Task #{} added", id),
            Message::ToDoUpdated(id) => format!("Task #{} updated", id),
            Message::ToDoDeleted(title) => format!("Deleted '{}'", title),
            Message::ToDoRestored(title) => format!("Restored '{}'", title),
            Message::AllToDosDeleted(count) => format!("Deleted {} tasks", count),
            Message::ToDoNotFound(id) => format!("Task #{} not found", id),
            Message::PositionNotFound(position) => format!("No task at position {}", position),
            Message::FillAllFields => "Please fill out every field".to_string(),
            Message::NoToDos => "No tasks yet".to_string(),
            Message::NoSearchResults(query) => format!("No task title contains '{}'", query),
            Message::ListHeader(order) => format!("Tasks ({})", order),
            Message::SearchHeader(query) => format!("Tasks matching '{}'", query),
            Message::DeleteAllCancelled => "Nothing was deleted".to_string(),
            Message::NothingToUndo => "Nothing to undo".to_string(),
            Message::UndoHint => "Type 'undo' to bring it back".to_string(),
            Message::StoreFailed(error) => format!("Storage error: {}", error),

            // === PROMPTS ===
            Message::PromptTitle => "Title".to_string(),
            Message::PromptDescription => "Description".to_string(),
            Message::PromptPriority => "Priority".to_string(),
            Message::PromptShellCommand => "todo".to_string(),
            Message::ConfirmDeleteAll(count) => format!("Remove all {} tasks?", count),

            // === LIST PATCHES ===
            Message::RowInserted(position, row) => format!("+ {:>3}  {}", position, row),
            Message::RowRemoved(position) => format!("- {:>3}", position),
            Message::RowMoved(from, to) => format!("~ {:>3} -> {}", from, to),
            Message::RowChanged(position, row) => format!("* {:>3}  {}", position, row),

            // === SHELL ===
            Message::ShellWelcome => "Interactive list. Type 'help' for commands.".to_string(),
            Message::ShellHelp => [
                "add                 add a task",
                "edit <position>     edit the task at a position",
                "rm <position>       delete the task at a position",
                "undo                restore the last deleted task",
                "search <text>       follow titles containing text",
                "sort <all|high|low> follow the whole list in an order",
                "clear               delete every task",
                "ls                  print the whole list",
                "quit                leave",
            ]
            .join("\n"),
            Message::ShellUnknownCommand(command) => format!("Unknown command '{}', try 'help'", command),
            Message::ShellUsage(usage) => format!("Usage: {}", usage),
            Message::ShellGoodbye => "Bye".to_string(),
        };
        write!(f, "{}", s)
    }
}
