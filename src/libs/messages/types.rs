//! Every piece of user-facing text the application prints, as data.
//!
//! Variants carry the values interpolated into the text; the wording itself
//! lives in `display.rs`.

#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION ===
    ConfigModuleDatabase,
    ConfigModuleList,
    ConfigSaved,
    ConfigReset,
    PromptDbFileName,
    PromptDefaultOrder,
    PromptConfirmDeleteAll,

    // === MIGRATIONS ===
    MigrationsFound(usize),
    RunningMigration(u32, String),
    MigrationCompleted(u32),
    MigrationFailed(u32, String),
    AllMigrationsCompleted,
    NothingToRollback,
    RollingBack(u32, u32),
    RollbackCompleted(u32),
    DbVersion(u32, u32, u32),

    // === TASKS ===
    ToDoAdded(i32),
    ToDoUpdated(i32),
    ToDoDeleted(String),
    ToDoRestored(String),
    AllToDosDeleted(usize),
    ToDoNotFound(i32),
    PositionNotFound(usize),
    FillAllFields,
    NoToDos,
    NoSearchResults(String),
    ListHeader(String),
    SearchHeader(String),
    DeleteAllCancelled,
    NothingToUndo,
    UndoHint,
    StoreFailed(String),

    // === PROMPTS ===
    PromptTitle,
    PromptDescription,
    PromptPriority,
    PromptShellCommand,
    ConfirmDeleteAll(usize),

    // === LIST PATCHES ===
    RowInserted(usize, String),
    RowRemoved(usize),
    RowMoved(usize, usize),
    RowChanged(usize, String),

    // === SHELL ===
    ShellWelcome,
    ShellHelp,
    ShellUnknownCommand(String),
    ShellUsage(String),
    ShellGoodbye,
}
