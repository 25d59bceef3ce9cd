//! Interactive list screen.
//!
//! The shell follows one live query at a time. After the first full table it
//! never redraws: each new snapshot is diffed against the rows on screen and
//! only the resulting edits are printed. Deleting a row removes it from the
//! screen at once and keeps it for `undo`.

use super::{add::prompt_todo, delete_all::confirm_delete_all};
use crate::{
    db::todos::StoreError,
    libs::{
        adapter::ListAdapter,
        config::Config,
        live::LiveQuery,
        messages::Message,
        todo::{verify_data_from_user, SortOrder, ToDo, ToDoQuery},
        view::{PatchPrinter, View},
        view_model::{ToDoViewModel, UndoDelete},
    },
    msg_error, msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use clap::ValueEnum;
use dialoguer::{theme::ColorfulTheme, Input};

struct Screen<'a> {
    view_model: &'a ToDoViewModel,
    live: LiveQuery,
    adapter: ListAdapter<ToDo>,
    printer: PatchPrinter,
    last_deleted: Option<UndoDelete>,
}

pub async fn cmd(view_model: &ToDoViewModel) -> Result<()> {
    let order = Config::read()?.list.unwrap_or_default().default_order;
    let mut screen = Screen {
        view_model,
        live: view_model.observe(order.into()),
        adapter: ListAdapter::new(),
        printer: PatchPrinter::default(),
        last_deleted: None,
    };

    msg_print!(Message::ShellWelcome);
    screen.load().await;
    screen.redraw();

    loop {
        let line: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptShellCommand.to_string())
            .allow_empty(true)
            .interact_text()?;
        let line = line.trim();
        let (command, rest) = line.split_once(' ').map(|(c, r)| (c, r.trim())).unwrap_or((line, ""));

        match command {
            "" => {}
            "quit" | "exit" | "q" => break,
            "help" | "?" => msg_print!(Message::ShellHelp),
            "ls" => screen.redraw(),
            "add" => screen.add().await?,
            "edit" => match parse_position(rest) {
                Some(position) => screen.edit(position).await?,
                None => msg_warning!(Message::ShellUsage("edit <position>".to_string())),
            },
            "rm" => match parse_position(rest) {
                Some(position) => screen.remove(position).await?,
                None => msg_warning!(Message::ShellUsage("rm <position>".to_string())),
            },
            "undo" => screen.undo().await?,
            "search" if !rest.is_empty() => screen.follow(ToDoQuery::Search(rest.to_string())).await,
            "search" => msg_warning!(Message::ShellUsage("search <text>".to_string())),
            "sort" => match SortOrder::from_str(rest, true) {
                Ok(order) => screen.follow(order.into()).await,
                Err(_) => msg_warning!(Message::ShellUsage("sort <all|high|low>".to_string())),
            },
            "clear" => screen.clear().await?,
            other => msg_warning!(Message::ShellUnknownCommand(other.to_string())),
        }

        screen.sync();
    }

    msg_print!(Message::ShellGoodbye);
    Ok(())
}

fn parse_position(input: &str) -> Option<usize> {
    input.parse().ok()
}

impl Screen<'_> {
    /// Waits for the first snapshot of the current query and takes it as
    /// the screen's content without printing edits.
    async fn load(&mut self) {
        if let Some(snapshot) = self.live.next().await {
            self.view_model.check_if_database_empty(&snapshot);
            self.adapter.reset(snapshot.to_vec());
        }
    }

    /// Applies a snapshot that has already arrived, if any.
    ///
    /// Mutation handles resolve after the new snapshots are published, so
    /// awaiting a handle and then calling this shows the mutation's effect.
    fn sync(&mut self) {
        if let Some(snapshot) = self.live.try_next() {
            self.apply(snapshot.to_vec());
        }
    }

    fn apply(&mut self, data: Vec<ToDo>) {
        self.view_model.check_if_database_empty(&data);
        self.adapter.set_data(data, &mut self.printer);
    }

    fn redraw(&self) {
        if *self.view_model.empty_database().borrow() {
            msg_info!(Message::NoToDos);
        } else {
            View::todos(self.adapter.data_list());
        }
    }

    /// Switches to another query and redraws from its first snapshot.
    async fn follow(&mut self, query: ToDoQuery) {
        match &query {
            ToDoQuery::Search(text) => msg_print!(Message::SearchHeader(text.clone())),
            other => msg_print!(Message::ListHeader(order_label(other).to_string())),
        }
        // Dropping the old subscription stops its deliveries.
        self.live = self.view_model.observe(query);
        self.load().await;
        self.redraw();
    }

    /// Re-reads the current query after a failed mutation, so the screen
    /// drops any local change the store did not take.
    async fn resync(&mut self) {
        self.live = self.view_model.observe(self.live.query().clone());
        if let Some(snapshot) = self.live.next().await {
            self.apply(snapshot.to_vec());
        }
    }

    async fn add(&mut self) -> Result<()> {
        let todo = prompt_todo(None)?;
        if !verify_data_from_user(&todo.title, &todo.description) {
            msg_error!(Message::FillAllFields);
            return Ok(());
        }

        match self.view_model.insert_data(todo).await {
            Ok(id) => msg_success!(Message::ToDoAdded(id)),
            Err(e) => self.report(e).await?,
        }
        Ok(())
    }

    async fn edit(&mut self, position: usize) -> Result<()> {
        let Some(current) = self.adapter.get(position).cloned() else {
            msg_warning!(Message::PositionNotFound(position));
            return Ok(());
        };

        let todo = prompt_todo(Some(&current))?;
        if !verify_data_from_user(&todo.title, &todo.description) {
            msg_error!(Message::FillAllFields);
            return Ok(());
        }

        match self.view_model.update_data(todo).await {
            Ok(()) => msg_success!(Message::ToDoUpdated(current.id)),
            Err(e) => self.report(e).await?,
        }
        Ok(())
    }

    async fn remove(&mut self, position: usize) -> Result<()> {
        let Some(todo) = self.adapter.remove_at(position, &mut self.printer) else {
            msg_warning!(Message::PositionNotFound(position));
            return Ok(());
        };

        let title = todo.title.clone();
        let (handle, undo) = self.view_model.delete_with_undo(todo);
        match handle.await {
            Ok(()) => {
                self.last_deleted = Some(undo);
                msg_success!(Message::ToDoDeleted(title));
                msg_info!(Message::UndoHint);
            }
            Err(e) => self.report(e).await?,
        }
        Ok(())
    }

    async fn undo(&mut self) -> Result<()> {
        let Some(undo) = self.last_deleted.take() else {
            msg_info!(Message::NothingToUndo);
            return Ok(());
        };

        let title = undo.item().title.clone();
        match undo.undo(self.view_model).await {
            Ok(_) => msg_success!(Message::ToDoRestored(title)),
            Err(e) => self.report(e).await?,
        }
        Ok(())
    }

    async fn clear(&mut self) -> Result<()> {
        let confirm = Config::read()?.list.unwrap_or_default().confirm_delete_all;
        if confirm && !confirm_delete_all(self.view_model).await? {
            msg_info!(Message::DeleteAllCancelled);
            return Ok(());
        }

        match self.view_model.delete_all().await {
            Ok(removed) => {
                self.last_deleted = None;
                msg_success!(Message::AllToDosDeleted(removed));
            }
            Err(e) => self.report(e).await?,
        }
        Ok(())
    }

    /// Shows a store failure and puts the screen back in line with the store.
    /// A stopped executor can no longer serve the screen and ends the shell.
    async fn report(&mut self, error: StoreError) -> Result<()> {
        if let StoreError::ExecutorClosed = error {
            return Err(error.into());
        }

        msg_error!(Message::StoreFailed(error.to_string()));
        self.resync().await;
        Ok(())
    }
}

fn order_label(query: &ToDoQuery) -> &'static str {
    match query {
        ToDoQuery::HighPriorityFirst => SortOrder::High.label(),
        ToDoQuery::LowPriorityFirst => SortOrder::Low.label(),
        _ => SortOrder::All.label(),
    }
}
