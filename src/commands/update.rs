use super::add::prompt_todo;
use crate::{
    db::todos::StoreError,
    libs::{
        messages::Message,
        priority::Priority,
        todo::{verify_data_from_user, ToDo},
        view_model::ToDoViewModel,
    },
    msg_error, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// Task id
    id: i32,

    /// New title
    #[arg(short, long)]
    title: Option<String>,

    /// New description
    #[arg(short, long)]
    description: Option<String>,

    /// New priority
    #[arg(short, long)]
    priority: Option<Priority>,
}

impl UpdateArgs {
    fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.priority.is_none()
    }
}

pub async fn cmd(view_model: &ToDoViewModel, args: UpdateArgs) -> Result<()> {
    let Some(current) = view_model.find(args.id).await? else {
        msg_error!(Message::ToDoNotFound(args.id));
        return Ok(());
    };

    // Without flags the current values are offered for editing.
    let todo = if args.is_empty() {
        prompt_todo(Some(&current))?
    } else {
        ToDo {
            id: current.id,
            title: args.title.unwrap_or(current.title),
            priority: args.priority.unwrap_or(current.priority),
            description: args.description.unwrap_or(current.description),
        }
    };

    if !verify_data_from_user(&todo.title, &todo.description) {
        msg_error!(Message::FillAllFields);
        return Ok(());
    }

    match view_model.update_data(todo).await {
        Ok(()) => msg_success!(Message::ToDoUpdated(args.id)),
        Err(StoreError::NotFound(id)) => msg_error!(Message::ToDoNotFound(id)),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}
