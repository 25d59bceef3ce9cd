use crate::{
    libs::{
        messages::Message,
        priority::{parse_priority, Priority},
        todo::{verify_data_from_user, ToDo},
        view_model::ToDoViewModel,
    },
    msg_error, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input, Select};

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task title; prompts for every field when omitted
    title: Option<String>,

    /// Task description
    description: Option<String>,

    /// high, medium or low; anything else means low
    #[arg(short, long, default_value = "low")]
    priority: String,
}

pub async fn cmd(view_model: &ToDoViewModel, args: AddArgs) -> Result<()> {
    let todo = match args.title {
        Some(title) => ToDo::new(&title, parse_priority(&args.priority), args.description.as_deref().unwrap_or_default()),
        None => prompt_todo(None)?,
    };

    if !verify_data_from_user(&todo.title, &todo.description) {
        msg_error!(Message::FillAllFields);
        return Ok(());
    }

    let id = view_model.insert_data(todo).await?;
    msg_success!(Message::ToDoAdded(id));
    Ok(())
}

/// Asks for title, description and priority, offering `current` as defaults.
///
/// The result keeps the identity of `current`, or none for a new task.
pub fn prompt_todo(current: Option<&ToDo>) -> Result<ToDo> {
    let theme = ColorfulTheme::default();

    let mut title = Input::<String>::with_theme(&theme).with_prompt(Message::PromptTitle.to_string()).allow_empty(true);
    let mut description = Input::<String>::with_theme(&theme)
        .with_prompt(Message::PromptDescription.to_string())
        .allow_empty(true);
    if let Some(todo) = current {
        title = title.with_initial_text(todo.title.clone());
        description = description.with_initial_text(todo.description.clone());
    }
    let title = title.interact_text()?;
    let description = description.interact_text()?;

    let selected = Select::with_theme(&theme)
        .with_prompt(Message::PromptPriority.to_string())
        .items(&Priority::ALL.iter().map(|p| p.label()).collect::<Vec<_>>())
        .default(current.map(|todo| todo.priority.position()).unwrap_or(Priority::Low.position()))
        .interact()?;
    let priority = Priority::from_position(selected).unwrap_or(Priority::Low);

    let todo = ToDo::new(&title, priority, &description);
    Ok(match current {
        Some(existing) => todo.with_id(existing.id),
        None => todo,
    })
}
