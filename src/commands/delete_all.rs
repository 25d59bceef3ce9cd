use crate::{
    libs::{config::Config, messages::Message, view_model::ToDoViewModel},
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteAllArgs {
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub async fn cmd(view_model: &ToDoViewModel, args: DeleteAllArgs) -> Result<()> {
    let confirm = Config::read()?.list.unwrap_or_default().confirm_delete_all;

    if confirm && !args.yes && !confirm_delete_all(view_model).await? {
        msg_info!(Message::DeleteAllCancelled);
        return Ok(());
    }

    let removed = view_model.delete_all().await?;
    msg_success!(Message::AllToDosDeleted(removed));
    Ok(())
}

/// Asks before wiping the table, naming how many tasks would go.
pub async fn confirm_delete_all(view_model: &ToDoViewModel) -> Result<bool> {
    let mut live = view_model.get_all_data();
    let count = live.next().await.map(|snapshot| snapshot.len()).unwrap_or(0);

    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmDeleteAll(count).to_string())
        .default(false)
        .interact()?)
}
