use crate::{
    db::todos::StoreError,
    libs::{messages::Message, view_model::ToDoViewModel},
    msg_error, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Task id
    id: i32,
}

pub async fn cmd(view_model: &ToDoViewModel, args: DeleteArgs) -> Result<()> {
    let Some(todo) = view_model.find(args.id).await? else {
        msg_error!(Message::ToDoNotFound(args.id));
        return Ok(());
    };

    let title = todo.title.clone();
    match view_model.delete_data(todo).await {
        Ok(()) => msg_success!(Message::ToDoDeleted(title)),
        Err(StoreError::NotFound(id)) => msg_error!(Message::ToDoNotFound(id)),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}
