use crate::{
    libs::{config::Config, messages::Message, todo::SortOrder, view::View, view_model::ToDoViewModel},
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Ordering; defaults to the configured one
    #[arg(short, long, value_enum)]
    sort: Option<SortOrder>,
}

pub async fn cmd(view_model: &ToDoViewModel, args: ListArgs) -> Result<()> {
    let order = match args.sort {
        Some(order) => order,
        None => Config::read()?.list.unwrap_or_default().default_order,
    };

    let mut live = view_model.observe(order.into());
    let Some(snapshot) = live.next().await else {
        return Ok(());
    };
    view_model.check_if_database_empty(&snapshot);

    if *view_model.empty_database().borrow() {
        msg_info!(Message::NoToDos);
        return Ok(());
    }

    msg_print!(Message::ListHeader(order.label().to_string()));
    View::todos(&snapshot);
    Ok(())
}
