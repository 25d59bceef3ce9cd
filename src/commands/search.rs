use crate::{
    libs::{messages::Message, view::View, view_model::ToDoViewModel},
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Text the title must contain; matched literally and case-sensitively
    query: String,
}

pub async fn cmd(view_model: &ToDoViewModel, args: SearchArgs) -> Result<()> {
    let mut live = view_model.search_database(&args.query);
    let Some(snapshot) = live.next().await else {
        return Ok(());
    };

    if snapshot.is_empty() {
        msg_info!(Message::NoSearchResults(args.query));
        return Ok(());
    }

    msg_print!(Message::SearchHeader(args.query));
    View::todos(&snapshot);
    Ok(())
}
