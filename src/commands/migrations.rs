use crate::{
    db::{
        db::Db,
        migrations::{get_db_version, MigrationManager},
    },
    libs::{messages::Message, priority::PRIORITY_ENCODING_VERSION},
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct MigrationsArgs {
    /// List applied migrations
    #[arg(long)]
    history: bool,
}

pub fn cmd(args: MigrationsArgs) -> Result<()> {
    let db = Db::new()?;
    let manager = MigrationManager::new();

    msg_info!(Message::DbVersion(
        get_db_version(&db.conn)?,
        manager.latest_version(),
        PRIORITY_ENCODING_VERSION
    ));

    if args.history {
        for (version, name, applied_at) in manager.get_migration_history(&db.conn)? {
            msg_print!(format!("v{:<3} {:<24} {}", version, name, applied_at));
        }
    }

    Ok(())
}
