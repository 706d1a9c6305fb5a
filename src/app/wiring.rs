use anyhow::{Context, Result};

use crate::{context, storage};

pub fn init_storage(ctx: &context::Context) -> Result<storage::SqliteStorage> {
    let sqlite = storage::SqliteStorage::new(&ctx.config.database);
    sqlite
        .init()
        .with_context(|| format!("opening database {}", ctx.config.database.display()))?;
    Ok(sqlite)
}
