mod wiring;

use crate::{cli, context, rest, storage};
use anyhow::Result;
use tokio_util::sync::CancellationToken;

pub struct App {
    pub ctx: context::Context,
    pub storage: storage::SqliteStorage,
}

impl App {
    pub fn from_cli() -> Result<(Self, cli::Cli)> {
        let cli = crate::cli::parse();
        let ctx = context::Context::from_cli(&cli);

        crate::tracing::init(ctx.config.log_file.as_deref());
        log::info!("🚀 Starting climate-api");
        log::info!("📂 Database: {}", ctx.config.database.display());
        log::info!(
            "📅 Windows: year={}d start-offset={}d end-offset={}d",
            ctx.config.windows.year_days,
            ctx.config.windows.start_offset_days,
            ctx.config.windows.end_offset_days
        );

        let storage = wiring::init_storage(&ctx)?;

        Ok((Self { ctx, storage }, cli))
    }
}

pub async fn run_server(app: App) -> Result<()> {
    if let Some(path) = app.ctx.config.log_file.as_deref() {
        log::info!("📝 Log file: {}", path.display());
    }

    let shutdown = CancellationToken::new();

    let api_addr = app.ctx.config.api_listen;
    let windows = app.ctx.config.windows;
    let rest_shutdown = shutdown.clone();

    let mut rest_handle =
        tokio::spawn(async move { rest::serve(api_addr, app.storage, windows, rest_shutdown).await });

    let rest_result = tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            log::info!("🧨 Ctrl-C received, shutting down");
            shutdown.cancel();
            rest_handle.await
        }
        res = &mut rest_handle => res,
    };

    match rest_result {
        Ok(Ok(())) => {}
        Ok(Err(e)) => {
            log::error!("REST server error: {}", e);
            return Err(e);
        }
        Err(e) => {
            log::error!("REST task failed: {}", e);
            return Err(e.into());
        }
    }

    log::info!("✅ Shutdown complete");
    Ok(())
}

pub async fn run() -> Result<()> {
    let (app, cli) = App::from_cli()?;

    if let Some(cmd) = &cli.cmd {
        // one-shot command mode
        cmd.run(&app.ctx, &app.storage)?;
        return Ok(());
    }

    run_server(app).await
}
