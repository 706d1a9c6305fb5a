mod app;
mod cli;
mod climate;
mod commands;
mod configuration;
mod context;
mod rest;
mod storage;
mod tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    app::run().await
}
