use std::io;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use stockroom_console::Console;
use stockroom_db::{DbConfig, ProductGateway};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never interleave with the menu.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let db_config = DbConfig::from_env().context("invalid database configuration")?;
    let store = stockroom_db::connect(&db_config)
        .await
        .context("failed to connect to database")?;
    let gateway = ProductGateway::new(store);

    // Single-user and strictly sequential: each prompt blocks the runtime
    // thread until a line arrives, and nothing else is scheduled meanwhile.
    let stdin = io::stdin();
    let mut console = Console::new(gateway.clone(), stdin.lock(), io::stdout());
    let result = console.run().await.context("console I/O failed");

    gateway.close().await;
    result
}
