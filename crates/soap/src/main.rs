use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use stockroom_db::{DbConfig, ProductGateway};
use stockroom_soap::config::{SoapConfig, SERVICE_PATH};
use stockroom_soap::router::build_soap_router;
use stockroom_soap::state::SoapState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stockroom_soap=debug,stockroom_db=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = SoapConfig::from_env().unwrap_or_else(|e| {
        tracing::error!(error = %e, "Invalid SOAP server configuration");
        std::process::exit(1);
    });

    let db_config = DbConfig::from_env().unwrap_or_else(|e| {
        tracing::error!(error = %e, "Invalid database configuration");
        std::process::exit(1);
    });

    let store = stockroom_db::connect(&db_config).await.unwrap_or_else(|e| {
        tracing::error!(error = %e, "Failed to connect to database");
        std::process::exit(1);
    });
    let gateway = ProductGateway::new(store);

    if let Err(e) = gateway.probe().await {
        tracing::error!(error = %e, "Database connection failed during startup");
        std::process::exit(1);
    }
    tracing::info!("Database connection verified");

    let state = SoapState {
        gateway: gateway.clone(),
        config: Arc::new(config.clone()),
    };
    let app = build_soap_router(state, &config);

    let ip = config.host.parse().unwrap_or_else(|e| {
        tracing::error!(host = %config.host, error = %e, "Invalid SOAP_HOST address");
        std::process::exit(1);
    });
    let addr = SocketAddr::new(ip, config.port);
    tracing::info!(
        %addr,
        wsdl = %format!("{}?wsdl", config.endpoint_url()),
        path = SERVICE_PATH,
        "Starting SOAP server"
    );

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| {
            tracing::error!(%addr, error = %e, "Failed to bind to address");
            std::process::exit(1);
        });

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(error = %e, "Server error");
    }

    gateway.close().await;
    tracing::info!("Database connections closed, shutdown complete");
}

/// Resolve on Ctrl-C (or SIGTERM on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received SIGINT, shutting down"),
        () = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
