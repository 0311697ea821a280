use anyhow::Result;
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info};

use locadora_backend::config::{DatabaseConfig, EnvironmentConfig};
use locadora_backend::database::DatabaseConnection;
use locadora_backend::routes::create_router;
use locadora_backend::state::AppState;
use locadora_backend::tracer;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();
    tracer::init();

    info!("🚙 Locadora de Veículos - API");
    info!("============================");

    let config = EnvironmentConfig::from_env()?;
    let addr = config.socket_addr()?;

    let db = DatabaseConnection::new(&DatabaseConfig::from(&config)).await?;
    // En un archivo ya inicializado esto falla y solo se registra
    db.ensure_schema().await;

    let app = create_router(AppState::new(db.pool().clone()));

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponíveis:");
    info!("   GET    /health");
    info!("   GET    /api/veiculos?status=");
    info!("   POST   /api/veiculos");
    info!("   DELETE /api/veiculos/:id");
    info!("   PUT    /api/veiculos/:id/status");
    info!("   GET    /api/clientes");
    info!("   POST   /api/clientes");
    info!("   DELETE /api/clientes/:id");
    info!("   GET    /api/locacoes");
    info!("   POST   /api/locacoes");
    info!("   DELETE /api/locacoes/:id");
    info!("   GET    /api/rastreador/:id");
    info!("   POST   /api/rastreador");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Erro do servidor: {}", e);
        return Err(e.into());
    }

    db.pool().close().await;
    info!("👋 Servidor encerrado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ Não foi possível instalar o handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("❌ Não foi possível instalar o handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Sinal Ctrl+C recebido, encerrando servidor...");
        },
        _ = terminate => {
            info!("🛑 Sinal de término recebido, encerrando servidor...");
        },
    }
}
