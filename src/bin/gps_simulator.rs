use anyhow::Result;
use dotenvy::dotenv;
use tokio::signal;
use tokio::sync::watch;
use tracing::{error, info};

use locadora_backend::simulator::{HttpFleetClient, PositionSimulator, SimulatorConfig};
use locadora_backend::tracer;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenv().ok();
    tracer::init();

    let config = SimulatorConfig::from_env()?;
    let client = HttpFleetClient::new(&config)?;

    info!("--- Simulador de GPS para TODOS os carros ---");
    info!("API: {}", config.api_url);
    info!("Pressione Ctrl+C para parar.");

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        interrupt_signal().await;
        let _ = shutdown_tx.send(true);
    });

    let mut simulator = PositionSimulator::new(client, config.interval);
    simulator.run(shutdown_rx).await;

    Ok(())
}

/// Ctrl+C o SIGTERM; si un handler no se puede instalar, esa rama nunca termina
async fn interrupt_signal() {
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
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
