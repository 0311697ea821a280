//! Bucle del simulador de GPS
//!
//! Mantiene en memoria la última coordenada de cada rastreador, la desplaza
//! un poco en cada ciclo y la reporta a la API. El estado se pierde al reiniciar.

use std::collections::HashMap;
use std::time::Duration;

use rand::{rngs::StdRng, Rng, SeedableRng};
use tokio::sync::watch;
use tracing::{error, info, warn};

use super::client::{FleetApi, ReportAck, SimulatorError};
use super::config::{BASE_LATITUDE, BASE_LONGITUDE, SEED_SPREAD, STEP_SPREAD};
use crate::dto::position_dto::ReportPositionRequest;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

/// Resumen de un ciclo completo
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// Ningún vehículo con rastreador; no se reportó nada
    Idle,
    Reported { accepted: usize, rejected: usize },
}

pub struct PositionSimulator<A, R = StdRng> {
    api: A,
    rng: R,
    interval: Duration,
    positions: HashMap<i64, Coordinate>,
    /// Rastreadores en el orden en que aparecieron; define el orden de reporte
    discovery_order: Vec<i64>,
}

impl<A: FleetApi> PositionSimulator<A, StdRng> {
    pub fn new(api: A, interval: Duration) -> Self {
        Self::with_rng(api, StdRng::from_entropy(), interval)
    }
}

impl<A: FleetApi, R: Rng> PositionSimulator<A, R> {
    pub fn with_rng(api: A, rng: R, interval: Duration) -> Self {
        Self {
            api,
            rng,
            interval,
            positions: HashMap::new(),
            discovery_order: Vec::new(),
        }
    }

    pub fn positions(&self) -> &HashMap<i64, Coordinate> {
        &self.positions
    }

    fn jitter(&mut self, spread: f64) -> f64 {
        self.rng.gen_range(-spread..=spread)
    }

    /// Incorporar los rastreadores nuevos de la flota.
    ///
    /// Un fallo al listar vehículos solo se registra: el ciclo sigue con lo
    /// que ya se conocía. Devuelve cuántos rastreadores se agregaron.
    pub async fn refresh_fleet(&mut self) -> usize {
        let vehicles = match self.api.fetch_vehicles().await {
            Ok(vehicles) => vehicles,
            Err(SimulatorError::UnexpectedStatus(status)) => {
                warn!("⚠️ Erro ao buscar veículos: {}", status);
                return 0;
            }
            Err(e) => {
                warn!(
                    "⚠️ Não foi possível conectar ao servidor para buscar veículos: {}",
                    e
                );
                return 0;
            }
        };

        let mut added = 0;
        for vehicle in vehicles {
            // Un rastreador 0 se trata como ausente
            let id_rastreador = match vehicle.id_rastreador {
                Some(id) if id != 0 => id,
                _ => continue,
            };
            if self.positions.contains_key(&id_rastreador) {
                continue;
            }

            let seed = Coordinate {
                lat: BASE_LATITUDE + self.jitter(SEED_SPREAD),
                lon: BASE_LONGITUDE + self.jitter(SEED_SPREAD),
            };
            self.positions.insert(id_rastreador, seed);
            self.discovery_order.push(id_rastreador);
            added += 1;

            info!(
                "🚗 Novo carro [ID Rastreador: {}] (Modelo: {}) adicionado ao simulador.",
                id_rastreador,
                vehicle.modelo.as_deref().unwrap_or("?")
            );
        }

        added
    }

    /// Un ciclo: refrescar la flota, mover cada vehículo y reportarlo.
    ///
    /// Un error de conexión en un reporte corta el resto del ciclo.
    pub async fn run_cycle(&mut self) -> Result<CycleOutcome, SimulatorError> {
        self.refresh_fleet().await;

        if self.positions.is_empty() {
            return Ok(CycleOutcome::Idle);
        }

        info!("--- Atualizando {} carro(s) ---", self.positions.len());

        let trackers = self.discovery_order.clone();
        let (mut accepted, mut rejected) = (0, 0);

        for id_rastreador in trackers {
            let d_lat = self.jitter(STEP_SPREAD);
            let d_lon = self.jitter(STEP_SPREAD);

            let Some(position) = self.positions.get_mut(&id_rastreador) else {
                continue;
            };
            position.lat += d_lat;
            position.lon += d_lon;

            let report = ReportPositionRequest {
                id_rastreador,
                lat: position.lat,
                lon: position.lon,
            };

            match self.api.report_position(&report).await? {
                ReportAck::Accepted => {
                    accepted += 1;
                    info!(
                        "  [ID: {:03}] Posição enviada: Lat={:.6}, Lon={:.6}",
                        id_rastreador, report.lat, report.lon
                    );
                }
                ReportAck::Rejected { status, body } => {
                    rejected += 1;
                    warn!("  [ID: {:03}] Erro: {} - {}", id_rastreador, status, body);
                }
            }
        }

        Ok(CycleOutcome::Reported { accepted, rejected })
    }

    /// Repetir ciclos hasta que `shutdown` cambie.
    ///
    /// La señal se atiende entre ciclos, nunca en medio de un reporte.
    pub async fn run(&mut self, mut shutdown: watch::Receiver<bool>) {
        let secs = self.interval.as_secs();

        loop {
            if *shutdown.borrow() {
                break;
            }

            match self.run_cycle().await {
                Ok(CycleOutcome::Idle) => info!(
                    "Nenhum carro com rastreador encontrado. Verificando novamente em {}s...",
                    secs
                ),
                Ok(CycleOutcome::Reported { .. }) => {
                    info!("--- Próxima atualização em {} segundos ---", secs)
                }
                Err(e) => error!(
                    "❌ Conexão com API (POST) falhou: {}. Tentando novamente em {}s...",
                    e, secs
                ),
            }

            tokio::select! {
                _ = tokio::time::sleep(self.interval) => {}
                _ = shutdown.changed() => break,
            }
        }

        info!("🛑 Simulador interrompido.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulator::client::FleetVehicle;
    use async_trait::async_trait;
    use std::collections::HashSet;
    use std::sync::Mutex;

    #[derive(Default)]
    struct FakeFleet {
        vehicles: Mutex<Vec<FleetVehicle>>,
        discovery_error: Mutex<Option<SimulatorError>>,
        rejected_trackers: HashSet<i64>,
        /// Los reportes a partir de este índice fallan por conexión
        fail_from_report: Option<usize>,
        reports: Mutex<Vec<ReportPositionRequest>>,
        attempts: Mutex<usize>,
    }

    impl FakeFleet {
        fn with_trackers(ids: &[Option<i64>]) -> Self {
            let vehicles = ids
                .iter()
                .map(|id| FleetVehicle {
                    id_rastreador: *id,
                    modelo: Some("Onix".to_string()),
                })
                .collect();
            Self {
                vehicles: Mutex::new(vehicles),
                ..Self::default()
            }
        }

        fn reports(&self) -> Vec<ReportPositionRequest> {
            self.reports.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl<'a> FleetApi for &'a FakeFleet {
        async fn fetch_vehicles(&self) -> Result<Vec<FleetVehicle>, SimulatorError> {
            if let Some(e) = self.discovery_error.lock().unwrap().clone() {
                return Err(e);
            }
            Ok(self.vehicles.lock().unwrap().clone())
        }

        async fn report_position(
            &self,
            report: &ReportPositionRequest,
        ) -> Result<ReportAck, SimulatorError> {
            let attempt = {
                let mut attempts = self.attempts.lock().unwrap();
                *attempts += 1;
                *attempts - 1
            };
            if self.fail_from_report.is_some_and(|n| attempt >= n) {
                return Err(SimulatorError::Connection("connection refused".into()));
            }

            self.reports.lock().unwrap().push(report.clone());
            if self.rejected_trackers.contains(&report.id_rastreador) {
                return Ok(ReportAck::Rejected {
                    status: 500,
                    body: r#"{"erro":"falha"}"#.to_string(),
                });
            }
            Ok(ReportAck::Accepted)
        }
    }

    fn simulator(fleet: &FakeFleet) -> PositionSimulator<&FakeFleet> {
        PositionSimulator::with_rng(fleet, StdRng::seed_from_u64(7), Duration::from_millis(10))
    }

    #[tokio::test]
    async fn test_new_tracker_is_seeded_near_base_and_then_moves_a_little() {
        let fleet = FakeFleet::with_trackers(&[Some(7)]);
        let mut sim = simulator(&fleet);

        assert_eq!(sim.refresh_fleet().await, 1);
        let seed = sim.positions()[&7];
        assert!((seed.lat - BASE_LATITUDE).abs() <= SEED_SPREAD);
        assert!((seed.lon - BASE_LONGITUDE).abs() <= SEED_SPREAD);

        let outcome = sim.run_cycle().await.unwrap();
        assert_eq!(outcome, CycleOutcome::Reported { accepted: 1, rejected: 0 });

        let moved = sim.positions()[&7];
        assert!((moved.lat - seed.lat).abs() <= STEP_SPREAD);
        assert!((moved.lon - seed.lon).abs() <= STEP_SPREAD);

        let reports = fleet.reports();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].id_rastreador, 7);
        assert_eq!((reports[0].lat, reports[0].lon), (moved.lat, moved.lon));
    }

    #[tokio::test]
    async fn test_known_trackers_are_not_reseeded() {
        let fleet = FakeFleet::with_trackers(&[Some(7)]);
        let mut sim = simulator(&fleet);

        sim.run_cycle().await.unwrap();
        let after_first = sim.positions()[&7];

        assert_eq!(sim.refresh_fleet().await, 0);
        assert_eq!(sim.positions()[&7], after_first);
    }

    #[tokio::test]
    async fn test_vehicles_without_tracker_are_ignored() {
        let fleet = FakeFleet::with_trackers(&[None, Some(0)]);
        let mut sim = simulator(&fleet);

        assert_eq!(sim.run_cycle().await.unwrap(), CycleOutcome::Idle);
        assert!(fleet.reports().is_empty());
    }

    #[tokio::test]
    async fn test_discovery_failure_keeps_known_trackers() {
        let fleet = FakeFleet::with_trackers(&[Some(1), Some(2)]);
        let mut sim = simulator(&fleet);
        sim.refresh_fleet().await;

        *fleet.discovery_error.lock().unwrap() = Some(SimulatorError::UnexpectedStatus(503));
        let outcome = sim.run_cycle().await.unwrap();

        assert_eq!(outcome, CycleOutcome::Reported { accepted: 2, rejected: 0 });
    }

    #[tokio::test]
    async fn test_discovery_connection_failure_with_empty_map_is_idle() {
        let fleet = FakeFleet::default();
        *fleet.discovery_error.lock().unwrap() =
            Some(SimulatorError::Connection("connection refused".into()));
        let mut sim = simulator(&fleet);

        assert_eq!(sim.run_cycle().await.unwrap(), CycleOutcome::Idle);
    }

    #[tokio::test]
    async fn test_rejected_report_does_not_stop_the_cycle() {
        let fleet = FakeFleet {
            rejected_trackers: HashSet::from([1]),
            ..FakeFleet::with_trackers(&[Some(1), Some(2), Some(3)])
        };
        let mut sim = simulator(&fleet);

        let outcome = sim.run_cycle().await.unwrap();

        assert_eq!(outcome, CycleOutcome::Reported { accepted: 2, rejected: 1 });
        let ids: Vec<i64> = fleet.reports().iter().map(|r| r.id_rastreador).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_reports_follow_discovery_order() {
        let fleet = FakeFleet::with_trackers(&[Some(30), Some(4)]);
        let mut sim = simulator(&fleet);
        sim.refresh_fleet().await;

        fleet.vehicles.lock().unwrap().push(FleetVehicle {
            id_rastreador: Some(1),
            modelo: Some("Gol".to_string()),
        });
        sim.run_cycle().await.unwrap();

        let ids: Vec<i64> = fleet.reports().iter().map(|r| r.id_rastreador).collect();
        assert_eq!(ids, vec![30, 4, 1]);
    }

    #[tokio::test]
    async fn test_connection_failure_aborts_remaining_reports() {
        let fleet = FakeFleet {
            fail_from_report: Some(1),
            ..FakeFleet::with_trackers(&[Some(1), Some(2), Some(3)])
        };
        let mut sim = simulator(&fleet);

        let err = sim.run_cycle().await.unwrap_err();

        assert!(matches!(err, SimulatorError::Connection(_)));
        assert_eq!(fleet.reports().len(), 1);
        assert_eq!(*fleet.attempts.lock().unwrap(), 2);
    }

    #[tokio::test]
    async fn test_run_stops_on_shutdown() {
        let fleet = FakeFleet::with_trackers(&[Some(7)]);
        let mut sim = simulator(&fleet);
        let (tx, rx) = watch::channel(false);

        let stopper = async {
            tokio::time::sleep(Duration::from_millis(35)).await;
            tx.send(true).unwrap();
        };
        tokio::join!(sim.run(rx), stopper);

        // Al menos dos ciclos antes de la señal
        assert!(fleet.reports().len() >= 2);
    }
}
