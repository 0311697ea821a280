use serde::Deserialize;

// Request para crear un vehículo
#[derive(Debug, Deserialize)]
pub struct CreateVehicleRequest {
    pub modelo: String,
    pub placa: String,
    pub capacidade: Option<i64>,
    pub status: String,
    pub id_rastreador: Option<i64>,
    pub descricao: Option<String>,
}

// Request para cambiar el estado; sin `status` el UPDATE viola NOT NULL
#[derive(Debug, Deserialize)]
pub struct UpdateVehicleStatusRequest {
    pub status: Option<String>,
}

// Filtros del listado
#[derive(Debug, Default)]
pub struct VehicleFilters {
    pub status: Option<String>,
}

impl VehicleFilters {
    /// Construir desde los pares del query string; un parámetro repetido
    /// toma su primer valor
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let status = pairs
            .into_iter()
            .find(|(key, _)| key == "status")
            .map(|(_, value)| value);
        Self { status }
    }

    /// Un filtro vacío (`?status=`) equivale a no filtrar
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref().filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_status_filter_is_ignored() {
        let filters = VehicleFilters {
            status: Some(String::new()),
        };
        assert_eq!(filters.status(), None);
        assert_eq!(VehicleFilters::default().status(), None);

        let filters = VehicleFilters {
            status: Some("Disponível".to_string()),
        };
        assert_eq!(filters.status(), Some("Disponível"));
    }

    #[test]
    fn test_repeated_status_takes_first_value() {
        let filters = VehicleFilters::from_pairs(vec![
            ("modelo".to_string(), "Onix".to_string()),
            ("status".to_string(), "Alugado".to_string()),
            ("status".to_string(), "Disponível".to_string()),
        ]);
        assert_eq!(filters.status(), Some("Alugado"));

        assert_eq!(VehicleFilters::from_pairs(Vec::new()).status(), None);
    }

    #[test]
    fn test_optional_fields_default_to_none() {
        let request: CreateVehicleRequest = serde_json::from_str(
            r#"{"modelo": "Onix", "placa": "ABC123", "status": "Disponível"}"#,
        )
        .unwrap();
        assert_eq!(request.capacidade, None);
        assert_eq!(request.id_rastreador, None);
        assert_eq!(request.descricao, None);
    }
}
