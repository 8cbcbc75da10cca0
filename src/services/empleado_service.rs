// ============================================================================
// EMPLEADO SERVICE - CRUD REST de empleados
// ============================================================================

use crate::models::{Empleado, EmpleadoId};
use crate::services::api_client::ApiClient;
use crate::services::error::{handle_error, ApiError};

#[derive(Clone, Debug, Default)]
pub struct EmpleadoService {
    api: ApiClient,
}

impl EmpleadoService {
    pub fn new() -> Self {
        Self {
            api: ApiClient::new(),
        }
    }

    pub fn with_client(api: ApiClient) -> Self {
        Self { api }
    }

    /// Listar empleados
    pub async fn get_empleados(&self) -> Result<Vec<Empleado>, ApiError> {
        let url = self.api.resource_url(None);
        let empleados: Vec<Empleado> = self.api.get_json(&url).await.map_err(handle_error)?;
        log::info!("📋 [EMPLEADOS] {} empleados recibidos", empleados.len());
        Ok(empleados)
    }

    /// Crear empleado
    pub async fn save_empleado(&self, data: &Empleado) -> Result<Empleado, ApiError> {
        let url = self.api.resource_url(None);
        log::info!("➕ [EMPLEADOS] Creando empleado: {}", data.nombre);
        self.api.post_json(&url, data).await.map_err(handle_error)
    }

    /// Actualizar empleado existente
    pub async fn update_empleado(&self, id: &EmpleadoId, data: &Empleado) -> Result<Empleado, ApiError> {
        let url = self.api.resource_url(Some(id));
        log::info!("📝 [EMPLEADOS] Actualizando empleado {}", id);
        self.api.put_json(&url, data).await.map_err(handle_error)
    }

    /// Eliminar empleado por id
    pub async fn delete_empleado(&self, id: &EmpleadoId) -> Result<(), ApiError> {
        let url = self.api.resource_url(Some(id));
        log::info!("🗑️ [EMPLEADOS] Eliminando empleado {}", id);
        self.api.delete(&url).await.map_err(handle_error)
    }
}
