pub mod api_client;
pub mod empleado_service;
pub mod error;

pub use api_client::ApiClient;
pub use empleado_service::EmpleadoService;
pub use error::{handle_error, ApiError};
