/// URL base por defecto del recurso REST de empleados
/// Configurable en tiempo de compilación con `API_URL` (ver build.rs):
/// - Revisión actual: http://localhost:8080/api/persona
/// - Revisión anterior: http://localhost:8080/api/empleado
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api/persona";

/// Duración por defecto de un toast en milisegundos
pub const DEFAULT_TOAST_LIFE_MS: u32 = 3000;

/// IDs de elementos del DOM que se actualizan incrementalmente
pub const ROOT_ID: &str = "app";
pub const TABLE_BODY_ID: &str = "empleados-tbody";
pub const TABLE_FOOTER_ID: &str = "empleados-footer";
pub const SELECT_ALL_ID: &str = "empleados-select-all";
pub const DELETE_SELECTED_ID: &str = "btn-eliminar-seleccionados";
pub const GLOBAL_FILTER_ID: &str = "empleados-filtro-global";
pub const TOASTS_ID: &str = "toast-container";
