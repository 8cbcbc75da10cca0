// ============================================================================
// API ERROR - Traducción única de errores HTTP a mensaje
// ============================================================================

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Error del lado del cliente (serialización, parseo, construcción del request)
    #[error("Error: {0}")]
    Cliente(String),

    /// El servidor devolvió un código de error (0 = sin respuesta)
    #[error("Código de error: {status}, mensaje: {mensaje}")]
    Servidor { status: u16, mensaje: String },
}

impl ApiError {
    /// Respuesta no-2xx
    pub fn http(url: &str, status: u16, status_text: &str) -> Self {
        ApiError::Servidor {
            status,
            mensaje: format!("Http failure response for {}: {} {}", url, status, status_text),
        }
    }

    /// Sin respuesta del servidor (CORS, red caída, DNS...)
    pub fn network(url: &str) -> Self {
        Self::http(url, 0, "Unknown Error")
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Servidor { status, .. } => Some(*status),
            ApiError::Cliente(_) => None,
        }
    }
}

/// Registrar el error y devolverlo para propagarlo con `?` o `map_err`
pub fn handle_error(error: ApiError) -> ApiError {
    log::error!("❌ [API] {}", error);
    error
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mensaje_error_servidor() {
        let err = ApiError::http("http://localhost:8080/api/persona/3", 404, "Not Found");
        assert_eq!(
            err.to_string(),
            "Código de error: 404, mensaje: Http failure response for http://localhost:8080/api/persona/3: 404 Not Found"
        );
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn mensaje_error_red() {
        let err = ApiError::network("http://localhost:8080/api/persona");
        assert_eq!(
            err.to_string(),
            "Código de error: 0, mensaje: Http failure response for http://localhost:8080/api/persona: 0 Unknown Error"
        );
    }

    #[test]
    fn mensaje_error_cliente() {
        let err = ApiError::Cliente("Parse error: expected value".to_string());
        assert_eq!(err.to_string(), "Error: Parse error: expected value");
        assert_eq!(err.status(), None);
    }

    #[test]
    fn handle_error_devuelve_el_mismo_error() {
        let err = ApiError::network("u");
        assert_eq!(handle_error(err.clone()), err);
    }
}
