// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP
// ============================================================================

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::{AppConfig, CONFIG};
use crate::models::EmpleadoId;
use crate::services::error::ApiError;

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    auth_header: Option<String>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_config(&CONFIG)
    }

    pub fn with_config(config: &AppConfig) -> Self {
        Self {
            base_url: config.api_url().to_string(),
            auth_header: config
                .basic_auth()
                .map(|(user, pass)| basic_auth_header(user, pass)),
        }
    }

    /// `{base}` o `{base}/{id}`
    pub fn resource_url(&self, id: Option<&EmpleadoId>) -> String {
        match id {
            Some(id) => format!("{}/{}", self.base_url, id),
            None => self.base_url.clone(),
        }
    }

    pub fn has_auth(&self) -> bool {
        self.auth_header.is_some()
    }

    /// GET que devuelve JSON
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        log::debug!("📡 [API] GET {}", url);
        let response = self
            .with_auth(Request::get(url))
            .send()
            .await
            .map_err(|e| network_error(url, e))?;
        parse_json(url, response).await
    }

    /// POST con cuerpo JSON
    pub async fn post_json<B, T>(&self, url: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        log::debug!("📡 [API] POST {}", url);
        // .json() fija Content-Type: application/json
        let response = self
            .with_auth(Request::post(url))
            .json(body)
            .map_err(|e| ApiError::Cliente(format!("Serialization error: {}", e)))?
            .send()
            .await
            .map_err(|e| network_error(url, e))?;
        parse_json(url, response).await
    }

    /// PUT con cuerpo JSON
    pub async fn put_json<B, T>(&self, url: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        log::debug!("📡 [API] PUT {}", url);
        let response = self
            .with_auth(Request::put(url))
            .json(body)
            .map_err(|e| ApiError::Cliente(format!("Serialization error: {}", e)))?
            .send()
            .await
            .map_err(|e| network_error(url, e))?;
        parse_json(url, response).await
    }

    /// DELETE, el cuerpo de la respuesta se ignora
    pub async fn delete(&self, url: &str) -> Result<(), ApiError> {
        log::debug!("📡 [API] DELETE {}", url);
        let response = self
            .with_auth(Request::delete(url))
            .send()
            .await
            .map_err(|e| network_error(url, e))?;
        check_status(url, &response)
    }

    fn with_auth(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.auth_header {
            Some(value) => builder.header("Authorization", value),
            None => builder,
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Valor de la cabecera `Authorization` para Basic auth
pub fn basic_auth_header(user: &str, pass: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{}:{}", user, pass)))
}

fn network_error(url: &str, error: gloo_net::Error) -> ApiError {
    log::debug!("🌐 [API] Fallo de red en {}: {}", url, error);
    ApiError::network(url)
}

fn check_status(url: &str, response: &Response) -> Result<(), ApiError> {
    if response.ok() {
        Ok(())
    } else {
        Err(ApiError::http(url, response.status(), &response.status_text()))
    }
}

async fn parse_json<T: DeserializeOwned>(url: &str, response: Response) -> Result<T, ApiError> {
    check_status(url, &response)?;
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Cliente(format!("Parse error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(url: &str) -> AppConfig {
        AppConfig {
            api_url: url.to_string(),
            ..AppConfig::default()
        }
    }

    #[test]
    fn construye_urls_del_recurso() {
        let api = ApiClient::with_config(&config("http://localhost:8080/api/empleado/"));
        assert_eq!(api.resource_url(None), "http://localhost:8080/api/empleado");
        assert_eq!(
            api.resource_url(Some(&EmpleadoId::Numero(12))),
            "http://localhost:8080/api/empleado/12"
        );
        assert_eq!(
            api.resource_url(Some(&EmpleadoId::from("a1"))),
            "http://localhost:8080/api/empleado/a1"
        );
    }

    #[test]
    fn cabecera_basic_auth() {
        assert_eq!(basic_auth_header("admin", "secreto"), "Basic YWRtaW46c2VjcmV0bw==");
    }

    #[test]
    fn auth_solo_con_credenciales() {
        let sin_auth = ApiClient::with_config(&config("http://x"));
        assert!(!sin_auth.has_auth());

        let con_auth = ApiClient::with_config(&AppConfig {
            api_username: Some("admin".to_string()),
            api_password: Some("secreto".to_string()),
            ..config("http://x")
        });
        assert!(con_auth.has_auth());
    }
}
