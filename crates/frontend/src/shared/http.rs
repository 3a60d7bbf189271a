//! Calls to the REST backend.
//!
//! Every request carries the session cookies. A 401 triggers one silent
//! refresh followed by one replay of the original request; if the refresh
//! fails the caller gets [`ApiError::SessionExpired`].

use contracts::shared::endpoints;
use contracts::shared::form::{FieldErrors, FALLBACK_ERROR};
use contracts::system::auth::{RefreshPolicy, RefreshStep, SESSION_EXPIRED};
use gloo_net::http::{Method, Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use web_sys::{AbortSignal, FormData, RequestCredentials};

use super::config::api_url;

#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("error de red: {0}")]
    Network(String),
    /// The request was cancelled on purpose; never shown to the user.
    #[error("solicitud cancelada")]
    Aborted,
    #[error("{}", SESSION_EXPIRED)]
    SessionExpired,
    #[error("HTTP {status}")]
    Http { status: u16, errors: FieldErrors },
    #[error("respuesta inválida: {0}")]
    Decode(String),
}

impl ApiError {
    /// Field errors of a rejected submission, empty for everything else.
    pub fn field_errors(&self) -> FieldErrors {
        match self {
            ApiError::Http { errors, .. } => errors.clone(),
            _ => FieldErrors::default(),
        }
    }

    /// Text for the page-level error banner.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => "No se pudo conectar con el servidor.".to_string(),
            ApiError::SessionExpired => SESSION_EXPIRED.to_string(),
            ApiError::Http { errors, .. } => match errors.general() {
                Some(general) => format!("{FALLBACK_ERROR} {general}"),
                None => FALLBACK_ERROR.to_string(),
            },
            ApiError::Aborted | ApiError::Decode(_) => FALLBACK_ERROR.to_string(),
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(error: gloo_net::Error) -> Self {
        match error {
            gloo_net::Error::JsError(js) if js.name == "AbortError" => ApiError::Aborted,
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Body {
    Empty,
    Json(String),
    Form(FormData),
}

/// Everything needed to send (and resend) one call.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    path: String,
    query: Option<String>,
    body: Body,
    signal: Option<AbortSignal>,
}

impl ApiRequest {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: None,
            body: Body::Empty,
            signal: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    /// Serialises `query` with `serde_qs`.
    pub fn query<Q: Serialize>(mut self, query: &Q) -> Self {
        match serde_qs::to_string(query) {
            Ok(qs) if !qs.is_empty() => self.query = Some(qs),
            Ok(_) => {}
            Err(e) => log::warn!("query for {} not encoded: {e}", self.path),
        }
        self
    }

    pub fn pairs(mut self, pairs: &[(&str, String)]) -> Self {
        let qs = pairs
            .iter()
            .map(|(k, v)| format!("{k}={}", urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        if !qs.is_empty() {
            self.query = Some(qs);
        }
        self
    }

    pub fn json<B: Serialize>(mut self, body: &B) -> Result<Self, ApiError> {
        let text = serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.body = Body::Json(text);
        Ok(self)
    }

    pub fn form(mut self, form: FormData) -> Self {
        self.body = Body::Form(form);
        self
    }

    pub fn signal(mut self, signal: Option<AbortSignal>) -> Self {
        self.signal = signal;
        self
    }

    pub fn url(&self) -> String {
        with_query(&api_url(&self.path), self.query.as_deref())
    }

    fn build(&self) -> Result<Request, ApiError> {
        let builder = RequestBuilder::new(&self.url())
            .method(self.method.clone())
            .credentials(RequestCredentials::Include)
            .abort_signal(self.signal.as_ref());
        let request = match &self.body {
            Body::Empty => builder.build()?,
            Body::Json(text) => builder
                .header("Content-Type", "application/json")
                .body(text.as_str())?,
            Body::Form(form) => builder.body(form.clone())?,
        };
        Ok(request)
    }
}

/// Appends `query` to `url`, which may already carry parameters.
pub fn with_query(url: &str, query: Option<&str>) -> String {
    match query.filter(|q| !q.is_empty()) {
        None => url.to_string(),
        Some(q) if url.contains('?') => format!("{url}&{q}"),
        Some(q) => format!("{url}?{q}"),
    }
}

/// Sends `request`, refreshing the session once on 401.
pub async fn auth_fetch(request: &ApiRequest) -> Result<Response, ApiError> {
    let mut policy = RefreshPolicy::new();
    log::debug!("{} {}", request.method, request.path);
    let mut response = request.build()?.send().await?;
    loop {
        match policy.on_response(response.status()) {
            RefreshStep::Deliver => return Ok(response),
            RefreshStep::Refresh => {
                let refreshed = refresh_session().await;
                match policy.on_refresh(refreshed) {
                    RefreshStep::Replay => {
                        log::debug!("replaying {} {}", request.method, request.path);
                        response = request.build()?.send().await?;
                    }
                    _ => {
                        log::error!("session expired during {}", request.path);
                        return Err(ApiError::SessionExpired);
                    }
                }
            }
            RefreshStep::Replay | RefreshStep::Expired => return Err(ApiError::SessionExpired),
        }
    }
}

async fn refresh_session() -> bool {
    let request = ApiRequest::post(endpoints::REFRESH);
    match request.build() {
        Ok(r) => match r.send().await {
            Ok(response) => response.ok(),
            Err(e) => {
                log::warn!("refresh failed: {e}");
                false
            }
        },
        Err(_) => false,
    }
}

/// Sends without the refresh dance (login, logout).
pub async fn send_plain(request: &ApiRequest) -> Result<Response, ApiError> {
    Ok(request.build()?.send().await?)
}

/// Authenticated call whose JSON body is decoded into `T`.
pub async fn fetch_json<T: DeserializeOwned>(request: ApiRequest) -> Result<T, ApiError> {
    let response = auth_fetch(&request).await?;
    read_json(response).await
}

/// Authenticated call whose body is ignored.
pub async fn send(request: ApiRequest) -> Result<(), ApiError> {
    let response = auth_fetch(&request).await?;
    if response.ok() {
        Ok(())
    } else {
        Err(rejected(response).await)
    }
}

pub async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(rejected(response).await);
    }
    response.json::<T>().await.map_err(|e| {
        log::error!("cannot decode response: {e}");
        ApiError::from(e)
    })
}

async fn rejected(response: Response) -> ApiError {
    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    log::warn!("request rejected with {status}");
    ApiError::Http {
        status,
        errors: FieldErrors::parse(&text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::list::ListParams;
    use serde_json::json;

    #[test]
    fn test_with_query() {
        assert_eq!(with_query("/a/", None), "/a/");
        assert_eq!(with_query("/a/", Some("")), "/a/");
        assert_eq!(with_query("/a/", Some("limit=5")), "/a/?limit=5");
        assert_eq!(
            with_query("/a/?start_date=2024-01-01", Some("x=1")),
            "/a/?start_date=2024-01-01&x=1"
        );
    }

    #[test]
    fn test_list_query_string() {
        let mut params = ListParams::default();
        params.set_page(2);
        params.set_filter(" cemento ");
        let qs = serde_qs::to_string(&params.to_query()).expect("encode");
        assert_eq!(qs, "limit=5&offset=10&search=cemento");
    }

    #[test]
    fn test_user_message_always_leads_with_fallback() {
        let error = ApiError::Http {
            status: 400,
            errors: FieldErrors::from_value(json!({"detail": "Stock insuficiente"})),
        };
        assert_eq!(error.user_message(), "Ocurrió un problema. Stock insuficiente");
        assert!(error.user_message().starts_with(FALLBACK_ERROR));

        let error = ApiError::Http {
            status: 422,
            errors: FieldErrors::from_value(json!({"name": ["Ya existe."]})),
        };
        assert_eq!(error.user_message(), FALLBACK_ERROR);
        assert_eq!(error.field_errors().first("name").as_deref(), Some("Ya existe."));
    }

    #[test]
    fn test_session_expired_text() {
        assert_eq!(ApiError::SessionExpired.to_string(), "Sesión expirada");
        assert!(ApiError::Aborted.field_errors().is_empty());
    }
}
