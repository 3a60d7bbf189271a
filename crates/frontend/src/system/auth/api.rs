use contracts::shared::endpoints;
use contracts::system::auth::{LoginRequest, LoginResponse, Session};

use crate::shared::http::{read_json, send_plain, ApiError, ApiRequest};

/// Exchange credentials for the session cookies.
pub async fn login(email: String, password: String) -> Result<Session, ApiError> {
    let request = ApiRequest::post(endpoints::LOGIN).json(&LoginRequest { email, password })?;
    let response = send_plain(&request).await?;
    let body: LoginResponse = read_json(response).await?;
    Ok(Session::from(body))
}

/// Ask the server to drop the cookies. Failures only get logged: the local
/// session is cleared either way.
pub async fn logout() {
    match send_plain(&ApiRequest::post(endpoints::LOGOUT)).await {
        Ok(response) if response.ok() => {}
        Ok(response) => log::warn!("logout answered {}", response.status()),
        Err(e) => log::warn!("logout failed: {e}"),
    }
}
