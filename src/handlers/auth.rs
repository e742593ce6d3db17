use axum::http::header::COOKIE;
use axum::http::HeaderMap;
use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct AuthCheckResponse {
    #[serde(rename = "isLoggedIn")]
    pub is_logged_in: bool,
}

/// GET /api/auth/check — reports whether the request carries a `session`
/// cookie. Presence only; the value is not validated (authorization is
/// disabled for this dashboard).
pub async fn check_session(headers: HeaderMap) -> Json<AuthCheckResponse> {
    let is_logged_in = headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .any(|pair| pair.trim_start().split('=').next() == Some("session"));

    Json(AuthCheckResponse { is_logged_in })
}
