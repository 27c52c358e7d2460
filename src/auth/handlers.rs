use axum::Json;
use serde::Serialize;

/// Fixed token handed out to every caller. A production deployment would
/// issue a signed credential here instead.
pub const PLACEHOLDER_TOKEN: &str = "token_de_exemplo";

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// POST /api/pessoas/autenticar
///
/// Accepts no input and never fails.
pub async fn handle_authenticate() -> Json<TokenResponse> {
    Json(TokenResponse {
        token: PLACEHOLDER_TOKEN.to_string(),
    })
}
