//! Auth Module Tests

#[cfg(test)]
mod tests {
    use crate::auth::handlers::{handle_authenticate, PLACEHOLDER_TOKEN};

    #[tokio::test]
    async fn test_authenticate_returns_placeholder_token() {
        let axum::Json(response) = handle_authenticate().await;
        assert_eq!(response.token, PLACEHOLDER_TOKEN);
    }

    #[tokio::test]
    async fn test_token_wire_field_is_named_token() {
        let axum::Json(response) = handle_authenticate().await;
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["token"], PLACEHOLDER_TOKEN);
    }
}
