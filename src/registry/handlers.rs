//! Registry HTTP Handlers
//!
//! Maps the router's CRUD routes onto `PersonRegistry` operations. Success is
//! always a 200 with the affected record(s); rejections are converted to 404
//! or 400 by `RegistryError`'s `IntoResponse` impl.

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::sync::Arc;

use super::memory::PersonRegistry;
use super::types::{Person, PersonDraft};

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
}

pub async fn handle_list_people(
    Extension(registry): Extension<Arc<PersonRegistry>>,
) -> Json<Vec<Person>> {
    Json(registry.list_all())
}

pub async fn handle_get_person(
    Extension(registry): Extension<Arc<PersonRegistry>>,
    Path(code): Path<u64>,
) -> Response {
    match registry.get_by_code(code) {
        Ok(person) => (StatusCode::OK, Json(person)).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn handle_list_by_region(
    Extension(registry): Extension<Arc<PersonRegistry>>,
    Path(region): Path<String>,
) -> Response {
    match registry.list_by_region(&region) {
        Ok(people) => (StatusCode::OK, Json(people)).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn handle_create_person(
    Extension(registry): Extension<Arc<PersonRegistry>>,
    Json(draft): Json<PersonDraft>,
) -> Response {
    match registry.create(draft) {
        Ok(person) => {
            tracing::info!("Created person {} ({})", person.code, person.name);
            (StatusCode::OK, Json(person)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub async fn handle_update_person(
    Extension(registry): Extension<Arc<PersonRegistry>>,
    Path(code): Path<u64>,
    Json(draft): Json<PersonDraft>,
) -> Response {
    match registry.update(code, draft) {
        Ok(person) => {
            tracing::info!("Updated person {}", person.code);
            (StatusCode::OK, Json(person)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub async fn handle_delete_person(
    Extension(registry): Extension<Arc<PersonRegistry>>,
    Path(code): Path<u64>,
) -> Response {
    match registry.delete(code) {
        Ok(()) => {
            tracing::info!("Deleted person {}", code);
            (
                StatusCode::OK,
                Json(DeleteResponse {
                    message: format!("person {} deleted", code),
                }),
            )
                .into_response()
        }
        Err(err) => err.into_response(),
    }
}
