//! JSON REST handlers for clients.

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};

use rolodex_app::ports::ClientRepository;
use rolodex_domain::client::{Client, ClientDraft};
use rolodex_domain::id::ClientId;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Client>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Client>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Ok(Json<ClientDraft>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the update endpoint.
pub enum UpdateResponse {
    Ok(Json<Client>),
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    Ok(Json<Vec<Client>>),
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /clients`
pub async fn list<R>(State(state): State<AppState<R>>) -> ListResponse
where
    R: ClientRepository + Send + Sync + 'static,
{
    let clients = state.client_service.list_clients().await;
    ListResponse::Ok(Json(clients))
}

/// `GET /clients/{id}`
pub async fn get<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    R: ClientRepository + Send + Sync + 'static,
{
    let client = state.client_service.get_client(ClientId::from(id)).await?;
    Ok(GetResponse::Ok(Json(client)))
}

/// `POST /clients`
///
/// Echoes the submitted payload. Nothing is appended to the collection —
/// the seed document is the only source of stored records — so a
/// subsequent list is unchanged.
pub async fn create(Json(draft): Json<ClientDraft>) -> CreateResponse {
    CreateResponse::Ok(Json(draft))
}

/// `PUT /clients/{id}`
pub async fn update<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
    Json(draft): Json<ClientDraft>,
) -> Result<UpdateResponse, ApiError>
where
    R: ClientRepository + Send + Sync + 'static,
{
    let client = state
        .client_service
        .update_client(ClientId::from(id), draft)
        .await?;
    Ok(UpdateResponse::Ok(Json(client)))
}

/// `DELETE /clients/{id}`
///
/// Responds with the collection as it would look with `id` removed. The
/// store itself is left unchanged, and an absent id returns the full
/// collection — a 200 either way.
pub async fn delete<R>(State(state): State<AppState<R>>, Path(id): Path<String>) -> DeleteResponse
where
    R: ClientRepository + Send + Sync + 'static,
{
    let clients = state
        .client_service
        .delete_clients(ClientId::from(id))
        .await;
    DeleteResponse::Ok(Json(clients))
}
