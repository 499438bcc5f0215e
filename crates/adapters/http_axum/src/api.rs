//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod clients;

use axum::Router;
use axum::routing::get;

use rolodex_app::ports::ClientRepository;

use crate::state::AppState;

/// Build the `/clients` resource routes.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: ClientRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/clients", get(clients::list::<R>).post(clients::create))
        .route(
            "/clients/{id}",
            get(clients::get::<R>)
                .put(clients::update::<R>)
                .delete(clients::delete::<R>),
        )
}
