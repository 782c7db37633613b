//! Axum router wiring.
//!
//! User routes accept both `/users` and `/users/`. Every route passes through
//! the request tracking middleware.

use axum::{
    middleware,
    routing::get,
    Router,
};

use crate::{app_state::AppState, obs, ops, users};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(users::root))
        .route("/users", get(users::list_users).post(users::create_user))
        .route("/users/", get(users::list_users).post(users::create_user))
        .route(
            "/users/:id",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .route("/healthz", get(ops::healthz))
        .route("/readyz", get(ops::readyz))
        .route("/metrics", get(ops::metrics))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            obs::track_requests,
        ))
        .with_state(state)
}
