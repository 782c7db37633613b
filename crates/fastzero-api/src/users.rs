//! User CRUD handlers. Status mapping lives in [`crate::error`].

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};

use fastzero_core::{Message, UserList, UserPublic, UserSchema};

use crate::app_state::AppState;
use crate::error::ApiResult;

pub async fn root() -> Json<Message> {
    Json(Message::new("Ola, mundo!"))
}

pub async fn create_user(
    State(app): State<AppState>,
    body: Result<Json<UserSchema>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<UserPublic>)> {
    let Json(req) = body?;
    let user = app.users().create_user(&req)?;
    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn list_users(State(app): State<AppState>) -> ApiResult<Json<UserList>> {
    Ok(Json(app.users().list_users()?))
}

pub async fn get_user(
    State(app): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> ApiResult<Json<UserPublic>> {
    let Path(id) = id?;
    Ok(Json(app.users().get_user(id)?))
}

pub async fn update_user(
    State(app): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
    body: Result<Json<UserSchema>, JsonRejection>,
) -> ApiResult<Json<UserPublic>> {
    let Path(id) = id?;
    let Json(req) = body?;
    Ok(Json(app.users().update_user(id, &req)?))
}

pub async fn delete_user(
    State(app): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> ApiResult<Json<Message>> {
    let Path(id) = id?;
    app.users().delete_user(id)?;
    Ok(Json(Message::new("User deleted")))
}
