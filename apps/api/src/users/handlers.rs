use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::user::User;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
}

/// POST /users
pub async fn handle_create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<User>), AppError> {
    let user = state.users.create_user(&req.name, &req.email).await?;
    Ok((StatusCode::CREATED, Json(user)))
}
