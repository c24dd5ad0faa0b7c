use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::post,
    Extension, Json, Router,
};
use serde::Deserialize;
use uuid::Uuid;
use webinar_core::{ChangeSeatsRequest, User};

use crate::{error::AppError, middleware::{user_auth_middleware, UserClaims}, state::AppState};

#[derive(Debug, Deserialize)]
pub struct ChangeSeatsBody {
    pub seats: u32,
}

pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/v1/webinars/{id}/seats", post(change_seats))
        .route_layer(axum::middleware::from_fn_with_state(state, user_auth_middleware))
}

/// POST /v1/webinars/{id}/seats
/// Change the seat capacity of a webinar owned by the caller
async fn change_seats(
    State(state): State<AppState>,
    Extension(claims): Extension<UserClaims>,
    Path(webinar_id): Path<Uuid>,
    Json(body): Json<ChangeSeatsBody>,
) -> Result<StatusCode, AppError> {
    let requesting_user = User {
        id: claims.sub,
        email: claims.email,
    };

    state.change_seats
        .execute(ChangeSeatsRequest {
            requesting_user,
            webinar_id,
            seats: body.seats,
        })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
