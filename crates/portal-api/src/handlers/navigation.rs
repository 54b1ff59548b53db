// ============================================================================
// Portal API - Navigation Handlers
// File: crates/portal-api/src/handlers/navigation.rs
// ============================================================================
//! Navigation context for the rendering layer

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    Json,
};
use tracing::warn;
use uuid::Uuid;

use portal_core::services::NavigationContext;
use portal_shared::constants::USER_ID_HEADER;

use crate::response::ApiResponse;
use crate::state::AppState;

/// Navigation handler - GET /api/v1/navigation
///
/// The caller is identified by the `x-user-id` header, which is trusted as
/// is: the service must sit behind a gateway that authenticates the request
/// and overwrites any client-supplied value. Without the header the
/// anonymous navigation is returned.
pub async fn navigation(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<ApiResponse<NavigationContext>>, (StatusCode, Json<ApiResponse<()>>)> {
    let user_id = match headers.get(USER_ID_HEADER) {
        Some(value) => {
            let parsed = value
                .to_str()
                .ok()
                .and_then(|v| Uuid::parse_str(v.trim()).ok());
            match parsed {
                Some(id) => Some(id),
                None => {
                    warn!("Rejected malformed {} header", USER_ID_HEADER);
                    return Err((
                        StatusCode::BAD_REQUEST,
                        Json(ApiResponse::error("VALIDATION_ERROR", "x-user-id must be a UUID")),
                    ));
                }
            }
        }
        None => None,
    };

    let context = state.navigation.context_for_user_id(user_id).await;
    Ok(Json(ApiResponse::success(context)))
}
