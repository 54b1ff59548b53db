//! HTTP router

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::handlers::{health, navigation};
use crate::state::AppState;

pub fn app_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Navigation
        .route("/api/v1/navigation", get(navigation::navigation))
        // Add State
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use portal_core::domain::{PortalUser, UserType};
    use portal_core::navigation::{MenuCatalog, PermissionGate, RouteTable};
    use portal_core::repositories::UserRepository;
    use portal_core::services::NavigationService;
    use portal_infrastructure::InMemoryUserRepository;

    fn state(users: Vec<PortalUser>) -> AppState {
        let routes = RouteTable::new()
            .with_route("reports", "/reports/")
            .unwrap()
            .with_route("help", "/help/")
            .unwrap();
        let repo: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::with_users(users));
        AppState {
            navigation: Arc::new(NavigationService::new(
                repo,
                Arc::new(MenuCatalog::builtin()),
                Arc::new(routes),
                PermissionGate::default(),
            )),
        }
    }

    async fn get_json(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::get("/health").body(Body::empty()).unwrap();
        let (status, body) = get_json(app_router(state(vec![])), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["status"], "ok");
    }

    #[tokio::test]
    async fn test_anonymous_navigation() {
        let request = Request::get("/api/v1/navigation").body(Body::empty()).unwrap();
        let (status, body) = get_json(app_router(state(vec![])), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["user_type"], "other");
        assert_eq!(body["data"]["menu_items"].as_array().unwrap().len(), 0);
        assert_eq!(body["data"]["toplinks"][0]["url"], "/help/");
    }

    #[tokio::test]
    async fn test_leader_navigation() {
        let leader = PortalUser::new("agus".to_string(), UserType::Leader);
        let id = leader.id;
        let request = Request::get("/api/v1/navigation")
            .header("x-user-id", id.to_string())
            .body(Body::empty())
            .unwrap();
        let (status, body) = get_json(app_router(state(vec![leader])), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["user_type"], "LEADER");
        assert_eq!(body["data"]["menu_items"][0]["name"], "Reports");
        assert_eq!(body["data"]["menu_items"][0]["url"], "/reports/");
        assert_eq!(body["data"]["color_scheme"]["bg_lt"], "#fff8db");
    }

    #[tokio::test]
    async fn test_malformed_user_header() {
        let request = Request::get("/api/v1/navigation")
            .header("x-user-id", "not-a-uuid")
            .body(Body::empty())
            .unwrap();
        let (status, body) = get_json(app_router(state(vec![])), request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }
}
