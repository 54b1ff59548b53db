use std::sync::Arc;

use portal_core::repositories::UserRepository;
use portal_core::services::NavigationService;

#[derive(Clone)]
pub struct AppState {
    pub navigation: Arc<NavigationService<dyn UserRepository>>,
}
