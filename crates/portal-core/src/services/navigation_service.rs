// ============================================================================
// Portal Core - Navigation Service
// File: crates/portal-core/src/services/navigation_service.rs
// ============================================================================
//! Assembles per-request navigation: role menu, top links, user type and
//! colour scheme.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, error, warn};
use uuid::Uuid;

use portal_shared::constants::{FALLBACK_URL, USER_TYPE_ANONYMOUS};

use crate::domain::{ColorScheme, MenuEntry, MenuLink, ModelMeta, Principal, TopLinkView};
use crate::navigation::attributes::{AttributeSource, UserContext};
use crate::navigation::binder::bind_menu;
use crate::navigation::catalog::MenuCatalog;
use crate::navigation::permission::PermissionGate;
use crate::navigation::routes::{RouteKwargs, RouteReverser};
use crate::navigation::selector::select_menu;
use crate::navigation::table::ActionTable;
use crate::repositories::UserRepository;

/// Everything the rendering layer needs to draw navigation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavigationContext {
    pub menu_items: Vec<MenuLink>,
    pub toplinks: Vec<TopLinkView>,
    pub user_type: String,
    pub color_scheme: ColorScheme,
}

/// Navigation service shared by all requests
pub struct NavigationService<R: UserRepository + ?Sized> {
    user_repo: Arc<R>,
    catalog: Arc<MenuCatalog>,
    routes: Arc<dyn RouteReverser>,
    gate: PermissionGate,
}

impl<R: UserRepository + ?Sized> NavigationService<R> {
    pub fn new(
        user_repo: Arc<R>,
        catalog: Arc<MenuCatalog>,
        routes: Arc<dyn RouteReverser>,
        gate: PermissionGate,
    ) -> Self {
        Self {
            user_repo,
            catalog,
            routes,
            gate,
        }
    }

    /// Builds an actions column for listings of `meta` rows, reusing this
    /// service's routes and permission gate. Table renderers embedding the
    /// crate call this; the JSON surface only serves navigation.
    pub fn action_table(&self, meta: ModelMeta) -> ActionTable {
        ActionTable::new(meta, Arc::clone(&self.routes), self.gate.clone())
    }

    /// Bound menu for `user`, ready for link generation.
    pub fn menu_entries<U>(&self, user: Option<&U>) -> Vec<MenuEntry>
    where
        U: Principal + AttributeSource,
    {
        let mut menu = select_menu(&self.catalog, user);
        if let Some(user) = user {
            let context = UserContext::new(user);
            bind_menu(&mut menu, &context);
        }
        debug!("menu: {:?}", menu);
        menu
    }

    pub fn menu_items<U>(&self, user: Option<&U>) -> Vec<MenuLink>
    where
        U: Principal + AttributeSource,
    {
        self.menu_entries(user)
            .iter()
            .map(|entry| self.link_for(entry))
            .collect()
    }

    /// Top links visible to the caller.
    pub fn top_links(&self, authenticated: bool) -> Vec<TopLinkView> {
        self.catalog
            .toplinks()
            .iter()
            .filter(|link| link.visible_to.is_visible(authenticated))
            .map(|link| TopLinkView {
                title: link.title.clone(),
                url: self.reverse_or_fallback(&link.url_name, &RouteKwargs::new()),
                icon: link.icon.clone(),
            })
            .collect()
    }

    pub fn context_for<U>(&self, user: Option<&U>) -> NavigationContext
    where
        U: Principal + AttributeSource,
    {
        let authenticated = user.is_some_and(|u| u.is_authenticated());
        let user_type = match user {
            Some(u) if authenticated => u.user_type().as_str().to_string(),
            _ => USER_TYPE_ANONYMOUS.to_string(),
        };

        NavigationContext {
            menu_items: self.menu_items(user),
            toplinks: self.top_links(authenticated),
            user_type,
            color_scheme: ColorScheme::default(),
        }
    }

    /// Looks the caller up and builds their navigation. Unknown users and
    /// lookup failures are served anonymous navigation.
    pub async fn context_for_user_id(&self, user_id: Option<Uuid>) -> NavigationContext {
        let user = match user_id {
            Some(id) => match self.user_repo.find_by_id(&id).await {
                Ok(Some(user)) => Some(user),
                Ok(None) => {
                    warn!("Unknown user {}, serving anonymous navigation", id);
                    None
                }
                Err(e) => {
                    error!("Failed to load user {}: {}", id, e);
                    None
                }
            },
            None => None,
        };
        self.context_for(user.as_ref())
    }

    fn link_for(&self, entry: &MenuEntry) -> MenuLink {
        let url = entry
            .route_kwargs()
            .map(|kwargs| self.reverse_or_fallback(&entry.url_name, &kwargs));

        MenuLink {
            name: entry.name.clone(),
            url,
            icon: entry.icon.clone(),
            sub_items: entry.sub_items.iter().map(|sub| self.link_for(sub)).collect(),
        }
    }

    fn reverse_or_fallback(&self, url_name: &str, kwargs: &RouteKwargs) -> String {
        match self.routes.reverse(url_name, kwargs) {
            Ok(url) => url,
            Err(e) => {
                error!("Failed to reverse URL '{}' with kwargs {:?}: {}", url_name, kwargs, e);
                FALLBACK_URL.to_string()
            }
        }
    }
}
