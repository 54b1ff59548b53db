// ============================================================================
// Portal Core - Menu Entities
// File: crates/portal-core/src/domain/menu.rs
// Description: Menu templates, top links and their rendered link forms
// ============================================================================

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use tracing::error;
use validator::Validate;

use portal_shared::constants::FALLBACK_URL;
use portal_shared::Scalar;

use crate::navigation::routes::{RouteKwargs, RouteReverser};

/// A URL parameter filled per request from the current user.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DynamicParam {
    /// Attribute path still to be resolved; may be empty.
    Pending(Option<String>),
    /// Resolved value; `None` when resolution failed.
    Resolved(Option<Scalar>),
}

// Templates only ever carry paths.
impl<'de> Deserialize<'de> for DynamicParam {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer).map(DynamicParam::Pending)
    }
}

impl DynamicParam {
    pub fn path(path: &str) -> Self {
        DynamicParam::Pending(Some(path.to_string()))
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, DynamicParam::Resolved(_))
    }
}

/// Menu entry template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct MenuEntry {
    #[validate(length(min = 1, max = 100, message = "Menu name must be between 1 and 100 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 255, message = "Route name must be between 1 and 255 characters"))]
    pub url_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 100, message = "Menu icon too long"))]
    pub icon: Option<String>,

    /// Fixed route parameters.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub url_params: BTreeMap<String, Scalar>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub dynamic_params: BTreeMap<String, DynamicParam>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[validate(nested)]
    pub sub_items: Vec<MenuEntry>,
}

impl MenuEntry {
    pub fn new(name: &str, url_name: &str) -> Self {
        Self {
            name: name.to_string(),
            url_name: url_name.to_string(),
            icon: None,
            url_params: BTreeMap::new(),
            dynamic_params: BTreeMap::new(),
            sub_items: Vec::new(),
        }
    }

    pub fn icon(mut self, icon: &str) -> Self {
        self.icon = Some(icon.to_string());
        self
    }

    pub fn dynamic_param(mut self, key: &str, path: &str) -> Self {
        self.dynamic_params.insert(key.to_string(), DynamicParam::path(path));
        self
    }

    pub fn sub_items(mut self, sub_items: Vec<MenuEntry>) -> Self {
        self.sub_items = sub_items;
        self
    }

    /// Route parameters for this entry, or `None` while any dynamic
    /// parameter is unresolved or resolved to nothing.
    pub fn route_kwargs(&self) -> Option<RouteKwargs> {
        let mut kwargs = self.url_params.clone();
        for (key, param) in &self.dynamic_params {
            match param {
                DynamicParam::Resolved(Some(value)) => {
                    kwargs.insert(key.clone(), value.clone());
                }
                _ => return None,
            }
        }
        Some(kwargs)
    }

    /// Reverses this entry's route, or the fallback link on failure.
    pub fn url_or_fallback(&self, routes: &dyn RouteReverser) -> String {
        let Some(kwargs) = self.route_kwargs() else {
            return FALLBACK_URL.to_string();
        };
        match routes.reverse(&self.url_name, &kwargs) {
            Ok(url) => url,
            Err(e) => {
                error!("Failed to reverse menu entry '{}': {}", self.name, e);
                FALLBACK_URL.to_string()
            }
        }
    }
}

/// Audience of a top link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    All,
    Guest,
    Authenticated,
}

impl Visibility {
    pub fn is_visible(&self, authenticated: bool) -> bool {
        match self {
            Visibility::All => true,
            Visibility::Guest => !authenticated,
            Visibility::Authenticated => authenticated,
        }
    }
}

/// Top bar link
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct TopLink {
    #[validate(length(min = 1, max = 100, message = "Link title must be between 1 and 100 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 255, message = "Route name must be between 1 and 255 characters"))]
    pub url_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    #[serde(default)]
    pub visible_to: Visibility,
}

impl TopLink {
    pub fn new(title: &str, url_name: &str, icon: Option<&str>, visible_to: Visibility) -> Self {
        Self {
            title: title.to_string(),
            url_name: url_name.to_string(),
            icon: icon.map(str::to_string),
            visible_to,
        }
    }
}

/// Menu entry ready for the rendering layer. `url` is absent when a dynamic
/// parameter could not be resolved; the link must then be disabled.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuLink {
    pub name: String,
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sub_items: Vec<MenuLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopLinkView {
    pub title: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}
