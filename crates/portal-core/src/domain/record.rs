//! Table records: rows that row-level actions are built for.

use portal_shared::Scalar;

use crate::navigation::attributes::AttributeSource;

/// Static description of the model behind a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelMeta {
    pub app_label: &'static str,
    pub model_name: &'static str,
    /// Whether rows are addressed by `slug` rather than `pk`.
    pub has_slug: bool,
}

impl ModelMeta {
    pub const fn new(app_label: &'static str, model_name: &'static str, has_slug: bool) -> Self {
        Self {
            app_label,
            model_name,
            has_slug,
        }
    }

    /// `{app_label}:{model_name}`
    pub fn namespace(&self) -> String {
        format!("{}:{}", self.app_label, self.model_name)
    }

    /// Route parameter that identifies a row.
    pub fn lookup_field(&self) -> &'static str {
        if self.has_slug {
            "slug"
        } else {
            "pk"
        }
    }
}

pub trait Record: AttributeSource {
    fn meta(&self) -> &ModelMeta;

    /// Primary identifier, used when a route parameter cannot be resolved.
    fn pk(&self) -> Option<Scalar>;
}
