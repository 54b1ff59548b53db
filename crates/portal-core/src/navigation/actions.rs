// ============================================================================
// Portal Core - Action URL Builder
// File: crates/portal-core/src/navigation/actions.rs
// Description: Turns row-level action specs into concrete links
// ============================================================================

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{error, warn};

use portal_shared::constants::FALLBACK_URL;

use crate::domain::{ActionSpec, ActionSpecs, KwargSpec, ModelMeta, Record};
use crate::navigation::attributes::{resolve, Delimiter};
use crate::navigation::routes::{RouteKwargs, RouteReverser};

/// Conventional actions for a model: `add`, `show`, `edit` and `delete`
/// under `{namespace}`, keyed by `slug` when the model has one.
pub fn default_specs(meta: &ModelMeta, namespace: Option<&str>) -> ActionSpecs {
    let namespace = namespace
        .map(str::to_string)
        .unwrap_or_else(|| meta.namespace());
    let field = meta.lookup_field();

    ActionSpecs::new()
        .with("add", ActionSpec::route(&format!("{}:new", namespace)).no_kwargs())
        .with(
            "show",
            ActionSpec::route(&format!("{}:show", namespace)).kwarg(field, KwargSpec::path(field)),
        )
        .with(
            "edit",
            ActionSpec::route(&format!("{}:edit", namespace)).kwarg(field, KwargSpec::path(field)),
        )
        .with(
            "delete",
            ActionSpec::route(&format!("{}:delete", namespace)).kwarg(field, KwargSpec::path(field)),
        )
}

/// Builds action links from default specs overlaid by custom specs.
pub struct ActionUrlBuilder {
    defaults: ActionSpecs,
    custom: ActionSpecs,
    routes: Arc<dyn RouteReverser>,
}

impl ActionUrlBuilder {
    pub fn new(defaults: ActionSpecs, custom: ActionSpecs, routes: Arc<dyn RouteReverser>) -> Self {
        Self {
            defaults,
            custom,
            routes,
        }
    }

    pub fn defaults(&self) -> &ActionSpecs {
        &self.defaults
    }

    pub fn custom(&self) -> &ActionSpecs {
        &self.custom
    }

    pub(crate) fn set_defaults(&mut self, defaults: ActionSpecs) {
        self.defaults = defaults;
    }

    pub(crate) fn custom_mut(&mut self) -> &mut ActionSpecs {
        &mut self.custom
    }

    /// Merged spec for an action.
    pub fn effective_spec(&self, action: &str) -> ActionSpec {
        ActionSpec::merge(self.defaults.get(action), self.custom.get(action))
    }

    /// Action names of the merged spec map: defaults first, then custom
    /// additions, each in declaration order.
    pub fn action_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.defaults.names().map(str::to_string).collect();
        for name in self.custom.names() {
            if !names.iter().any(|n| n == name) {
                names.push(name.to_string());
            }
        }
        names
    }

    /// URL for `action`, or `"#"` when the spec has no route name or the
    /// route cannot be reversed.
    pub fn resolve(
        &self,
        action: &str,
        record: Option<&dyn Record>,
        context: Option<&RouteKwargs>,
    ) -> String {
        let spec = self.effective_spec(action);
        let Some(url_name) = spec.name.as_deref() else {
            warn!("URL name for action '{}' is None.", action);
            return FALLBACK_URL.to_string();
        };

        let empty = BTreeMap::new();
        let kwargs_config = spec.kwargs.as_ref().unwrap_or(&empty);
        let url_kwargs = build_url_kwargs(kwargs_config, record, context);

        match self.routes.reverse(url_name, &url_kwargs) {
            Ok(url) => url,
            Err(e) => {
                error!(
                    "Failed to reverse URL for action '{}' with name '{}' and kwargs {:?}: {}",
                    action, url_name, url_kwargs, e
                );
                FALLBACK_URL.to_string()
            }
        }
    }
}

/// Route parameters for a spec. A same-named context value wins; otherwise
/// the record's attribute path is used, falling back to its primary key.
/// Path parameters are skipped entirely when there is no record.
pub fn build_url_kwargs(
    kwargs_config: &BTreeMap<String, KwargSpec>,
    record: Option<&dyn Record>,
    context: Option<&RouteKwargs>,
) -> RouteKwargs {
    let mut url_kwargs = RouteKwargs::new();
    for (key, spec) in kwargs_config {
        if let Some(value) = context.and_then(|c| c.get(key)) {
            url_kwargs.insert(key.clone(), value.clone());
            continue;
        }
        match spec {
            KwargSpec::Literal(value) => {
                url_kwargs.insert(key.clone(), value.clone());
            }
            KwargSpec::Path(path) => {
                let Some(record) = record else {
                    continue;
                };
                let value = resolve(record, path, Delimiter::DoubleUnderscore)
                    .filter(|v| v.is_truthy())
                    .or_else(|| record.pk());
                if let Some(value) = value {
                    url_kwargs.insert(key.clone(), value);
                }
            }
        }
    }
    url_kwargs
}
