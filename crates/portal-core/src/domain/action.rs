// ============================================================================
// Portal Core - Row Action Specs
// File: crates/portal-core/src/domain/action.rs
// Description: Declarative row-level action links and their two-tier merge
// ============================================================================

use std::collections::BTreeMap;

use serde::Serialize;

use portal_shared::Scalar;

/// Source of a single route parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum KwargSpec {
    /// Attribute path on the record, `__`-delimited.
    Path(String),
    /// Fixed value.
    Literal(Scalar),
}

impl KwargSpec {
    pub fn path(path: &str) -> Self {
        KwargSpec::Path(path.to_string())
    }
}

/// Action spec: how to build the link of one row-level operation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActionSpec {
    pub name: Option<String>,
    pub kwargs: Option<BTreeMap<String, KwargSpec>>,
    pub icon: Option<String>,
    pub title: Option<String>,
}

impl ActionSpec {
    pub fn route(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            ..Self::default()
        }
    }

    pub fn kwarg(mut self, key: &str, spec: KwargSpec) -> Self {
        self.kwargs
            .get_or_insert_with(BTreeMap::new)
            .insert(key.to_string(), spec);
        self
    }

    /// Declares an empty parameter map, shadowing any default parameters.
    pub fn no_kwargs(mut self) -> Self {
        self.kwargs = Some(BTreeMap::new());
        self
    }

    pub fn icon(mut self, icon: &str) -> Self {
        self.icon = Some(icon.to_string());
        self
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    /// Field-wise overlay: every field `custom` defines wins; `kwargs` is
    /// taken whole from one side, never combined key by key.
    pub fn merge(default: Option<&ActionSpec>, custom: Option<&ActionSpec>) -> ActionSpec {
        match (default, custom) {
            (None, None) => ActionSpec::default(),
            (Some(spec), None) | (None, Some(spec)) => spec.clone(),
            (Some(default), Some(custom)) => ActionSpec {
                name: custom.name.clone().or_else(|| default.name.clone()),
                kwargs: custom.kwargs.clone().or_else(|| default.kwargs.clone()),
                icon: custom.icon.clone().or_else(|| default.icon.clone()),
                title: custom.title.clone().or_else(|| default.title.clone()),
            },
        }
    }
}

/// Action specs keyed by action name, in declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActionSpecs {
    entries: Vec<(String, ActionSpec)>,
}

impl ActionSpecs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces, keeping the original position on replace.
    pub fn insert(&mut self, action: &str, spec: ActionSpec) {
        match self.entries.iter_mut().find(|(name, _)| name == action) {
            Some((_, existing)) => *existing = spec,
            None => self.entries.push((action.to_string(), spec)),
        }
    }

    pub fn with(mut self, action: &str, spec: ActionSpec) -> Self {
        self.insert(action, spec);
        self
    }

    pub fn get(&self, action: &str) -> Option<&ActionSpec> {
        self.entries
            .iter()
            .find(|(name, _)| name == action)
            .map(|(_, spec)| spec)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Row action ready for the rendering layer. `url` is `"#"` on failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedAction {
    pub url: String,
    pub icon: String,
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_custom_wins_per_field() {
        let default = ActionSpec::route("factions:faction:edit")
            .kwarg("slug", KwargSpec::path("slug"));
        let custom = ActionSpec::default().icon("pen").title("Rename");

        let merged = ActionSpec::merge(Some(&default), Some(&custom));
        assert_eq!(merged.name.as_deref(), Some("factions:faction:edit"));
        assert_eq!(merged.kwargs, default.kwargs);
        assert_eq!(merged.icon.as_deref(), Some("pen"));
        assert_eq!(merged.title.as_deref(), Some("Rename"));
    }

    #[test]
    fn test_merge_takes_kwargs_wholesale() {
        let default = ActionSpec::route("factions:faction:show")
            .kwarg("slug", KwargSpec::path("slug"))
            .kwarg("year", KwargSpec::Literal(Scalar::Int(2024)));
        let custom = ActionSpec::route("factions:member:show")
            .kwarg("member", KwargSpec::path("leader__slug"));

        let merged = ActionSpec::merge(Some(&default), Some(&custom));
        let kwargs = merged.kwargs.unwrap();
        assert_eq!(merged.name.as_deref(), Some("factions:member:show"));
        assert_eq!(kwargs.len(), 1);
        assert!(kwargs.contains_key("member"));
    }

    #[test]
    fn test_merge_empty_custom_kwargs_shadow_defaults() {
        let default = ActionSpec::route("ns:show").kwarg("slug", KwargSpec::path("slug"));
        let custom = ActionSpec::route("ns:list").no_kwargs();

        let merged = ActionSpec::merge(Some(&default), Some(&custom));
        assert_eq!(merged.kwargs, Some(BTreeMap::new()));
    }

    #[test]
    fn test_merge_missing_sides() {
        let spec = ActionSpec::route("ns:show");
        assert_eq!(ActionSpec::merge(None, Some(&spec)), spec);
        assert_eq!(ActionSpec::merge(Some(&spec), None), spec);
        assert_eq!(ActionSpec::merge(None, None), ActionSpec::default());
    }

    #[test]
    fn test_specs_keep_declaration_order() {
        let mut specs = ActionSpecs::new()
            .with("add", ActionSpec::route("ns:new"))
            .with("show", ActionSpec::route("ns:show"));
        specs.insert("add", ActionSpec::route("ns:create"));
        specs.insert("promote", ActionSpec::route("ns:promote"));

        assert_eq!(specs.names().collect::<Vec<_>>(), vec!["add", "show", "promote"]);
        assert_eq!(specs.get("add").unwrap().name.as_deref(), Some("ns:create"));
        assert_eq!(specs.len(), 3);
    }
}
