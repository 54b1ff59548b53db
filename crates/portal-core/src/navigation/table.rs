// ============================================================================
// Portal Core - Actions Column
// File: crates/portal-core/src/navigation/table.rs
// Description: Per-record action lists for tabular listings
// ============================================================================

use std::sync::Arc;

use portal_shared::constants::DEFAULT_ACTION_ICON;

use crate::domain::{ActionSpec, ModelMeta, Principal, Record, ResolvedAction};
use crate::navigation::actions::{default_specs, ActionUrlBuilder};
use crate::navigation::permission::PermissionGate;
use crate::navigation::routes::RouteReverser;

/// Actions offered on each row unless a table declares its own.
pub const DEFAULT_AVAILABLE_ACTIONS: [&str; 3] = ["show", "edit", "delete"];

fn default_icon(action: &str) -> Option<&'static str> {
    match action {
        "show" => Some("eye"),
        "edit" => Some("edit"),
        "delete" => Some("trash-alt"),
        "promote" => Some("level-up-alt"),
        "manage" => Some("list-check"),
        _ => None,
    }
}

fn default_title(action: &str) -> Option<&'static str> {
    match action {
        "show" => Some("View"),
        "edit" => Some("Edit"),
        "delete" => Some("Delete"),
        "promote" => Some("Promote"),
        "manage" => Some("Manage"),
        _ => None,
    }
}

fn capitalize(action: &str) -> String {
    let mut chars = action.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Actions column of a table over one model.
pub struct ActionTable {
    meta: ModelMeta,
    urls: ActionUrlBuilder,
    available_actions: Vec<String>,
    gate: PermissionGate,
}

impl ActionTable {
    pub fn new(meta: ModelMeta, routes: Arc<dyn RouteReverser>, gate: PermissionGate) -> Self {
        Self {
            meta,
            urls: ActionUrlBuilder::new(default_specs(&meta, None), Default::default(), routes),
            available_actions: DEFAULT_AVAILABLE_ACTIONS.iter().map(|a| a.to_string()).collect(),
            gate,
        }
    }

    /// Replaces `{app_label}:{model_name}` as the route namespace of the
    /// default actions.
    pub fn with_namespace(mut self, namespace: &str) -> Self {
        self.urls.set_defaults(default_specs(&self.meta, Some(namespace)));
        self
    }

    /// Adds or overrides an action spec.
    pub fn with_action(mut self, action: &str, spec: ActionSpec) -> Self {
        self.urls.custom_mut().insert(action, spec);
        self
    }

    pub fn with_available_actions(mut self, actions: &[&str]) -> Self {
        self.available_actions = actions.iter().map(|a| a.to_string()).collect();
        self
    }

    pub fn meta(&self) -> &ModelMeta {
        &self.meta
    }

    pub fn urls(&self) -> &ActionUrlBuilder {
        &self.urls
    }

    /// Declared actions followed by the available ones, without repeats.
    pub fn candidate_actions(&self) -> Vec<String> {
        let mut actions = self.urls.action_names();
        for action in &self.available_actions {
            if !actions.contains(action) {
                actions.push(action.clone());
            }
        }
        actions
    }

    pub fn icon_for(&self, action: &str) -> String {
        self.urls
            .effective_spec(action)
            .icon
            .unwrap_or_else(|| default_icon(action).unwrap_or(DEFAULT_ACTION_ICON).to_string())
    }

    pub fn title_for(&self, action: &str) -> String {
        self.urls
            .effective_spec(action)
            .title
            .unwrap_or_else(|| default_title(action).map(str::to_string).unwrap_or_else(|| capitalize(action)))
    }

    /// Links for every action `user` may perform on `record`. `add` is
    /// only listed when `include_add` is set.
    pub fn actions_for<P>(
        &self,
        record: &dyn Record,
        user: Option<&P>,
        include_add: bool,
    ) -> Vec<ResolvedAction>
    where
        P: Principal + ?Sized,
    {
        self.candidate_actions()
            .into_iter()
            .filter(|action| include_add || action != "add")
            .filter(|action| self.gate.is_allowed(user, action, record))
            .map(|action| ResolvedAction {
                url: self.urls.resolve(&action, Some(record), None),
                icon: self.icon_for(&action),
                title: self.title_for(&action),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Faction, KwargSpec, PortalUser, UserType, FACTION_MODEL};
    use crate::navigation::routes::RouteTable;

    fn routes() -> Arc<dyn RouteReverser> {
        Arc::new(
            RouteTable::new()
                .with_route("factions:faction:new", "/factions/new/")
                .unwrap()
                .with_route("factions:faction:show", "/factions/{slug:slug}/")
                .unwrap()
                .with_route("factions:faction:edit", "/factions/{slug:slug}/edit/")
                .unwrap()
                .with_route("factions:faction:delete", "/factions/{slug:slug}/delete/")
                .unwrap()
                .with_route("factions:faction:promote", "/factions/{slug:slug}/promote/")
                .unwrap(),
        )
    }

    fn faction_table() -> ActionTable {
        ActionTable::new(FACTION_MODEL, routes(), PermissionGate::default()).with_action(
            "promote",
            ActionSpec::route("factions:faction:promote").kwarg("slug", KwargSpec::path("slug")),
        )
    }

    fn scouts() -> Faction {
        Faction::new(4, "Scouts".to_string(), "scouts".to_string())
    }

    #[test]
    fn test_candidate_actions_order() {
        let table = faction_table().with_available_actions(&["manage", "show"]);
        assert_eq!(
            table.candidate_actions(),
            vec!["add", "show", "edit", "delete", "promote", "manage"]
        );
    }

    #[test]
    fn test_leader_admin_sees_everything_but_add() {
        let table = faction_table();
        let admin = PortalUser::new("rina".to_string(), UserType::Leader).with_admin(true);

        let actions = table.actions_for(&scouts(), Some(&admin), false);
        let titles: Vec<_> = actions.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["View", "Edit", "Delete", "Promote"]);
        assert_eq!(actions[0].url, "/factions/scouts/");
        assert_eq!(actions[0].icon, "eye");
        assert_eq!(actions[3].icon, "level-up-alt");

        let with_add = table.actions_for(&scouts(), Some(&admin), true);
        assert_eq!(with_add[0].url, "/factions/new/");
        assert_eq!(with_add[0].icon, "question-circle");
        assert_eq!(with_add[0].title, "Add");
    }

    #[test]
    fn test_plain_leader_only_promotes() {
        let table = faction_table();
        let leader = PortalUser::new("agus".to_string(), UserType::Leader);

        let actions = table.actions_for(&scouts(), Some(&leader), false);
        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0].url, "/factions/scouts/promote/");
    }

    #[test]
    fn test_attendee_with_show_permission() {
        let table = faction_table();
        let attendee = PortalUser::new("budi".to_string(), UserType::Attendee)
            .with_permission("app.show_faction");

        let actions = table.actions_for(&scouts(), Some(&attendee), false);
        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0].title, "View");
    }

    #[test]
    fn test_custom_icon_title_and_unregistered_route() {
        let table = faction_table()
            .with_action("archive", ActionSpec::route("factions:faction:archive").icon("box"))
            .with_namespace("factions:faction");
        let admin = PortalUser::new("ddewi".to_string(), UserType::Faculty).with_admin(true);

        let actions = table.actions_for(&scouts(), Some(&admin), false);
        let archive = actions.iter().find(|a| a.icon == "box").unwrap();
        assert_eq!(archive.title, "Archive");
        assert_eq!(archive.url, "#");
    }

    #[test]
    fn test_anonymous_follows_gate_default() {
        let open = faction_table();
        assert_eq!(open.actions_for::<PortalUser>(&scouts(), None, false).len(), 4);

        let closed = ActionTable::new(FACTION_MODEL, routes(), PermissionGate::new("app", false));
        assert!(closed.actions_for::<PortalUser>(&scouts(), None, false).is_empty());
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("archive"), "Archive");
        assert_eq!(capitalize("MOVE"), "Move");
        assert_eq!(capitalize(""), "");
    }
}
