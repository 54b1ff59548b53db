// ============================================================================
// Portal Core - Menu Catalog
// File: crates/portal-core/src/navigation/catalog.rs
// Description: Immutable role menu templates and top links
// ============================================================================

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use tracing::info;
use validator::Validate;

use crate::domain::{MenuEntry, TopLink, Visibility};
use crate::error::DomainError;

/// Named role menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuKind {
    FacultyAdmin,
    Faculty,
    Attendee,
    LeaderAdmin,
    Leader,
    OrganizationFaculty,
}

/// Role menu templates, loaded once at startup and shared read-only.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MenuCatalog {
    #[serde(default)]
    menus: HashMap<MenuKind, Vec<MenuEntry>>,
    #[serde(default)]
    toplinks: Vec<TopLink>,
}

impl MenuCatalog {
    /// Working copy of a menu template; callers may bind it freely.
    pub fn menu(&self, kind: MenuKind) -> Vec<MenuEntry> {
        self.menus.get(&kind).cloned().unwrap_or_default()
    }

    pub fn toplinks(&self) -> &[TopLink] {
        &self.toplinks
    }

    pub fn from_json_str(json: &str) -> Result<Self, DomainError> {
        let catalog: MenuCatalog =
            serde_json::from_str(json).map_err(|e| DomainError::MenuCatalogError(e.to_string()))?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            DomainError::MenuCatalogError(format!("{}: {}", path.display(), e))
        })?;
        let catalog = Self::from_json_str(&json)?;
        info!("Loaded menu catalog from {}", path.display());
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), DomainError> {
        for entry in self.menus.values().flatten() {
            entry.validate()?;
        }
        for link in &self.toplinks {
            link.validate()?;
        }
        Ok(())
    }

    /// The portal's built-in menus.
    pub fn builtin() -> Self {
        let mut menus = HashMap::new();

        menus.insert(
            MenuKind::FacultyAdmin,
            vec![
                MenuEntry::new("Faculty Management", "facultys:manage")
                    .icon("fa-users")
                    .sub_items(vec![
                        MenuEntry::new("Add Faculty", "facultys:new"),
                        MenuEntry::new("Assign Classes", "home"),
                    ]),
                MenuEntry::new("Class Management", "home")
                    .icon("fa-book")
                    .sub_items(vec![
                        MenuEntry::new("View Classes", "home"),
                        MenuEntry::new("Create/Edit Classes", "home"),
                        MenuEntry::new("Class Enrollments", "home"),
                    ]),
                MenuEntry::new("Facility Management", "facilities:manage")
                    .icon("fa-building")
                    .sub_items(vec![
                        MenuEntry::new("Department Management", "departments:index_by_facility")
                            .dynamic_param("slug", "user.facultyprofile.facility.slug"),
                        MenuEntry::new("Quarters Management", "quarters:index_by_facility")
                            .dynamic_param("slug", "user.facultyprofile.facility.slug"),
                    ]),
                MenuEntry::new("Reports", "home").icon("fa-file"),
            ],
        );

        menus.insert(
            MenuKind::Attendee,
            vec![
                MenuEntry::new("My Schedule", "attendees:enrollment:index_by_attendee")
                    .icon("fa-calendar")
                    .dynamic_param("slug", "user.slug"),
                MenuEntry::new("Courses", "course_index")
                    .icon("fa-book")
                    .sub_items(vec![
                        MenuEntry::new("View Courses", "view_courses"),
                        MenuEntry::new("Enroll in Courses", "enroll_courses"),
                    ]),
                MenuEntry::new("Resources", "resources").icon("fa-folder"),
            ],
        );

        menus.insert(
            MenuKind::Leader,
            vec![MenuEntry::new("Reports", "reports").icon("fa-file")],
        );

        menus.insert(
            MenuKind::LeaderAdmin,
            vec![
                MenuEntry::new("Faction Management", "factions:manage").icon("fa-users"),
                MenuEntry::new("Leader Management", "leaders:index")
                    .icon("fa-users")
                    .sub_items(vec![
                        MenuEntry::new("View Leaders", "view_leaders"),
                        MenuEntry::new("Add/Edit Leaders", "edit_leaders"),
                        MenuEntry::new("Assign Tasks", "assign_tasks"),
                    ]),
                MenuEntry::new("Reports", "reports").icon("fa-file"),
            ],
        );

        menus.insert(
            MenuKind::Faculty,
            vec![
                MenuEntry::new("My Classes", "home").icon("fa-book"),
                MenuEntry::new("My Enrollments", "home").icon("fa-tasks"),
                MenuEntry::new("Resources", "home").icon("fa-folder"),
            ],
        );

        menus.insert(
            MenuKind::OrganizationFaculty,
            vec![
                MenuEntry::new("Organization Management", "organization_management")
                    .icon("fa-building")
                    .sub_items(vec![
                        MenuEntry::new("View Organization", "view_organization"),
                        MenuEntry::new("Manage Departments", "manage_departments"),
                    ]),
                MenuEntry::new("Reports", "reports").icon("fa-file"),
            ],
        );

        let toplinks = vec![
            TopLink::new("Help", "help", Some("fa-circle-question"), Visibility::All),
            TopLink::new("Sign Up", "register", None, Visibility::Guest),
            TopLink::new("Sign In", "login", None, Visibility::Guest),
            TopLink::new("Settings", "account_settings", Some("fa-gears"), Visibility::Authenticated),
        ];

        Self { menus, toplinks }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DynamicParam;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = MenuCatalog::builtin();
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.toplinks().len(), 4);
        assert_eq!(catalog.menu(MenuKind::Leader).len(), 1);
        assert_eq!(catalog.menu(MenuKind::FacultyAdmin)[2].sub_items.len(), 2);
    }

    #[test]
    fn test_menu_returns_independent_copy() {
        let catalog = MenuCatalog::builtin();
        let mut working = catalog.menu(MenuKind::Attendee);
        working[0]
            .dynamic_params
            .insert("slug".to_string(), DynamicParam::Resolved(None));

        let fresh = catalog.menu(MenuKind::Attendee);
        assert_eq!(fresh[0].dynamic_params["slug"], DynamicParam::path("user.slug"));
    }

    #[test]
    fn test_from_json_str() {
        let json = r#"{
            "menus": {
                "leader": [{"name": "Reports", "url_name": "reports", "icon": "fa-file"}],
                "attendee": [{
                    "name": "My Schedule",
                    "url_name": "attendees:enrollment:index_by_attendee",
                    "dynamic_params": {"slug": "user.slug"}
                }]
            },
            "toplinks": [{"title": "Help", "url_name": "help"}]
        }"#;
        let catalog = MenuCatalog::from_json_str(json).unwrap();
        assert_eq!(catalog.menu(MenuKind::Leader)[0].url_name, "reports");
        assert!(catalog.menu(MenuKind::Faculty).is_empty());
        assert_eq!(catalog.toplinks()[0].visible_to, Visibility::All);
    }

    #[test]
    fn test_from_json_str_rejects_invalid_entries() {
        let json = r#"{"menus": {"leader": [{"name": "", "url_name": "reports"}]}}"#;
        assert!(matches!(
            MenuCatalog::from_json_str(json),
            Err(DomainError::ValidationError(_))
        ));
        assert!(matches!(
            MenuCatalog::from_json_str("{not json"),
            Err(DomainError::MenuCatalogError(_))
        ));
    }
}
