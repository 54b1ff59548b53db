// ============================================================================
// Portal Core - Portal User Entity
// File: crates/portal-core/src/domain/user.rs
// Description: Authenticated portal user with role-specific profiles
// ============================================================================

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::organization::{Facility, Faction};
use crate::navigation::attributes::{Attr, AttributeSource};

/// User type enumeration. Types outside the portal's roles keep their raw
/// string so it can be reported back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum UserType {
    Faculty,
    Attendee,
    Leader,
    OrganizationFaculty,
    Other(String),
}

impl UserType {
    pub fn as_str(&self) -> &str {
        match self {
            UserType::Faculty => "FACULTY",
            UserType::Attendee => "ATTENDEE",
            UserType::Leader => "LEADER",
            UserType::OrganizationFaculty => "ORGANIZATION_FACULTY",
            UserType::Other(raw) => raw,
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "FACULTY" => UserType::Faculty,
            "ATTENDEE" => UserType::Attendee,
            "LEADER" => UserType::Leader,
            "ORGANIZATION_FACULTY" => UserType::OrganizationFaculty,
            other => UserType::Other(other.to_string()),
        }
    }

    /// Leaders and faculty get elevated row actions.
    pub fn is_privileged(&self) -> bool {
        matches!(self, UserType::Leader | UserType::Faculty)
    }
}

impl Default for UserType {
    fn default() -> Self {
        UserType::Other("OTHER".to_string())
    }
}

impl From<String> for UserType {
    fn from(s: String) -> Self {
        UserType::from_str(&s)
    }
}

impl From<UserType> for String {
    fn from(user_type: UserType) -> Self {
        user_type.as_str().to_string()
    }
}

/// User-like object consumed by menu selection and the permission gate.
#[cfg_attr(test, mockall::automock)]
pub trait Principal: Send + Sync {
    fn user_type(&self) -> UserType;
    fn is_admin(&self) -> bool;
    fn is_authenticated(&self) -> bool;
    fn is_staff(&self) -> bool;
    fn is_superuser(&self) -> bool;
    /// Checks a structured permission such as `app.delete_faction`.
    fn has_perm(&self, permission: &str) -> bool;
}

/// Faculty profile linking a user to their facility
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacultyProfile {
    pub facility: Facility,
    pub title: Option<String>,
}

impl AttributeSource for FacultyProfile {
    fn attr(&self, name: &str) -> Option<Attr<'_>> {
        match name {
            "facility" => Some(Attr::Object(&self.facility)),
            "title" => Attr::text(&self.title),
            _ => None,
        }
    }
}

/// Leader profile linking a user to the faction they lead
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderProfile {
    pub faction: Faction,
}

impl AttributeSource for LeaderProfile {
    fn attr(&self, name: &str) -> Option<Attr<'_>> {
        match name {
            "faction" => Some(Attr::Object(&self.faction)),
            _ => None,
        }
    }
}

/// Portal User entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortalUser {
    pub id: Uuid,
    pub username: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub user_type: UserType,

    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub is_staff: bool,
    #[serde(default)]
    pub is_superuser: bool,
    #[serde(default = "default_active")]
    pub is_active: bool,

    /// Granted permissions, e.g. `app.edit_faction`.
    #[serde(default)]
    pub permissions: BTreeSet<String>,

    #[serde(default)]
    pub faculty_profile: Option<FacultyProfile>,
    #[serde(default)]
    pub leader_profile: Option<LeaderProfile>,
}

fn default_active() -> bool {
    true
}

impl PortalUser {
    pub fn new(username: String, user_type: UserType) -> Self {
        let username = username.trim().to_string();
        Self {
            id: Uuid::new_v4(),
            slug: Some(username.to_lowercase()),
            username,
            user_type,
            is_admin: false,
            is_staff: false,
            is_superuser: false,
            is_active: true,
            permissions: BTreeSet::new(),
            faculty_profile: None,
            leader_profile: None,
        }
    }

    pub fn with_admin(mut self, is_admin: bool) -> Self {
        self.is_admin = is_admin;
        self
    }

    pub fn with_permission(mut self, permission: &str) -> Self {
        self.permissions.insert(permission.to_string());
        self
    }

    pub fn with_faculty_profile(mut self, profile: FacultyProfile) -> Self {
        self.faculty_profile = Some(profile);
        self
    }

    pub fn with_leader_profile(mut self, profile: LeaderProfile) -> Self {
        self.leader_profile = Some(profile);
        self
    }
}

impl Principal for PortalUser {
    fn user_type(&self) -> UserType {
        self.user_type.clone()
    }

    fn is_admin(&self) -> bool {
        self.is_admin
    }

    fn is_authenticated(&self) -> bool {
        true
    }

    fn is_staff(&self) -> bool {
        self.is_staff
    }

    fn is_superuser(&self) -> bool {
        self.is_superuser
    }

    fn has_perm(&self, permission: &str) -> bool {
        self.is_active && (self.is_superuser || self.permissions.contains(permission))
    }
}

impl AttributeSource for PortalUser {
    fn attr(&self, name: &str) -> Option<Attr<'_>> {
        match name {
            "id" => Some(Attr::value(self.id)),
            "username" => Some(Attr::value(self.username.as_str())),
            "slug" => Attr::text(&self.slug),
            "user_type" => Some(Attr::value(self.user_type.as_str())),
            "is_admin" => Some(Attr::value(self.is_admin)),
            "facultyprofile" => self
                .faculty_profile
                .as_ref()
                .map(|p| Attr::Object(p as &dyn AttributeSource)),
            "leaderprofile" => self
                .leader_profile
                .as_ref()
                .map(|p| Attr::Object(p as &dyn AttributeSource)),
            _ => None,
        }
    }
}
