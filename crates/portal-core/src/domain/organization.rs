// ============================================================================
// Portal Core - Organization Entities
// File: crates/portal-core/src/domain/organization.rs
// Description: Factions, facilities and enrollments listed in portal tables
// ============================================================================

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use portal_shared::Scalar;

use crate::domain::record::{ModelMeta, Record};
use crate::navigation::attributes::{Attr, AttributeSource};

pub const FACILITY_MODEL: ModelMeta = ModelMeta::new("facilities", "facility", true);
pub const FACTION_MODEL: ModelMeta = ModelMeta::new("factions", "faction", true);
pub const ENROLLMENT_MODEL: ModelMeta = ModelMeta::new("enrollment", "enrollment", false);

/// Facility entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facility {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

impl Facility {
    pub fn new(id: i64, name: String, slug: String) -> Self {
        Self {
            id,
            name: name.trim().to_string(),
            slug: slug.trim().to_string(),
        }
    }
}

impl AttributeSource for Facility {
    fn attr(&self, name: &str) -> Option<Attr<'_>> {
        match name {
            "id" | "pk" => Some(Attr::value(self.id)),
            "name" => Some(Attr::value(self.name.as_str())),
            "slug" => Some(Attr::value(self.slug.as_str())),
            _ => None,
        }
    }
}

impl Record for Facility {
    fn meta(&self) -> &ModelMeta {
        &FACILITY_MODEL
    }

    fn pk(&self) -> Option<Scalar> {
        Some(Scalar::Int(self.id))
    }
}

/// Faction entity (a node of the organizational hierarchy)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Faction {
    pub id: i64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub parent: Option<Box<Faction>>,
}

impl Faction {
    pub fn new(id: i64, name: String, slug: String) -> Self {
        Self {
            id,
            name: name.trim().to_string(),
            slug: slug.trim().to_string(),
            parent: None,
        }
    }

    pub fn with_parent(mut self, parent: Faction) -> Self {
        self.parent = Some(Box::new(parent));
        self
    }
}

impl AttributeSource for Faction {
    fn attr(&self, name: &str) -> Option<Attr<'_>> {
        match name {
            "id" | "pk" => Some(Attr::value(self.id)),
            "name" => Some(Attr::value(self.name.as_str())),
            "slug" => Some(Attr::value(self.slug.as_str())),
            "parent" => self
                .parent
                .as_deref()
                .map(|p| Attr::Object(p as &dyn AttributeSource)),
            _ => None,
        }
    }
}

impl Record for Faction {
    fn meta(&self) -> &ModelMeta {
        &FACTION_MODEL
    }

    fn pk(&self) -> Option<Scalar> {
        Some(Scalar::Int(self.id))
    }
}

/// Enrollment of an attendee into a faction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: i64,
    pub attendee_id: Uuid,
    pub attendee_slug: Option<String>,
    pub faction: Faction,
}

impl AttributeSource for Enrollment {
    fn attr(&self, name: &str) -> Option<Attr<'_>> {
        match name {
            "id" | "pk" => Some(Attr::value(self.id)),
            "attendee_id" => Some(Attr::value(self.attendee_id)),
            "attendee_slug" => Attr::text(&self.attendee_slug),
            "faction" => Some(Attr::Object(&self.faction)),
            _ => None,
        }
    }
}

impl Record for Enrollment {
    fn meta(&self) -> &ModelMeta {
        &ENROLLMENT_MODEL
    }

    fn pk(&self) -> Option<Scalar> {
        Some(Scalar::Int(self.id))
    }
}
