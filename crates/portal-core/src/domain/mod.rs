//! # Portal Core - Domain Module
//! 
//! Domain entities for the campus portal.

pub mod user;
pub mod organization;
pub mod record;
pub mod menu;
pub mod action;
pub mod theme;

// Re-export all entities and enums
pub use user::{PortalUser, UserType, Principal, FacultyProfile, LeaderProfile};
pub use organization::{Facility, Faction, Enrollment, FACILITY_MODEL, FACTION_MODEL, ENROLLMENT_MODEL};
pub use record::{ModelMeta, Record};
pub use menu::{MenuEntry, DynamicParam, TopLink, Visibility, MenuLink, TopLinkView};
pub use action::{ActionSpec, ActionSpecs, KwargSpec, ResolvedAction};
pub use theme::ColorScheme;
