//! # Portal Core - Navigation
//! 
//! Role menus, dynamic URL parameters, route reversal and row actions.

pub mod attributes;
pub mod catalog;
pub mod selector;
pub mod binder;
pub mod routes;
pub mod actions;
pub mod permission;
pub mod table;
pub mod labels;

pub use attributes::{resolve, Attr, AttributeSource, Delimiter, UserContext};
pub use catalog::{MenuCatalog, MenuKind};
pub use selector::{select_menu, select_menu_kind};
pub use binder::{bind_entry, bind_menu};
pub use routes::{NoReverseMatch, RouteKwargs, RouteReverser, RouteTable};
pub use actions::{build_url_kwargs, default_specs, ActionUrlBuilder};
pub use permission::PermissionGate;
pub use table::ActionTable;
pub use labels::{OrganizationLabels, TableLabels, table_labels};
