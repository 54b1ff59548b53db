//! Role-based menu selection.

use crate::domain::{MenuEntry, Principal, UserType};
use crate::navigation::catalog::{MenuCatalog, MenuKind};

/// Picks the menu for a role. Admin variants take precedence; unknown
/// roles get no menu.
pub fn select_menu_kind(user_type: UserType, is_admin: bool) -> Option<MenuKind> {
    match (user_type, is_admin) {
        (UserType::Faculty, true) => Some(MenuKind::FacultyAdmin),
        (UserType::Leader, true) => Some(MenuKind::LeaderAdmin),
        (UserType::Faculty, false) => Some(MenuKind::Faculty),
        (UserType::Attendee, _) => Some(MenuKind::Attendee),
        (UserType::Leader, false) => Some(MenuKind::Leader),
        (UserType::OrganizationFaculty, _) => Some(MenuKind::OrganizationFaculty),
        (UserType::Other(_), _) => None,
    }
}

/// Working copy of the caller's menu; empty for anonymous callers.
pub fn select_menu<P>(catalog: &MenuCatalog, user: Option<&P>) -> Vec<MenuEntry>
where
    P: Principal + ?Sized,
{
    match user {
        Some(user) if user.is_authenticated() => {
            select_menu_kind(user.user_type(), user.is_admin())
                .map(|kind| catalog.menu(kind))
                .unwrap_or_default()
        }
        _ => Vec::new(),
    }
}
