//! Row action permission gate.

use portal_shared::config::NavigationSettings;

use crate::domain::{Principal, Record};

/// Decides which row actions a user may see.
#[derive(Debug, Clone)]
pub struct PermissionGate {
    domain: String,
    /// Outcome when no user is present. Enabled by default, which exposes
    /// every action to anonymous callers unless routing restricts them.
    allow_anonymous_default: bool,
}

impl Default for PermissionGate {
    fn default() -> Self {
        Self::from_settings(&NavigationSettings::default())
    }
}

impl PermissionGate {
    pub fn new(domain: &str, allow_anonymous_default: bool) -> Self {
        Self {
            domain: domain.to_string(),
            allow_anonymous_default,
        }
    }

    pub fn from_settings(settings: &NavigationSettings) -> Self {
        Self::new(&settings.permission_domain, settings.allow_anonymous_default)
    }

    pub fn allow_anonymous_default(&self) -> bool {
        self.allow_anonymous_default
    }

    /// `{domain}.{action}_{model_name}`
    pub fn permission_name(&self, action: &str, model_name: &str) -> String {
        format!("{}.{}_{}", self.domain, action, model_name)
    }

    pub fn is_allowed<P>(&self, user: Option<&P>, action: &str, record: &dyn Record) -> bool
    where
        P: Principal + ?Sized,
    {
        match user {
            None => self.allow_anonymous_default,
            Some(user) => {
                user.has_perm(&self.permission_name(action, record.meta().model_name))
                    || Self::role_allows(user, action)
            }
        }
    }

    /// Leader and faculty admins may do anything; `promote` only needs the role.
    fn role_allows<P>(user: &P, action: &str) -> bool
    where
        P: Principal + ?Sized,
    {
        let privileged = user.user_type().is_privileged();
        (privileged && user.is_admin()) || (action == "promote" && privileged)
    }
}
