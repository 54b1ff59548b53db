//! Binds dynamic menu parameters against the current user.

use tracing::{debug, warn};

use crate::domain::{DynamicParam, MenuEntry};
use crate::navigation::attributes::{resolve, AttributeSource, Delimiter};

/// Resolves every pending dynamic parameter of `entry` and its sub-items in
/// place. Parameters that are already resolved are left as they are.
pub fn bind_entry(entry: &mut MenuEntry, context: &dyn AttributeSource) {
    for (key, param) in entry.dynamic_params.iter_mut() {
        let DynamicParam::Pending(path) = param else {
            continue;
        };
        let value = match path.as_deref() {
            Some(path) if !path.is_empty() => {
                debug!("Processing dynamic param: {}", path);
                resolve(context, path, Delimiter::Dot)
            }
            _ => {
                warn!("Dynamic param for key '{}' is None.", key);
                None
            }
        };
        *param = DynamicParam::Resolved(value);
    }

    for sub_item in entry.sub_items.iter_mut() {
        bind_entry(sub_item, context);
    }
}

pub fn bind_menu(menu: &mut [MenuEntry], context: &dyn AttributeSource) {
    for entry in menu.iter_mut() {
        bind_entry(entry, context);
    }
}
