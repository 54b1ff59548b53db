// ============================================================================
// Portal Core - Attribute Resolution
// File: crates/portal-core/src/navigation/attributes.rs
// Description: Delimited attribute paths over typed object graphs
// ============================================================================

use portal_shared::Scalar;
use tracing::warn;

/// Segment separator of an attribute path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    /// `user.facultyprofile.facility.slug`
    Dot,
    /// `faction__slug`
    DoubleUnderscore,
}

impl Delimiter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Delimiter::Dot => ".",
            Delimiter::DoubleUnderscore => "__",
        }
    }
}

/// Result of looking up a single path segment.
pub enum Attr<'a> {
    Value(Scalar),
    Object(&'a dyn AttributeSource),
}

impl<'a> Attr<'a> {
    pub fn value(value: impl Into<Scalar>) -> Self {
        Attr::Value(value.into())
    }

    pub fn text(value: &Option<String>) -> Option<Self> {
        value.as_ref().map(|s| Attr::Value(Scalar::Str(s.clone())))
    }
}

/// Objects that can be walked by attribute paths.
pub trait AttributeSource {
    /// Returns `None` when the object has no such attribute, or it is unset.
    fn attr(&self, name: &str) -> Option<Attr<'_>>;
}

/// Resolves `path` against `root`, one segment at a time.
///
/// Returns `None` when a segment is missing, when a scalar is traversed as an
/// object, or when the path ends on an object rather than a scalar.
pub fn resolve<S>(root: &S, path: &str, delimiter: Delimiter) -> Option<Scalar>
where
    S: AttributeSource + ?Sized,
{
    let mut segments = path.split(delimiter.as_str());
    let first = segments.next()?;
    let mut current = lookup(root, first, path)?;

    for segment in segments {
        let object = match current {
            Attr::Object(object) => object,
            Attr::Value(_) => {
                warn!("Attribute '{}' in '{}' is None.", segment, path);
                return None;
            }
        };
        current = lookup(object, segment, path)?;
    }

    match current {
        Attr::Value(value) => Some(value),
        Attr::Object(_) => {
            warn!("Path '{}' ends on an object, not a value.", path);
            None
        }
    }
}

fn lookup<'a, S>(object: &'a S, segment: &str, path: &str) -> Option<Attr<'a>>
where
    S: AttributeSource + ?Sized,
{
    let found = object.attr(segment);
    if found.is_none() {
        warn!("Attribute '{}' in '{}' is None.", segment, path);
    }
    found
}

/// Root of user-context paths: exposes the current user as `user`.
pub struct UserContext<'a> {
    user: &'a dyn AttributeSource,
}

impl<'a> UserContext<'a> {
    pub fn new(user: &'a dyn AttributeSource) -> Self {
        Self { user }
    }
}

impl AttributeSource for UserContext<'_> {
    fn attr(&self, name: &str) -> Option<Attr<'_>> {
        match name {
            "user" => Some(Attr::Object(self.user)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Facility {
        slug: Option<String>,
    }

    impl AttributeSource for Facility {
        fn attr(&self, name: &str) -> Option<Attr<'_>> {
            match name {
                "slug" => Attr::text(&self.slug),
                "capacity" => Some(Attr::value(120)),
                _ => None,
            }
        }
    }

    struct Profile {
        facility: Facility,
    }

    impl AttributeSource for Profile {
        fn attr(&self, name: &str) -> Option<Attr<'_>> {
            match name {
                "facility" => Some(Attr::Object(&self.facility)),
                _ => None,
            }
        }
    }

    fn profile(slug: Option<&str>) -> Profile {
        Profile {
            facility: Facility {
                slug: slug.map(str::to_string),
            },
        }
    }

    #[test]
    fn test_resolve_nested_value() {
        let profile = profile(Some("north-campus"));
        assert_eq!(
            resolve(&profile, "facility.slug", Delimiter::Dot),
            Some(Scalar::from("north-campus"))
        );
        assert_eq!(
            resolve(&profile, "facility__capacity", Delimiter::DoubleUnderscore),
            Some(Scalar::Int(120))
        );
    }

    #[test]
    fn test_resolve_missing_segment() {
        let profile = profile(Some("north-campus"));
        assert_eq!(resolve(&profile, "facility.owner.slug", Delimiter::Dot), None);
        assert_eq!(resolve(&profile, "department", Delimiter::Dot), None);
    }

    #[test]
    fn test_resolve_unset_value() {
        let profile = profile(None);
        assert_eq!(resolve(&profile, "facility.slug", Delimiter::Dot), None);
    }

    #[test]
    fn test_resolve_through_scalar_or_ending_on_object() {
        let profile = profile(Some("north-campus"));
        assert_eq!(resolve(&profile, "facility.slug.length", Delimiter::Dot), None);
        assert_eq!(resolve(&profile, "facility", Delimiter::Dot), None);
    }

    #[test]
    fn test_delimiter_is_per_call_site() {
        let profile = profile(Some("north-campus"));
        // A dotted path under the record delimiter is a single unknown segment.
        assert_eq!(resolve(&profile, "facility.slug", Delimiter::DoubleUnderscore), None);
    }

    #[test]
    fn test_user_context_root() {
        let profile = profile(Some("north-campus"));
        let context = UserContext::new(&profile);
        assert_eq!(
            resolve(&context, "user.facility.slug", Delimiter::Dot),
            Some(Scalar::from("north-campus"))
        );
        assert_eq!(resolve(&context, "facility.slug", Delimiter::Dot), None);
    }
}
