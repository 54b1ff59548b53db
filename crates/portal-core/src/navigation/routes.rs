// ============================================================================
// Portal Core - Route Reversal
// File: crates/portal-core/src/navigation/routes.rs
// Description: Named route table turning route names + parameters into paths
// ============================================================================

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::LazyLock;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::Regex;
use thiserror::Error;

use portal_shared::Scalar;

use crate::error::DomainError;

pub type RouteKwargs = BTreeMap<String, Scalar>;

/// Everything but RFC 3986 unreserved characters is escaped in a path value.
const PATH_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)(?::([A-Za-z]+))?\}").expect("placeholder regex")
});
static SLUG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-A-Za-z0-9_]+$").expect("slug regex"));
static INT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("int regex"));

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NoReverseMatch {
    #[error("Route not found: {0}")]
    UnknownRoute(String),

    #[error("Route {name} expects parameters {expected:?}, got {given:?}")]
    ParameterMismatch {
        name: String,
        expected: Vec<String>,
        given: Vec<String>,
    },

    #[error("Value '{value}' for parameter {param} of route {name} is not a valid {converter}")]
    InvalidValue {
        name: String,
        param: String,
        value: String,
        converter: &'static str,
    },
}

/// Route reversal capability consumed by menus and action links.
#[cfg_attr(test, mockall::automock)]
pub trait RouteReverser: Send + Sync {
    fn reverse(&self, name: &str, kwargs: &RouteKwargs) -> Result<String, NoReverseMatch>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Converter {
    Str,
    Slug,
    Int,
}

impl Converter {
    fn from_str(s: &str) -> Option<Self> {
        match s {
            "str" => Some(Converter::Str),
            "slug" => Some(Converter::Slug),
            "int" => Some(Converter::Int),
            _ => None,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Converter::Str => "str",
            Converter::Slug => "slug",
            Converter::Int => "int",
        }
    }

    fn accepts(&self, value: &Scalar) -> bool {
        match (self, value) {
            (Converter::Int, Scalar::Int(i)) => *i >= 0,
            (Converter::Int, Scalar::Str(s)) => INT.is_match(s),
            (Converter::Int, Scalar::Bool(_)) => false,
            (Converter::Slug, v) => SLUG.is_match(&v.to_string()),
            (Converter::Str, v) => {
                let s = v.to_string();
                !s.is_empty() && !s.contains('/')
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Part {
    Literal(String),
    Param { name: String, converter: Converter },
}

#[derive(Debug, Clone)]
struct RoutePattern {
    parts: Vec<Part>,
    params: BTreeSet<String>,
}

impl RoutePattern {
    fn parse(name: &str, pattern: &str) -> Result<Self, DomainError> {
        let invalid = |reason: String| DomainError::InvalidRoutePattern {
            name: name.to_string(),
            reason,
        };

        if !pattern.starts_with('/') {
            return Err(invalid(format!("pattern '{}' must start with '/'", pattern)));
        }

        let mut parts = Vec::new();
        let mut params = BTreeSet::new();
        let mut last = 0;
        for caps in PLACEHOLDER.captures_iter(pattern) {
            let (Some(whole), Some(param)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            let converter = match caps.get(2) {
                Some(c) => Converter::from_str(c.as_str())
                    .ok_or_else(|| invalid(format!("unknown converter '{}'", c.as_str())))?,
                None => Converter::Str,
            };
            if !params.insert(param.as_str().to_string()) {
                return Err(invalid(format!("duplicate parameter '{}'", param.as_str())));
            }
            if whole.start() > last {
                parts.push(Part::Literal(pattern[last..whole.start()].to_string()));
            }
            parts.push(Part::Param {
                name: param.as_str().to_string(),
                converter,
            });
            last = whole.end();
        }
        if last < pattern.len() {
            parts.push(Part::Literal(pattern[last..].to_string()));
        }

        if parts.iter().any(|p| matches!(p, Part::Literal(l) if l.contains(['{', '}']))) {
            return Err(invalid(format!("malformed placeholder in '{}'", pattern)));
        }

        Ok(Self { parts, params })
    }
}

/// Route table mapping route names (`facilities:manage`) to path patterns
/// (`/facilities/{slug:slug}/departments/`).
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: HashMap<String, RoutePattern>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_patterns(patterns: &HashMap<String, String>) -> Result<Self, DomainError> {
        let mut table = Self::new();
        for (name, pattern) in patterns {
            table.insert(name, pattern)?;
        }
        Ok(table)
    }

    pub fn insert(&mut self, name: &str, pattern: &str) -> Result<(), DomainError> {
        let parsed = RoutePattern::parse(name, pattern)?;
        self.routes.insert(name.to_string(), parsed);
        Ok(())
    }

    pub fn with_route(mut self, name: &str, pattern: &str) -> Result<Self, DomainError> {
        self.insert(name, pattern)?;
        Ok(self)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.routes.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl RouteReverser for RouteTable {
    fn reverse(&self, name: &str, kwargs: &RouteKwargs) -> Result<String, NoReverseMatch> {
        let pattern = self
            .routes
            .get(name)
            .ok_or_else(|| NoReverseMatch::UnknownRoute(name.to_string()))?;

        // Parameters must match exactly; extras are rejected as well.
        if !kwargs.keys().eq(pattern.params.iter()) {
            return Err(NoReverseMatch::ParameterMismatch {
                name: name.to_string(),
                expected: pattern.params.iter().cloned().collect(),
                given: kwargs.keys().cloned().collect(),
            });
        }

        let mut url = String::new();
        for part in &pattern.parts {
            match part {
                Part::Literal(literal) => url.push_str(literal),
                Part::Param { name: param, converter } => {
                    let value = &kwargs[param];
                    if !converter.accepts(value) {
                        return Err(NoReverseMatch::InvalidValue {
                            name: name.to_string(),
                            param: param.clone(),
                            value: value.to_string(),
                            converter: converter.as_str(),
                        });
                    }
                    url.extend(utf8_percent_encode(&value.to_string(), PATH_VALUE));
                }
            }
        }
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kwargs(pairs: &[(&str, Scalar)]) -> RouteKwargs {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    fn table() -> RouteTable {
        RouteTable::new()
            .with_route("home", "/")
            .unwrap()
            .with_route("factions:faction:edit", "/factions/{slug:slug}/edit/")
            .unwrap()
            .with_route("enrollment:enrollment:show", "/enrollments/{pk:int}/")
            .unwrap()
            .with_route("attendees:enrollment:index_by_attendee", "/attendees/{slug}/enrollments/")
            .unwrap()
    }

    #[test]
    fn test_reverse_static_and_parameterized() {
        let table = table();
        assert_eq!(table.reverse("home", &RouteKwargs::new()).unwrap(), "/");
        assert_eq!(
            table
                .reverse("factions:faction:edit", &kwargs(&[("slug", Scalar::from("acme"))]))
                .unwrap(),
            "/factions/acme/edit/"
        );
        assert_eq!(
            table
                .reverse("enrollment:enrollment:show", &kwargs(&[("pk", Scalar::Int(12))]))
                .unwrap(),
            "/enrollments/12/"
        );
    }

    #[test]
    fn test_reverse_unknown_route() {
        let err = table().reverse("reports", &RouteKwargs::new()).unwrap_err();
        assert_eq!(err, NoReverseMatch::UnknownRoute("reports".to_string()));
    }

    #[test]
    fn test_reverse_requires_exact_parameters() {
        let table = table();
        assert!(matches!(
            table.reverse("factions:faction:edit", &RouteKwargs::new()),
            Err(NoReverseMatch::ParameterMismatch { .. })
        ));
        assert!(matches!(
            table.reverse("home", &kwargs(&[("slug", Scalar::from("acme"))])),
            Err(NoReverseMatch::ParameterMismatch { .. })
        ));
    }

    #[test]
    fn test_reverse_checks_converters() {
        let table = table();
        assert!(matches!(
            table.reverse("factions:faction:edit", &kwargs(&[("slug", Scalar::from("a b"))])),
            Err(NoReverseMatch::InvalidValue { converter: "slug", .. })
        ));
        assert!(matches!(
            table.reverse("enrollment:enrollment:show", &kwargs(&[("pk", Scalar::from("x1"))])),
            Err(NoReverseMatch::InvalidValue { converter: "int", .. })
        ));
        assert!(table
            .reverse(
                "attendees:enrollment:index_by_attendee",
                &kwargs(&[("slug", Scalar::from("a/b"))])
            )
            .is_err());
    }

    #[test]
    fn test_reverse_escapes_values() {
        let table = table();
        assert_eq!(
            table
                .reverse(
                    "attendees:enrollment:index_by_attendee",
                    &kwargs(&[("slug", Scalar::from("a b?admin=1#x"))])
                )
                .unwrap(),
            "/attendees/a%20b%3Fadmin%3D1%23x/enrollments/"
        );
        assert_eq!(
            table
                .reverse(
                    "attendees:enrollment:index_by_attendee",
                    &kwargs(&[("slug", Scalar::from("dewi.s_01~x"))])
                )
                .unwrap(),
            "/attendees/dewi.s_01~x/enrollments/"
        );
    }

    #[test]
    fn test_invalid_patterns() {
        assert!(RouteTable::new().with_route("x", "no-slash/").is_err());
        assert!(RouteTable::new().with_route("x", "/{slug:uuid}/").is_err());
        assert!(RouteTable::new().with_route("x", "/{a}/{a}/").is_err());
        assert!(RouteTable::new().with_route("x", "/{a-b}/").is_err());
    }

    #[test]
    fn test_from_patterns() {
        let mut patterns = HashMap::new();
        patterns.insert("help".to_string(), "/help/".to_string());
        patterns.insert("login".to_string(), "/accounts/login/".to_string());
        let table = RouteTable::from_patterns(&patterns).unwrap();
        assert_eq!(table.len(), 2);
        assert!(table.contains("login"));
    }
}
