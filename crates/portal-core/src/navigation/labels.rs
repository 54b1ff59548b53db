//! Organization-specific table and column labels.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Label overrides of an organization, keyed `{field}_label`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrganizationLabels {
    #[serde(flatten)]
    labels: HashMap<String, String>,
}

impl OrganizationLabels {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_label(mut self, field: &str, label: &str) -> Self {
        self.labels.insert(format!("{}_label", field), label.to_string());
        self
    }

    /// The organization's label for `field`, else a title-cased form of it.
    pub fn verbose_name(&self, field: &str) -> String {
        self.labels
            .get(&format!("{}_label", field))
            .cloned()
            .unwrap_or_else(|| humanize(field))
    }
}

/// `facultyProfile` -> `Faculty Profile`, `start_date` -> `Start Date`.
pub fn humanize(field: &str) -> String {
    let chars: Vec<char> = field.chars().collect();
    let mut spaced = String::with_capacity(field.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() && i > 0 {
            let prev_lower = chars[i - 1].is_lowercase();
            let next_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev_lower || next_lower {
                spaced.push(' ');
            }
        }
        spaced.push(if c == '_' { ' ' } else { c });
    }

    spaced
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Table caption and column headers after applying organization labels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableLabels {
    pub verbose_name: Option<String>,
    pub columns: Vec<(String, String)>,
}

/// Without organization labels nothing is relabelled: the caption stays
/// unset and columns keep their humanized names.
pub fn table_labels(
    model_name: &str,
    columns: &[&str],
    labels: Option<&OrganizationLabels>,
) -> TableLabels {
    match labels {
        Some(labels) => TableLabels {
            verbose_name: Some(labels.verbose_name(model_name)),
            columns: columns
                .iter()
                .map(|c| (c.to_string(), labels.verbose_name(c)))
                .collect(),
        },
        None => TableLabels {
            verbose_name: None,
            columns: columns.iter().map(|c| (c.to_string(), humanize(c))).collect(),
        },
    }
}
