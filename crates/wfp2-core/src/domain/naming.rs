//! Name derivation rules.
//!
//! Turns the raw strings a user types (extension keys, controller and action
//! names) into the identifiers that end up in generated PHP source.
//!
//! | Input                | Rule                    | Output                 |
//! |----------------------|-------------------------|------------------------|
//! | `wfp2_demo`          | [`derive_namespace`]    | `WFP2\Demo`            |
//! | `Blog`               | [`ensure_suffix`]       | `BlogController`       |
//! | `list`               | [`ensure_suffix`]       | `listAction`           |
//! | `list`               | [`title_case_first_letter_lower_rest`] | `List`  |

use std::fmt;

use serde::Serialize;

use crate::domain::error::DomainError;

/// Separator between namespace segments in generated PHP code.
pub const NAMESPACE_SEPARATOR: &str = "\\";

pub const CONTROLLER_SUFFIX: &str = "Controller";
pub const ACTION_SUFFIX: &str = "Action";

/// A PHP namespace, kept as its segments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub struct NamespacePath {
    segments: Vec<String>,
}

impl NamespacePath {
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// A new namespace with `segment` appended, e.g. `WFP2\Demo` -> `WFP2\Demo\Controller`.
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.into());
        Self { segments }
    }
}

impl fmt::Display for NamespacePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join(NAMESPACE_SEPARATOR))
    }
}

impl From<NamespacePath> for String {
    fn from(value: NamespacePath) -> Self {
        value.to_string()
    }
}

/// Derive the vendor namespace for an extension key.
///
/// The key is split on `_`. The first segment becomes the vendor and is
/// upper-cased entirely; every later segment is title-cased. Empty segments
/// (from doubled underscores) are kept as they are.
///
/// # Errors
///
/// [`DomainError::EmptyIdentifier`] if `slug` is empty.
pub fn derive_namespace(slug: &str) -> Result<NamespacePath, DomainError> {
    if slug.is_empty() {
        return Err(DomainError::EmptyIdentifier { field: "extension" });
    }

    let segments = slug
        .split('_')
        .enumerate()
        .map(|(index, part)| {
            if index == 0 {
                part.to_uppercase()
            } else {
                title_case_first_letter_lower_rest(part)
            }
        })
        .collect();

    Ok(NamespacePath { segments })
}

/// Append `suffix` unless `name` already contains it.
///
/// Containment, not a trailing match: `ControllerFactory` counts as already
/// suffixed with `Controller`.
pub fn ensure_suffix(name: &str, suffix: &str) -> String {
    if name.contains(suffix) {
        name.to_owned()
    } else {
        format!("{name}{suffix}")
    }
}

/// Lower-case everything, then upper-case the first character.
pub fn title_case_first_letter_lower_rest(s: &str) -> String {
    let lowered = s.to_lowercase();
    let mut chars = lowered.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(lowered.len());
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}
