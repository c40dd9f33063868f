//! Generation inputs.

use serde::Serialize;

use crate::domain::{
    error::DomainError,
    naming::{self, ACTION_SUFFIX, CONTROLLER_SUFFIX},
};

/// One `generate:controller` invocation as parsed from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    extension_slug: Option<String>,
    raw_controller_name: String,
}

impl GenerationRequest {
    pub fn new(extension_slug: Option<String>, raw_controller_name: impl Into<String>) -> Self {
        Self {
            extension_slug,
            raw_controller_name: raw_controller_name.into(),
        }
    }

    /// The extension key.
    ///
    /// # Errors
    ///
    /// [`DomainError::MissingParameter`] if no (or an empty) extension was given.
    pub fn extension_slug(&self) -> Result<&str, DomainError> {
        self.extension_slug
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or(DomainError::MissingParameter { name: "extension" })
    }

    /// The controller name exactly as typed; used for the templates directory.
    pub fn raw_controller_name(&self) -> &str {
        &self.raw_controller_name
    }

    /// Class name with the `Controller` suffix enforced.
    pub fn controller_class_name(&self) -> String {
        naming::ensure_suffix(&self.raw_controller_name, CONTROLLER_SUFFIX)
    }
}

/// One action collected during the interactive loop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionSpec {
    pub raw_action_name: String,
    pub normalized_action_name: String,
    /// View file path relative to the extension root directory.
    pub view_relative_path: String,
}

impl ActionSpec {
    pub fn new(raw_action_name: impl Into<String>, view_relative_path: impl Into<String>) -> Self {
        let raw_action_name = raw_action_name.into();
        Self {
            normalized_action_name: naming::ensure_suffix(&raw_action_name, ACTION_SUFFIX),
            raw_action_name,
            view_relative_path: view_relative_path.into(),
        }
    }

    /// `list` -> `List.html`.
    pub fn view_file_name(raw_action_name: &str) -> String {
        format!(
            "{}.html",
            naming::title_case_first_letter_lower_rest(raw_action_name)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_extension_is_reported() {
        let req = GenerationRequest::new(None, "Blog");
        assert_eq!(
            req.extension_slug(),
            Err(DomainError::MissingParameter { name: "extension" })
        );
    }

    #[test]
    fn empty_extension_counts_as_missing() {
        let req = GenerationRequest::new(Some(String::new()), "Blog");
        assert!(req.extension_slug().is_err());
    }

    #[test]
    fn controller_class_name_gets_suffix() {
        let req = GenerationRequest::new(Some("wfp2_demo".into()), "Blog");
        assert_eq!(req.controller_class_name(), "BlogController");
        assert_eq!(req.raw_controller_name(), "Blog");
    }

    #[test]
    fn action_spec_normalizes_name() {
        let spec = ActionSpec::new("list", "wfp2_demo/Resources/Private/Templates/Blog/List.html");
        assert_eq!(spec.normalized_action_name, "listAction");
        assert_eq!(spec.raw_action_name, "list");
    }

    #[test]
    fn view_file_name_is_title_cased() {
        assert_eq!(ActionSpec::view_file_name("list"), "List.html");
        assert_eq!(ActionSpec::view_file_name("SHOWALL"), "Showall.html");
    }
}
