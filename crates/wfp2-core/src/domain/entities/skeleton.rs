//! Skeleton identifiers.

use std::fmt;

/// Generator whose skeleton set scaffolds controllers.
pub const CONTROLLER_GENERATOR: &str = "controller";

/// The three skeleton files of the controller generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    Controller,
    Action,
    View,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 3] = [Self::Controller, Self::Action, Self::View];

    /// File name inside the generator's skeleton directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Controller => "controller.php",
            Self::Action => "action.php",
            Self::View => "view.html",
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Controller => write!(f, "controller"),
            Self::Action => write!(f, "action"),
            Self::View => write!(f, "view"),
        }
    }
}

/// Addresses one skeleton file: `(generator name, template file name)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SkeletonId {
    generator: String,
    file_name: String,
}

impl SkeletonId {
    pub fn new(generator: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            generator: generator.into(),
            file_name: file_name.into(),
        }
    }

    /// Skeleton of the controller generator for `kind`.
    pub fn controller(kind: TemplateKind) -> Self {
        Self::new(CONTROLLER_GENERATOR, kind.file_name())
    }

    pub fn generator(&self) -> &str {
        &self.generator
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

impl fmt::Display for SkeletonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.generator, self.file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn controller_skeletons_use_fixed_file_names() {
        assert_eq!(
            SkeletonId::controller(TemplateKind::View).to_string(),
            "controller/view.html"
        );
        assert_eq!(TemplateKind::Controller.file_name(), "controller.php");
        assert_eq!(TemplateKind::Action.file_name(), "action.php");
    }
}
