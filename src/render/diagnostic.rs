use crate::nodes::key::NodeKey;
use std::fmt::{Display, Formatter};

/// A condition that was rendered as a fallback visual instead of failing the pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    ConfigurationMissing,
    ConfigurationEmpty,
    UnknownComponentType { key: NodeKey, tag: String },
    MalformedLeafPayload { key: NodeKey, field: &'static str },
    DepthLimitExceeded { key: NodeKey },
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Diagnostic::ConfigurationMissing => write!(f, "page configuration is missing"),
            Diagnostic::ConfigurationEmpty => write!(f, "page configuration has no components"),
            Diagnostic::UnknownComponentType { key, tag } => {
                write!(f, "{}: unknown component type '{}'", key, tag)
            }
            Diagnostic::MalformedLeafPayload { key, field } => {
                write!(f, "{}: missing or invalid '{}'", key, field)
            }
            Diagnostic::DepthLimitExceeded { key } => write!(f, "{}: nesting too deep", key),
        }
    }
}
