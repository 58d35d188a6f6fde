//! Read-only views over a page descriptor.
//!
//! Descriptors arrive as arbitrary JSON. Each node is normalized exactly once, when the walker
//! first visits it, so that strategies only ever see a [`ComponentNode`].

use crate::result::{PageTreeError, PageTreeErrorKind, PageTreeResult};
use crate::types::{JsonMap, Value};
use std::fmt::{Display, Formatter};

const EMPTY_CHILDREN: &[Value] = &[];

/// The top-level shape of a descriptor after the initial check.
#[derive(Debug, Clone, Copy)]
pub enum PageDescriptor<'a> {
    /// `null`: nothing was configured.
    Missing,
    /// A component list, possibly empty.
    Components(&'a [Value]),
}

impl<'a> PageDescriptor<'a> {
    /// Rejects values that are not a tree at all; everything else is accepted.
    pub fn from_value(value: &'a Value) -> PageTreeResult<Self> {
        match value {
            Value::Null => Ok(PageDescriptor::Missing),
            Value::Array(components) => Ok(PageDescriptor::Components(components)),
            Value::Object(object) => Ok(PageDescriptor::Components(
                object
                    .get("components")
                    .and_then(Value::as_array)
                    .map(Vec::as_slice)
                    .unwrap_or(EMPTY_CHILDREN),
            )),
            other => Err(PageTreeError::new(PageTreeErrorKind::InvalidDescriptor(
                format!("expected an object or an array, got {}", json_kind(other)),
            ))),
        }
    }
}

/// The `type` field of a node as it was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeTag<'a> {
    Named(&'a str),
    Missing,
    Invalid(&'a Value),
}

impl<'a> NodeTag<'a> {
    pub fn name(&self) -> Option<&'a str> {
        match *self {
            NodeTag::Named(name) => Some(name),
            _ => None,
        }
    }
}

impl Display for NodeTag<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeTag::Named(name) => write!(f, "{}", name),
            NodeTag::Missing => write!(f, "missing type"),
            NodeTag::Invalid(value) => write!(f, "{}", value),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ComponentNode<'a> {
    tag: NodeTag<'a>,
    object: Option<&'a JsonMap>,
}

impl<'a> ComponentNode<'a> {
    pub fn from_value(value: &'a Value) -> Self {
        let Value::Object(object) = value else {
            return Self {
                tag: NodeTag::Missing,
                object: None,
            };
        };
        let tag = match object.get("type") {
            None | Some(Value::Null) => NodeTag::Missing,
            Some(Value::String(name)) => NodeTag::Named(name),
            Some(other) => NodeTag::Invalid(other),
        };
        Self {
            tag,
            object: Some(object),
        }
    }

    pub fn tag(&self) -> NodeTag<'a> {
        self.tag
    }

    pub fn props(&self) -> Option<&'a JsonMap> {
        self.object?.get("props")?.as_object()
    }

    pub fn style(&self) -> Option<&'a JsonMap> {
        self.object?.get("style")?.as_object()
    }

    pub fn children(&self) -> &'a [Value] {
        self.object
            .and_then(|object| object.get("children"))
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(EMPTY_CHILDREN)
    }

    /// A string payload field such as `content` or `source`; non-strings count as absent.
    pub fn payload_str(&self, field: &str) -> Option<&'a str> {
        self.object?.get(field)?.as_str()
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.object
            .is_some_and(|object| !matches!(object.get(field), None | Some(Value::Null)))
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
