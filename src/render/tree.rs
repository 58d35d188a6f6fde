use crate::infrastructure::styling::StyleRecord;
use crate::nodes::actions::ActionId;
use crate::nodes::key::NodeKey;
use crate::types::{JsonMap, Value};
use std::fmt::{Display, Formatter};
use termtree::Tree;

pub const EMPTY_CONFIGURATION_MESSAGE: &str = "No page configuration available";
pub const EMPTY_PAGE_MESSAGE: &str = "Nothing to display";

/// Output of one render pass.
#[derive(Debug, Clone, PartialEq)]
pub enum UiTree {
    /// The descriptor was `null`.
    ConfigurationMissing,
    /// The descriptor had no components.
    ConfigurationEmpty,
    Page(Vec<UiNode>),
}

impl UiTree {
    /// Message shown by the designated placeholders, `None` for a regular page.
    pub fn placeholder_message(&self) -> Option<&'static str> {
        match self {
            UiTree::ConfigurationMissing => Some(EMPTY_CONFIGURATION_MESSAGE),
            UiTree::ConfigurationEmpty => Some(EMPTY_PAGE_MESSAGE),
            UiTree::Page(_) => None,
        }
    }

    pub fn nodes(&self) -> &[UiNode] {
        match self {
            UiTree::Page(nodes) => nodes,
            _ => &[],
        }
    }

    /// Depth-first, pre-order traversal of every rendered node.
    pub fn walk(&self) -> Vec<&UiNode> {
        let mut visited = vec![];
        let mut todo: Vec<&UiNode> = self.nodes().iter().rev().collect();
        while let Some(node) = todo.pop() {
            visited.push(node);
            todo.extend(node.children.iter().rev());
        }
        visited
    }

    pub fn find(&self, key: &NodeKey) -> Option<&UiNode> {
        self.walk().into_iter().find(|node| &node.key == key)
    }

    pub fn to_tree(&self) -> Tree<String> {
        match self {
            UiTree::ConfigurationMissing => {
                Tree::new(format!("ConfigurationMissing {:?}", EMPTY_CONFIGURATION_MESSAGE))
            }
            UiTree::ConfigurationEmpty => {
                Tree::new(format!("ConfigurationEmpty {:?}", EMPTY_PAGE_MESSAGE))
            }
            UiTree::Page(nodes) => {
                let mut tree = Tree::new("Page".to_string());
                for node in nodes {
                    tree.push(node.to_tree());
                }
                tree
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UiNode {
    pub key: NodeKey,
    pub primitive: Primitive,
    pub style: StyleRecord,
    pub props: Props,
    pub children: Vec<UiNode>,
}

impl UiNode {
    fn to_tree(&self) -> Tree<String> {
        let mut root = format!("{} {} {}", self.key, self.primitive, self.style);
        if !self.props.is_empty() {
            root += &format!(" props={}", self.props);
        }
        let mut tree = Tree::new(root);
        for child in &self.children {
            tree.push(child.to_tree());
        }
        tree
    }
}

/// Host UI primitive a node resolves to. `None` payloads are drawn as degraded visuals.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    View,
    ScrollView,
    Text {
        content: Option<String>,
    },
    Image {
        source: Option<String>,
    },
    Button {
        label: Option<String>,
        action: Option<ActionId>,
    },
    Placeholder {
        diagnostic: String,
    },
}

impl Display for Primitive {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Primitive::View => write!(f, "View"),
            Primitive::ScrollView => write!(f, "ScrollView"),
            Primitive::Text { content } => {
                write!(f, "Text ")?;
                write_payload(f, content, "content")
            }
            Primitive::Image { source } => {
                write!(f, "Image ")?;
                write_payload(f, source, "source")
            }
            Primitive::Button { label, action } => {
                write!(f, "Button ")?;
                write_payload(f, label, "text")?;
                if action.is_some() {
                    write!(f, " (action)")?;
                }
                Ok(())
            }
            Primitive::Placeholder { diagnostic } => write!(f, "Placeholder {:?}", diagnostic),
        }
    }
}

fn write_payload(f: &mut Formatter<'_>, payload: &Option<String>, field: &str) -> std::fmt::Result {
    match payload {
        Some(payload) => write!(f, "{:?}", payload),
        None => write!(f, "<missing {}>", field),
    }
}

/// Pass-through attributes for the host primitive; never interpreted here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Props(JsonMap);

impl Props {
    pub fn as_map(&self) -> &JsonMap {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Option<&JsonMap>> for Props {
    fn from(props: Option<&JsonMap>) -> Self {
        Self(props.cloned().unwrap_or_default())
    }
}

impl Display for Props {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Value::Object(self.0.clone()))
    }
}
