use crate::nodes::key::NodeKey;
use crate::result::{PageTreeError, PageTreeErrorKind, PageTreeResult};
use std::fmt::{Debug, Formatter};
use std::sync::Arc;
use tracing::debug;

/// Host-supplied side effect invoked with a route target.
pub type Navigator = Arc<dyn Fn(&str) + Send + Sync>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionKind {
    Navigate,
    /// Any other declared kind. Kept on the page, triggering it does nothing here.
    Other(String),
}

impl ActionKind {
    pub fn parse(kind: &str) -> Self {
        match kind {
            "navigate" => ActionKind::Navigate,
            other => ActionKind::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclaredAction {
    pub kind: ActionKind,
    pub target: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActionId(usize);

/// Connects declared actions to the host's navigation capability.
#[derive(Clone)]
pub struct ActionBridge {
    navigator: Navigator,
}

impl Debug for ActionBridge {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "ActionBridge")
    }
}

impl ActionBridge {
    pub fn new(navigator: impl Fn(&str) + Send + Sync + 'static) -> Self {
        Self {
            navigator: Arc::new(navigator),
        }
    }

    /// A bridge whose navigation does nothing.
    pub fn detached() -> Self {
        Self::new(|_target| {})
    }

    pub fn dispatch(&self, action: &DeclaredAction) {
        match (&action.kind, &action.target) {
            (ActionKind::Navigate, Some(target)) => {
                debug!("Navigating to '{}'", target);
                (self.navigator)(target.as_str());
            }
            (ActionKind::Navigate, None) => {
                debug!("Ignoring navigate action without target");
            }
            (ActionKind::Other(kind), _) => {
                debug!("Ignoring unsupported action kind '{}'", kind);
            }
        }
    }
}

/// Actions registered by interactive leaves during one render pass.
#[derive(Debug, Default)]
pub struct ActionTable {
    entries: Vec<(NodeKey, DeclaredAction)>,
}

impl ActionTable {
    pub fn register(&mut self, key: NodeKey, action: DeclaredAction) -> ActionId {
        let id = ActionId(self.entries.len());
        self.entries.push((key, action));
        id
    }

    pub fn get(&self, id: ActionId) -> PageTreeResult<&DeclaredAction> {
        self.entries
            .get(id.0)
            .map(|(_, action)| action)
            .ok_or_else(|| {
                PageTreeError::new(PageTreeErrorKind::UnknownAction(format!("#{}", id.0)))
            })
    }

    pub fn find(&self, key: &NodeKey) -> Option<ActionId> {
        self.entries
            .iter()
            .position(|(entry_key, _)| entry_key == key)
            .map(ActionId)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ActionId, &NodeKey, &DeclaredAction)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, (key, action))| (ActionId(index), key, action))
    }
}
