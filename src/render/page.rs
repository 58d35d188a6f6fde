use crate::nodes::actions::{ActionBridge, ActionId, ActionTable};
use crate::nodes::key::NodeKey;
use crate::render::diagnostic::Diagnostic;
use crate::render::tree::UiTree;
use crate::result::{PageTreeError, PageTreeErrorKind, PageTreeResult};

/// A fully rendered page together with the actions its interactive leaves declared.
#[derive(Debug)]
pub struct RenderedPage {
    tree: UiTree,
    actions: ActionTable,
    diagnostics: Vec<Diagnostic>,
    bridge: ActionBridge,
}

impl RenderedPage {
    pub(crate) fn new(
        tree: UiTree,
        actions: ActionTable,
        diagnostics: Vec<Diagnostic>,
        bridge: ActionBridge,
    ) -> Self {
        Self {
            tree,
            actions,
            diagnostics,
            bridge,
        }
    }

    pub fn tree(&self) -> &UiTree {
        &self.tree
    }

    pub fn into_tree(self) -> UiTree {
        self.tree
    }

    pub fn actions(&self) -> &ActionTable {
        &self.actions
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Runs the action behind `id`, as if the user activated the element that declared it.
    pub fn trigger(&self, id: ActionId) -> PageTreeResult<()> {
        let action = self.actions.get(id)?;
        self.bridge.dispatch(action);
        Ok(())
    }

    pub fn trigger_node(&self, key: &NodeKey) -> PageTreeResult<()> {
        let id = self.actions.find(key).ok_or_else(|| {
            PageTreeError::new(PageTreeErrorKind::UnknownAction(key.to_string()))
        })?;
        self.trigger(id)
    }

    /// Human-readable outline of the rendered tree, one node per line.
    pub fn outline(&self) -> String {
        format!("{}", self.tree.to_tree())
    }
}
