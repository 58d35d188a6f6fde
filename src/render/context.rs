use crate::infrastructure::styling::StyleResolver;
use crate::model::ComponentNode;
use crate::nodes::actions::{ActionId, ActionTable, DeclaredAction};
use crate::nodes::elements::kind::ElementLayout;
use crate::nodes::key::{NodeKey, NodePath};
use crate::nodes::registry::ElementRegistry;
use crate::render::diagnostic::Diagnostic;
use crate::render::tree::{Primitive, Props, UiNode};
use crate::types::Value;
use tracing::{debug, trace, warn};

/// State of a single render pass. Dropped once the pass is complete.
pub struct RenderContext<'a> {
    registry: &'a ElementRegistry,
    resolver: &'a StyleResolver,
    max_depth: usize,
    actions: ActionTable,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> RenderContext<'a> {
    pub fn new(registry: &'a ElementRegistry, resolver: &'a StyleResolver, max_depth: usize) -> Self {
        Self {
            registry,
            resolver,
            max_depth,
            actions: ActionTable::default(),
            diagnostics: vec![],
        }
    }

    pub fn render_nodes(&mut self, values: &[Value], parent: &NodePath) -> Vec<UiNode> {
        values
            .iter()
            .enumerate()
            .map(|(index, value)| self.render_node(value, parent.child(index)))
            .collect()
    }

    pub fn render_node(&mut self, value: &Value, path: NodePath) -> UiNode {
        let node = ComponentNode::from_value(value);
        let key = NodeKey::new(node.tag().to_string(), path);
        trace!("Rendering {}", key);
        let style = self
            .resolver
            .resolve(node.tag().name().unwrap_or_default(), node.style());
        let props = Props::from(node.props());

        if key.path().depth() > self.max_depth {
            warn!("Depth limit exceeded at {}", key);
            self.report(Diagnostic::DepthLimitExceeded { key: key.clone() });
            return UiNode {
                key,
                primitive: Primitive::Placeholder {
                    diagnostic: "depth limit exceeded".to_string(),
                },
                style,
                props,
                children: vec![],
            };
        }

        let registry = self.registry;
        let element = registry.strategy_for_tag(node.tag());
        let primitive = element.render(self, &node, &key);
        let children = match element.layout() {
            ElementLayout::Container => self.render_nodes(node.children(), key.path()),
            ElementLayout::Leaf => {
                if !node.children().is_empty() {
                    debug!("Ignoring children of leaf {}", key);
                }
                vec![]
            }
        };
        UiNode {
            key,
            primitive,
            style,
            props,
            children,
        }
    }

    /// Registers an interactive leaf's action with the page.
    pub fn register_action(&mut self, key: &NodeKey, action: DeclaredAction) -> ActionId {
        self.actions.register(key.clone(), action)
    }

    pub fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Reports a missing payload field, returning the field's string value if it is usable.
    pub fn required_payload(
        &mut self,
        node: &ComponentNode<'_>,
        key: &NodeKey,
        field: &'static str,
    ) -> Option<String> {
        let payload = node.payload_str(field).map(str::to_string);
        if payload.is_none() {
            if node.has_field(field) {
                warn!("{} has a non-string '{}'", key, field);
            } else {
                warn!("{} is missing '{}'", key, field);
            }
            self.report(Diagnostic::MalformedLeafPayload {
                key: key.clone(),
                field,
            });
        }
        payload
    }

    pub fn into_parts(self) -> (ActionTable, Vec<Diagnostic>) {
        (self.actions, self.diagnostics)
    }
}
