use crate::model::ComponentNode;
use crate::nodes::actions::{ActionKind, DeclaredAction};
use crate::nodes::elements::kind::{Element, ElementLayout};
use crate::nodes::key::NodeKey;
use crate::render::context::RenderContext;
use crate::render::tree::Primitive;

pub struct ButtonElement {}

impl Element for ButtonElement {
    const NAME: &'static str = "button";
    const LAYOUT: ElementLayout = ElementLayout::Leaf;

    fn render_element(
        context: &mut RenderContext<'_>,
        node: &ComponentNode<'_>,
        key: &NodeKey,
    ) -> Primitive {
        let label = context.required_payload(node, key, "text");
        // A button without an action is still drawn, it just has nothing to trigger.
        let action = node.payload_str("action").map(|kind| {
            context.register_action(
                key,
                DeclaredAction {
                    kind: ActionKind::parse(kind),
                    target: node.payload_str("target").map(str::to_string),
                },
            )
        });
        Primitive::Button { label, action }
    }
}
