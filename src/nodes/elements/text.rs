use crate::model::ComponentNode;
use crate::nodes::elements::kind::{Element, ElementLayout};
use crate::nodes::key::NodeKey;
use crate::render::context::RenderContext;
use crate::render::tree::Primitive;

pub struct TextElement {}

impl Element for TextElement {
    const NAME: &'static str = "text";
    const LAYOUT: ElementLayout = ElementLayout::Leaf;

    fn render_element(
        context: &mut RenderContext<'_>,
        node: &ComponentNode<'_>,
        key: &NodeKey,
    ) -> Primitive {
        Primitive::Text {
            content: context.required_payload(node, key, "content"),
        }
    }
}
