use crate::model::ComponentNode;
use crate::nodes::elements::kind::{Element, ElementLayout};
use crate::nodes::key::NodeKey;
use crate::render::context::RenderContext;
use crate::render::tree::Primitive;

pub struct ImageElement {}

impl Element for ImageElement {
    const NAME: &'static str = "image";
    const LAYOUT: ElementLayout = ElementLayout::Leaf;

    fn render_element(
        context: &mut RenderContext<'_>,
        node: &ComponentNode<'_>,
        key: &NodeKey,
    ) -> Primitive {
        // The URI is handed to the host as-is; loading it is the host primitive's job.
        Primitive::Image {
            source: context.required_payload(node, key, "source"),
        }
    }
}
