use crate::model::ComponentNode;
use crate::nodes::elements::kind::{Element, ElementLayout};
use crate::nodes::key::NodeKey;
use crate::render::context::RenderContext;
use crate::render::diagnostic::Diagnostic;
use crate::render::tree::Primitive;
use tracing::warn;

/// Neutral placeholder for any tag that has no registered element.
pub struct FallbackElement {}

impl Element for FallbackElement {
    const NAME: &'static str = "fallback";
    const LAYOUT: ElementLayout = ElementLayout::Leaf;

    fn render_element(
        context: &mut RenderContext<'_>,
        node: &ComponentNode<'_>,
        key: &NodeKey,
    ) -> Primitive {
        let tag = node.tag().to_string();
        warn!("Unknown component type '{}' at {}", tag, key.path());
        context.report(Diagnostic::UnknownComponentType {
            key: key.clone(),
            tag: tag.clone(),
        });
        Primitive::Placeholder { diagnostic: tag }
    }
}
