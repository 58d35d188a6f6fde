use crate::model::ComponentNode;
use crate::nodes::key::NodeKey;
use crate::render::context::RenderContext;
use crate::render::tree::Primitive;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementLayout {
    /// Children are walked and nested under the element, in order.
    Container,
    /// Children are ignored.
    Leaf,
}

pub trait Element: 'static {
    const NAME: &'static str;
    const LAYOUT: ElementLayout;

    fn render_element(
        context: &mut RenderContext<'_>,
        node: &ComponentNode<'_>,
        key: &NodeKey,
    ) -> Primitive;
}
