use crate::model::ComponentNode;
use crate::nodes::elements::kind::{Element, ElementLayout};
use crate::nodes::key::NodeKey;
use crate::render::context::RenderContext;
use crate::render::tree::Primitive;

pub struct ContainerElement {}

impl Element for ContainerElement {
    const NAME: &'static str = "container";
    const LAYOUT: ElementLayout = ElementLayout::Container;

    fn render_element(
        _context: &mut RenderContext<'_>,
        _node: &ComponentNode<'_>,
        _key: &NodeKey,
    ) -> Primitive {
        Primitive::View
    }
}

pub struct ScrollViewElement {}

impl Element for ScrollViewElement {
    const NAME: &'static str = "scrollview";
    const LAYOUT: ElementLayout = ElementLayout::Container;

    fn render_element(
        _context: &mut RenderContext<'_>,
        _node: &ComponentNode<'_>,
        _key: &NodeKey,
    ) -> Primitive {
        Primitive::ScrollView
    }
}
