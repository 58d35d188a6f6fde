use crate::model::{ComponentNode, NodeTag};
use crate::nodes::elements::button::ButtonElement;
use crate::nodes::elements::container::{ContainerElement, ScrollViewElement};
use crate::nodes::elements::fallback::FallbackElement;
use crate::nodes::elements::image::ImageElement;
use crate::nodes::elements::kind::{Element, ElementLayout};
use crate::nodes::elements::text::TextElement;
use crate::nodes::key::NodeKey;
use crate::render::context::RenderContext;
use crate::render::tree::Primitive;
use std::collections::HashMap;
use tracing::debug;

pub type ElementRenderFn =
    Box<dyn Fn(&mut RenderContext<'_>, &ComponentNode<'_>, &NodeKey) -> Primitive + Send + Sync>;

pub struct ElementDescriptor {
    name: String,
    layout: ElementLayout,
    render_fn: ElementRenderFn,
}

impl ElementDescriptor {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn layout(&self) -> ElementLayout {
        self.layout
    }

    pub fn render(
        &self,
        context: &mut RenderContext<'_>,
        node: &ComponentNode<'_>,
        key: &NodeKey,
    ) -> Primitive {
        (self.render_fn)(context, node, key)
    }
}

/// Maps tags to render strategies. Lookups never fail: unregistered tags get the fallback.
pub struct ElementRegistry {
    elements: Vec<ElementDescriptor>,
    element_map: HashMap<String, usize>,
    fallback: ElementDescriptor,
}

impl Default for ElementRegistry {
    fn default() -> Self {
        Self::with_builtin_elements()
    }
}

impl ElementRegistry {
    /// A registry that knows no tags; everything resolves to the fallback.
    pub fn empty() -> Self {
        Self {
            elements: Vec::new(),
            element_map: HashMap::new(),
            fallback: descriptor_for::<FallbackElement>(),
        }
    }

    pub fn with_builtin_elements() -> Self {
        let mut registry = Self::empty();
        registry.register_element::<ContainerElement>();
        registry.register_element::<ScrollViewElement>();
        registry.register_element::<TextElement>();
        registry.register_element::<ImageElement>();
        registry.register_element::<ButtonElement>();
        registry
    }

    pub fn register(
        &mut self,
        name: impl Into<String>,
        layout: ElementLayout,
        render_fn: impl Fn(&mut RenderContext<'_>, &ComponentNode<'_>, &NodeKey) -> Primitive
            + Send
            + Sync
            + 'static,
    ) {
        self.register_internal(name.into(), layout, Box::new(render_fn));
    }

    fn register_internal(&mut self, name: String, layout: ElementLayout, render_fn: ElementRenderFn) {
        let descriptor = ElementDescriptor {
            name: name.clone(),
            layout,
            render_fn,
        };
        match self.element_map.get(&name) {
            Some(&index) => {
                debug!("Replacing element '{}'", name);
                self.elements[index] = descriptor;
            }
            None => {
                self.element_map.insert(name, self.elements.len());
                self.elements.push(descriptor);
            }
        }
    }

    pub fn register_element<T: Element>(&mut self) {
        let descriptor = descriptor_for::<T>();
        self.register_internal(descriptor.name, descriptor.layout, descriptor.render_fn);
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.element_map.contains_key(name)
    }

    pub fn strategy_for(&self, name: &str) -> &ElementDescriptor {
        match self.element_map.get(name) {
            Some(&index) => &self.elements[index],
            None => &self.fallback,
        }
    }

    pub fn strategy_for_tag(&self, tag: NodeTag<'_>) -> &ElementDescriptor {
        match tag {
            NodeTag::Named(name) => self.strategy_for(name),
            NodeTag::Missing | NodeTag::Invalid(_) => &self.fallback,
        }
    }

    pub fn fallback(&self) -> &ElementDescriptor {
        &self.fallback
    }
}

fn descriptor_for<T: Element>() -> ElementDescriptor {
    ElementDescriptor {
        name: T::NAME.to_string(),
        layout: T::LAYOUT,
        render_fn: Box::new(T::render_element),
    }
}
