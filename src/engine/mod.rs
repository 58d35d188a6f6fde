use crate::config::RendererConfig;
use crate::infrastructure::styling::StyleResolver;
use crate::model::PageDescriptor;
use crate::nodes::actions::ActionBridge;
use crate::nodes::key::NodePath;
use crate::nodes::registry::ElementRegistry;
use crate::render::context::RenderContext;
use crate::render::diagnostic::Diagnostic;
use crate::render::page::RenderedPage;
use crate::render::tree::UiTree;
use crate::result::PageTreeResult;
use crate::types::Value;
use tracing::debug;

/// Turns page descriptors into UI trees.
///
/// The renderer holds only configuration; every call to [`Renderer::render_page`] is an
/// independent pass, so one renderer can be shared between threads.
pub struct Renderer {
    registry: ElementRegistry,
    resolver: StyleResolver,
    bridge: ActionBridge,
    max_depth: usize,
}

impl Renderer {
    pub fn new(navigator: impl Fn(&str) + Send + Sync + 'static) -> Self {
        Self::with_config(&RendererConfig::default(), navigator)
    }

    pub fn with_config(
        config: &RendererConfig,
        navigator: impl Fn(&str) + Send + Sync + 'static,
    ) -> Self {
        Self {
            registry: ElementRegistry::with_builtin_elements(),
            resolver: StyleResolver::new(config.styling()),
            bridge: ActionBridge::new(navigator),
            max_depth: config.max_depth,
        }
    }

    /// For registering additional element types.
    pub fn registry_mut(&mut self) -> &mut ElementRegistry {
        &mut self.registry
    }

    pub fn resolver(&self) -> &StyleResolver {
        &self.resolver
    }

    pub fn render_page(&self, descriptor: &Value) -> PageTreeResult<RenderedPage> {
        let descriptor = PageDescriptor::from_value(descriptor)?;
        let mut context = RenderContext::new(&self.registry, &self.resolver, self.max_depth);
        let tree = match descriptor {
            PageDescriptor::Missing => {
                debug!("Rendering empty configuration placeholder");
                context.report(Diagnostic::ConfigurationMissing);
                UiTree::ConfigurationMissing
            }
            PageDescriptor::Components([]) => {
                debug!("Rendering empty page placeholder");
                context.report(Diagnostic::ConfigurationEmpty);
                UiTree::ConfigurationEmpty
            }
            PageDescriptor::Components(components) => {
                debug!("Rendering page with {} components", components.len());
                UiTree::Page(context.render_nodes(components, &NodePath::root()))
            }
        };
        let (actions, diagnostics) = context.into_parts();
        Ok(RenderedPage::new(
            tree,
            actions,
            diagnostics,
            self.bridge.clone(),
        ))
    }

    /// Parses `source` as JSON and renders it.
    pub fn render_json(&self, source: &str) -> PageTreeResult<RenderedPage> {
        let descriptor: Value = serde_json::from_str(source)?;
        self.render_page(&descriptor)
    }
}
