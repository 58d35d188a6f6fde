use crate::infrastructure::styling::{StyleTable, Styling};
use crate::result::{context, PageTreeError, PageTreeResult};
use log::info;
use serde::Deserialize;

pub const DEFAULT_MAX_DEPTH: usize = 64;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    pub theme: ThemeName,
    /// Nodes nested deeper than this render as a placeholder.
    pub max_depth: usize,
    /// Per-tag base styles layered over the theme.
    pub styles: Option<StyleTable>,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            theme: ThemeName::default(),
            max_depth: DEFAULT_MAX_DEPTH,
            styles: None,
        }
    }
}

impl RendererConfig {
    pub fn from_ron_str(source: &str) -> PageTreeResult<Self> {
        let config = context!("read renderer config from RON" => {
            ron::from_str::<RendererConfig>(source).map_err(PageTreeError::from)
        })?;
        info!("Loaded renderer config: theme {:?}", config.theme);
        Ok(config)
    }

    pub fn from_yaml_str(source: &str) -> PageTreeResult<Self> {
        let config = context!("read renderer config from YAML" => {
            serde_yml::from_str::<RendererConfig>(source).map_err(PageTreeError::from)
        })?;
        info!("Loaded renderer config: theme {:?}", config.theme);
        Ok(config)
    }

    pub fn styling(&self) -> Styling {
        let mut styling = Styling::for_theme(self.theme);
        if let Some(styles) = &self.styles {
            styling.extend(styles);
        }
        styling
    }
}
