use crate::config::ThemeName;
use crate::result::{context, PageTreeError, PageTreeResult};
use crate::types::{JsonMap, StyleValue};
use itertools::Itertools;
use phf::phf_map;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt::{Display, Formatter};

/// Flat mapping from style property names to values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleRecord(BTreeMap<String, StyleValue>);

impl StyleRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<StyleValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &StyleValue)> {
        self.0.iter()
    }

    /// Shallow merge: every key of `overrides` replaces the whole value under that key.
    pub fn merged_with(&self, overrides: Option<&JsonMap>) -> StyleRecord {
        let mut merged = self.clone();
        if let Some(overrides) = overrides {
            for (key, value) in overrides {
                merged.0.insert(key.clone(), value.clone());
            }
        }
        merged
    }

    fn layer(&mut self, other: &StyleRecord) {
        for (key, value) in other.iter() {
            self.0.insert(key.clone(), value.clone());
        }
    }
}

impl<K: Into<String>, V: Into<StyleValue>> FromIterator<(K, V)> for StyleRecord {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl Display for StyleRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{{}}}",
            self.0
                .iter()
                .map(|(key, value)| format!("{}: {}", key, value))
                .join(", ")
        )
    }
}

/// Base styles keyed by tag, as found in theme files.
pub type StyleTable = HashMap<String, StyleRecord>;

#[derive(Debug, Clone, Copy)]
enum BaseValue {
    Int(i64),
    Text(&'static str),
}

impl From<BaseValue> for StyleValue {
    fn from(value: BaseValue) -> Self {
        match value {
            BaseValue::Int(value) => StyleValue::from(value),
            BaseValue::Text(value) => StyleValue::from(value),
        }
    }
}

type BaseStyle = &'static [(&'static str, BaseValue)];

const LIGHT_CONTAINER: BaseStyle = &[
    ("flexDirection", BaseValue::Text("column")),
    ("backgroundColor", BaseValue::Text("white")),
];
const LIGHT_SCROLLVIEW: BaseStyle = &[
    ("flex", BaseValue::Int(1)),
    ("backgroundColor", BaseValue::Text("white")),
];
const LIGHT_TEXT: BaseStyle = &[
    ("fontSize", BaseValue::Int(16)),
    ("color", BaseValue::Text("black")),
];
const LIGHT_BUTTON: BaseStyle = &[
    ("backgroundColor", BaseValue::Text("#2196F3")),
    ("color", BaseValue::Text("white")),
    ("padding", BaseValue::Int(10)),
    ("borderRadius", BaseValue::Int(4)),
];

const DARK_CONTAINER: BaseStyle = &[
    ("flexDirection", BaseValue::Text("column")),
    ("backgroundColor", BaseValue::Text("#121212")),
];
const DARK_SCROLLVIEW: BaseStyle = &[
    ("flex", BaseValue::Int(1)),
    ("backgroundColor", BaseValue::Text("#121212")),
];
const DARK_TEXT: BaseStyle = &[
    ("fontSize", BaseValue::Int(16)),
    ("color", BaseValue::Text("#E0E0E0")),
];
const DARK_BUTTON: BaseStyle = &[
    ("backgroundColor", BaseValue::Text("#90CAF9")),
    ("color", BaseValue::Text("black")),
    ("padding", BaseValue::Int(10)),
    ("borderRadius", BaseValue::Int(4)),
];

const IMAGE: BaseStyle = &[
    ("width", BaseValue::Int(100)),
    ("height", BaseValue::Int(100)),
];

static LIGHT_STYLES: phf::Map<&'static str, BaseStyle> = phf_map! {
    "container" => LIGHT_CONTAINER,
    "scrollview" => LIGHT_SCROLLVIEW,
    "text" => LIGHT_TEXT,
    "image" => IMAGE,
    "button" => LIGHT_BUTTON,
};

static DARK_STYLES: phf::Map<&'static str, BaseStyle> = phf_map! {
    "container" => DARK_CONTAINER,
    "scrollview" => DARK_SCROLLVIEW,
    "text" => DARK_TEXT,
    "image" => IMAGE,
    "button" => DARK_BUTTON,
};

/// Per-tag base styles of a theme.
#[derive(Debug, Clone, Default)]
pub struct Styling {
    base_styles: StyleTable,
}

impl Styling {
    pub fn light() -> Self {
        Self::from_static(&LIGHT_STYLES)
    }

    pub fn dark() -> Self {
        Self::from_static(&DARK_STYLES)
    }

    pub fn for_theme(theme: ThemeName) -> Self {
        match theme {
            ThemeName::Light => Self::light(),
            ThemeName::Dark => Self::dark(),
        }
    }

    /// Reads a style table such as
    ///
    /// ```yaml
    /// text:
    ///   fontSize: 18
    /// ```
    pub fn from_yaml_str(source: &str) -> PageTreeResult<Self> {
        let base_styles = context!("read style table from YAML" => {
            serde_yml::from_str::<StyleTable>(source).map_err(PageTreeError::from)
        })?;
        Ok(Self { base_styles })
    }

    fn from_static(styles: &phf::Map<&'static str, BaseStyle>) -> Self {
        let base_styles = styles
            .entries()
            .map(|(tag, style)| {
                (
                    tag.to_string(),
                    style.iter().map(|(key, value)| (*key, *value)).collect(),
                )
            })
            .collect();
        Self { base_styles }
    }

    /// Layers `table` on top of this theme, key by key within each tag.
    pub fn extend(&mut self, table: &StyleTable) {
        for (tag, style) in table {
            self.base_styles
                .entry(tag.clone())
                .or_default()
                .layer(style);
        }
    }

    pub fn extend_with(&mut self, other: &Styling) {
        self.extend(&other.base_styles);
    }

    pub fn table(&self) -> &StyleTable {
        &self.base_styles
    }

    pub fn base_style(&self, tag: &str) -> Option<&StyleRecord> {
        self.base_styles.get(tag)
    }
}

#[derive(Debug, Clone)]
pub struct StyleResolver {
    styling: Styling,
}

impl StyleResolver {
    pub fn new(styling: Styling) -> Self {
        Self { styling }
    }

    /// Effective style of a node: the tag's base style with `overrides` merged on top.
    ///
    /// Unknown tags start from an empty record.
    pub fn resolve(&self, tag: &str, overrides: Option<&JsonMap>) -> StyleRecord {
        match self.styling.base_style(tag) {
            Some(base) => base.merged_with(overrides),
            None => StyleRecord::new().merged_with(overrides),
        }
    }

    pub fn styling(&self) -> &Styling {
        &self.styling
    }
}

impl Default for StyleResolver {
    fn default() -> Self {
        Self::new(Styling::light())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn overrides(value: serde_json::Value) -> JsonMap {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn test_text_default_style() {
        let style = StyleResolver::default().resolve("text", None);
        assert_eq!(style.to_string(), r#"{color: "black", fontSize: 16}"#);
    }

    #[test]
    fn test_override_replaces_key() {
        let style = StyleResolver::default().resolve("text", Some(&overrides(json!({"color": "red"}))));
        assert_eq!(style.get("fontSize"), Some(&json!(16)));
        assert_eq!(style.get("color"), Some(&json!("red")));
        assert_eq!(style.len(), 2);
    }

    #[test]
    fn test_merge_is_shallow() {
        let mut base = StyleRecord::new();
        base.insert("shadow", json!({"radius": 2, "opacity": 0.5}));
        let merged = base.merged_with(Some(&overrides(json!({"shadow": {"radius": 8}}))));
        assert_eq!(merged.get("shadow"), Some(&json!({"radius": 8})));
    }

    #[test]
    fn test_unknown_tag_uses_override_only() {
        let resolver = StyleResolver::default();
        assert!(resolver.resolve("carousel", None).is_empty());
        let style = resolver.resolve("carousel", Some(&overrides(json!({"margin": 4}))));
        assert_eq!(style.to_string(), "{margin: 4}");
    }

    #[test]
    fn test_dark_theme_differs() {
        let light = Styling::light();
        let dark = Styling::dark();
        assert_ne!(light.base_style("text"), dark.base_style("text"));
        assert_eq!(light.base_style("carousel"), None);
    }

    #[test]
    fn test_extend_from_yaml() {
        let table = Styling::from_yaml_str("text:\n  fontSize: 20\ncard:\n  padding: 8\n").unwrap();
        assert_eq!(table.table().len(), 2);
        let mut styling = Styling::light();
        styling.extend_with(&table);
        let resolver = StyleResolver::new(styling);
        assert_eq!(
            resolver.resolve("text", None).to_string(),
            r#"{color: "black", fontSize: 20}"#
        );
        assert_eq!(resolver.resolve("card", None).to_string(), "{padding: 8}");
    }

    #[test]
    fn test_invalid_yaml_is_config_error() {
        let error = Styling::from_yaml_str("text: [unclosed").unwrap_err();
        assert_eq!(
            error.to_string(),
            "General Error: Failed to read style table from YAML"
        );
        assert!(format!("{:?}", error).contains("Configuration Error: YAML Error"));
    }
}
