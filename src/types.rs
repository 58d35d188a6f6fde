pub type Value = serde_json::Value;
pub type JsonMap = serde_json::Map<String, Value>;
pub type StyleValue = Value;
