use serde::{Deserialize, Deserializer, Serialize};

/// Identifier of a web client action.
///
/// Window actions carry a numeric database id; client-side actions are only
/// known by their string tag. Both forms appear in stored pins and router
/// hashes, so the type round-trips either.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ActionId {
    Id(i64),
    Tag(String),
}

impl ActionId {
    /// Parse a raw value from the router or a menu entry.
    /// Purely numeric strings become [`ActionId::Id`].
    pub fn parse(raw: &str) -> Option<ActionId> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        Some(match raw.parse::<i64>() {
            Ok(id) => ActionId::Id(id),
            Err(_) => ActionId::Tag(raw.to_string()),
        })
    }

    pub fn as_number(&self) -> Option<i64> {
        match self {
            ActionId::Id(id) => Some(*id),
            ActionId::Tag(tag) => tag.trim().parse().ok(),
        }
    }

    /// String equality, so `7` and `"7"` refer to the same action.
    pub fn matches(&self, other: &ActionId) -> bool {
        self.to_string() == other.to_string()
    }
}

impl std::fmt::Display for ActionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionId::Id(id) => write!(f, "{}", id),
            ActionId::Tag(tag) => f.write_str(tag),
        }
    }
}

impl From<i64> for ActionId {
    fn from(id: i64) -> Self {
        ActionId::Id(id)
    }
}

impl From<&str> for ActionId {
    fn from(tag: &str) -> Self {
        ActionId::Tag(tag.to_string())
    }
}

/// Accept an action id sent as a number, a string, `false` or `null`.
/// The menu service sends `false` for entries without an action.
pub(crate) fn lenient_action_id<'de, D>(deserializer: D) -> Result<Option<ActionId>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_i64().map(ActionId::Id),
        serde_json::Value::String(s) => ActionId::parse(&s),
        _ => None,
    })
}

/// Same leniency for record ids, which the router keeps as strings.
pub(crate) fn lenient_res_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_i64(),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Optional text field that the web client may send as `false`.
/// Anything other than a non-empty string reads as `None`.
pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) if !s.is_empty() => Some(s),
        _ => None,
    })
}

/// Stable identity of a page: `"{action}:{view_type}:{res_id}"` with empty
/// placeholders for missing parts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PinKey(String);

impl PinKey {
    pub fn new(action_id: &ActionId, view_type: Option<&str>, res_id: Option<i64>) -> Self {
        let res_id = res_id.map(|id| id.to_string()).unwrap_or_default();
        PinKey(format!("{}:{}:{}", action_id, view_type.unwrap_or(""), res_id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PinKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PinKey {
    fn from(raw: &str) -> Self {
        PinKey(raw.to_string())
    }
}

/// Resolved description of the page currently displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub action_id: ActionId,
    pub view_type: Option<String>,
    pub model: Option<String>,
    pub res_id: Option<i64>,
    pub display_name: Option<String>,
}

impl PageInfo {
    pub fn new(action_id: impl Into<ActionId>) -> Self {
        Self {
            action_id: action_id.into(),
            view_type: None,
            model: None,
            res_id: None,
            display_name: None,
        }
    }

    pub fn with_view_type(mut self, view_type: impl Into<String>) -> Self {
        self.view_type = Some(view_type.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_res_id(mut self, res_id: i64) -> Self {
        self.res_id = Some(res_id);
        self
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    pub fn key(&self) -> PinKey {
        PinKey::new(&self.action_id, self.view_type.as_deref(), self.res_id)
    }
}
