use serde::{Deserialize, Serialize};

use super::page::{lenient_res_id, lenient_string, ActionId, PageInfo, PinKey};

/// A persisted bookmark to a page.
///
/// Field names follow the stored layout. Legacy records may lack `key`,
/// `viewType`, `model` and `resId`; they deserialize with `None` there and
/// get their key from [`Pin::key`]. Optional fields stored as `false` or
/// with the wrong type read as `None`, so one odd record cannot empty the
/// whole list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pin {
    #[serde(default)]
    pub key: Option<PinKey>,
    #[serde(rename = "actionID")]
    pub action_id: ActionId,
    #[serde(rename = "viewType", default, deserialize_with = "lenient_string")]
    pub view_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub model: Option<String>,
    #[serde(rename = "resId", default, deserialize_with = "lenient_res_id")]
    pub res_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient_name")]
    pub name: String,
    #[serde(rename = "appId", default, deserialize_with = "lenient_res_id")]
    pub app_id: Option<i64>,
    #[serde(rename = "appName", default, deserialize_with = "lenient_string")]
    pub app_name: Option<String>,
}

fn lenient_name<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(lenient_string(deserializer)?.unwrap_or_default())
}

impl Pin {
    pub fn from_page(page: &PageInfo, name: String, app_id: Option<i64>, app_name: Option<String>) -> Self {
        Self {
            key: Some(page.key()),
            action_id: page.action_id.clone(),
            view_type: page.view_type.clone(),
            model: page.model.clone(),
            res_id: page.res_id,
            name,
            app_id,
            app_name,
        }
    }

    /// Stored key, or the one computed from the pin's own fields.
    pub fn key(&self) -> PinKey {
        match &self.key {
            Some(key) => key.clone(),
            None => self.computed_key(),
        }
    }

    fn computed_key(&self) -> PinKey {
        PinKey::new(&self.action_id, self.view_type.as_deref(), self.res_id)
    }

    /// Fill in a missing key. Returns true when the record changed.
    pub fn migrate(&mut self) -> bool {
        if self.key.is_some() {
            return false;
        }
        self.key = Some(self.computed_key());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_record_loads_and_keys() {
        let raw = r#"{"actionID": 7, "name": "X", "appId": 1, "appName": "A"}"#;
        let mut pin: Pin = serde_json::from_str(raw).unwrap();

        assert_eq!(pin.key, None);
        assert_eq!(pin.key().as_str(), "7::");
        assert!(pin.migrate());
        assert!(!pin.migrate());
        assert_eq!(pin.key, Some(PinKey::from("7::")));
        assert_eq!(pin.app_name.as_deref(), Some("A"));
    }

    #[test]
    fn test_serializes_stored_field_names() {
        let page = PageInfo::new(12).with_view_type("form").with_res_id(4).with_model("res.partner");
        let pin = Pin::from_page(&page, "Deco Addict".into(), Some(2), Some("Contacts".into()));
        let value = serde_json::to_value(&pin).unwrap();

        assert_eq!(value["key"], "12:form:4");
        assert_eq!(value["actionID"], 12);
        assert_eq!(value["viewType"], "form");
        assert_eq!(value["resId"], 4);
        assert_eq!(value["appId"], 2);
        assert_eq!(value["appName"], "Contacts");
    }

    #[test]
    fn test_false_fields_read_as_missing() {
        let raw = r#"{"actionID": 8, "viewType": false, "model": false, "resId": false,
                      "name": false, "appId": false, "appName": false}"#;
        let pin: Pin = serde_json::from_str(raw).unwrap();

        assert_eq!(pin.view_type, None);
        assert_eq!(pin.model, None);
        assert_eq!(pin.res_id, None);
        assert_eq!(pin.name, "");
        assert_eq!(pin.app_id, None);
        assert_eq!(pin.app_name, None);
        assert_eq!(pin.key().as_str(), "8::");
    }

    #[test]
    fn test_stored_key_wins_over_fields() {
        let raw = r#"{"key": "custom", "actionID": "mail.action_discuss", "name": "Discuss"}"#;
        let pin: Pin = serde_json::from_str(raw).unwrap();
        assert_eq!(pin.key().as_str(), "custom");
        assert_eq!(pin.action_id, ActionId::Tag("mail.action_discuss".into()));
    }
}
