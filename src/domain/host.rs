//! Capabilities borrowed from the surrounding web client
//!
//! The subsystem never owns navigation, menus or the document. It queries
//! them through these narrow traits, and every query may fail or come back
//! empty.

use serde::{Deserialize, Serialize};

use crate::domain::models::page::{lenient_action_id, lenient_res_id};
use crate::domain::models::{ActionId, App, MenuNode};
use crate::shared::errors::HostError;

/// Action type string used by the web client for client-side actions
pub const CLIENT_ACTION_TYPE: &str = "ir.actions.client";

/// Action currently mounted by the action controller
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionDescriptor {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(rename = "type", default)]
    pub action_type: Option<String>,
}

impl ActionDescriptor {
    pub fn is_client_action(&self) -> bool {
        self.action_type.as_deref() == Some(CLIENT_ACTION_TYPE)
    }

    /// Numeric id, or the tag for client actions without one.
    pub fn action_id(&self) -> Option<ActionId> {
        if let Some(id) = self.id {
            return Some(ActionId::Id(id));
        }
        if self.is_client_action() {
            return self.tag.as_deref().and_then(ActionId::parse);
        }
        None
    }
}

/// Render props of the current controller
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderProps {
    #[serde(rename = "type", default)]
    pub view_type: Option<String>,
    #[serde(rename = "resModel", default)]
    pub model: Option<String>,
    #[serde(rename = "resId", default, deserialize_with = "lenient_res_id")]
    pub res_id: Option<i64>,
}

/// The action controller's view of the page on screen
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControllerSnapshot {
    #[serde(default)]
    pub action: Option<ActionDescriptor>,
    #[serde(default)]
    pub props: RenderProps,
    #[serde(rename = "displayName", default)]
    pub display_name: Option<String>,
}

/// Parsed router hash fragment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouterHash {
    #[serde(default, deserialize_with = "lenient_action_id")]
    pub action: Option<ActionId>,
    #[serde(default)]
    pub view_type: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default, deserialize_with = "lenient_res_id")]
    pub id: Option<i64>,
}

/// Navigation request handed to `do_action`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRequest {
    pub action: ActionId,
    #[serde(default)]
    pub view_type: Option<String>,
    #[serde(default)]
    pub res_id: Option<i64>,
}

/// Installed apps and their menus
pub trait AppDirectory {
    type Menu: MenuNode;

    fn list_apps(&self) -> Vec<App>;
    fn current_app(&self) -> Option<App>;
    fn menu_tree(&self, app_id: i64) -> Result<Self::Menu, HostError>;
}

/// The action controller
pub trait ActionState {
    /// Updated before navigation-complete notifications fire.
    fn current_controller(&self) -> Result<Option<ControllerSnapshot>, HostError>;
    fn do_action(&self, request: ActionRequest) -> Result<(), HostError>;
}

/// The router; may lag one update behind the controller.
pub trait RouterState {
    fn current_hash(&self) -> Result<RouterHash, HostError>;
}

pub trait DocumentState {
    fn title(&self) -> Option<String>;
}

/// Everything the sidebar needs from the web client
pub trait WebClientHost: AppDirectory + ActionState + RouterState + DocumentState {}

impl<T> WebClientHost for T where T: AppDirectory + ActionState + RouterState + DocumentState {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_prefers_numeric_id() {
        let action = ActionDescriptor {
            id: Some(5),
            tag: Some("menu".into()),
            action_type: Some(CLIENT_ACTION_TYPE.into()),
        };
        assert_eq!(action.action_id(), Some(ActionId::Id(5)));
    }

    #[test]
    fn test_descriptor_tag_only_for_client_actions() {
        let client = ActionDescriptor {
            id: None,
            tag: Some("mail.action_discuss".into()),
            action_type: Some(CLIENT_ACTION_TYPE.into()),
        };
        assert_eq!(client.action_id(), Some(ActionId::Tag("mail.action_discuss".into())));

        let window = ActionDescriptor {
            id: None,
            tag: Some("stray".into()),
            action_type: Some("ir.actions.act_window".into()),
        };
        assert_eq!(window.action_id(), None);
    }

    #[test]
    fn test_router_hash_accepts_string_fields() {
        let hash: RouterHash =
            serde_json::from_str(r#"{"action": "12", "view_type": "form", "id": "33", "model": "res.partner"}"#)
                .unwrap();
        assert_eq!(hash.action, Some(ActionId::Id(12)));
        assert_eq!(hash.id, Some(33));
    }
}
