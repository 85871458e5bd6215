//! Web client described by a JSON snapshot
//!
//! Stands in for the live web client in the CLI and in tests. `do_action`
//! records the request and moves the controller and hash to the target,
//! the way a completed navigation would.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::host::{
    ActionDescriptor, ActionRequest, ActionState, AppDirectory, ControllerSnapshot, DocumentState, RenderProps,
    RouterHash, RouterState, CLIENT_ACTION_TYPE,
};
use crate::domain::models::{App, MenuItem};
use crate::shared::errors::{HostError, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostSnapshot {
    #[serde(default)]
    pub apps: Vec<App>,
    #[serde(default)]
    pub current_app_id: Option<i64>,
    /// Menu trees keyed by app id
    #[serde(default)]
    pub menus: HashMap<i64, MenuItem>,
    #[serde(default)]
    pub controller: Option<ControllerSnapshot>,
    /// Makes `current_controller` fail, as while the action service boots
    #[serde(default)]
    pub controller_error: Option<String>,
    #[serde(default)]
    pub hash: RouterHash,
    #[serde(default)]
    pub router_error: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Default)]
pub struct SnapshotHost {
    state: RefCell<HostSnapshot>,
    dispatched: RefCell<Vec<ActionRequest>>,
}

impl SnapshotHost {
    pub fn new(snapshot: HostSnapshot) -> Self {
        Self {
            state: RefCell::new(snapshot),
            dispatched: RefCell::new(Vec::new()),
        }
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(Self::new(serde_json::from_str(raw)?))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn snapshot(&self) -> HostSnapshot {
        self.state.borrow().clone()
    }

    pub fn update(&self, f: impl FnOnce(&mut HostSnapshot)) {
        f(&mut self.state.borrow_mut());
    }

    /// Requests passed to `do_action`, oldest first
    pub fn dispatched(&self) -> Vec<ActionRequest> {
        self.dispatched.borrow().clone()
    }
}

impl AppDirectory for SnapshotHost {
    type Menu = MenuItem;

    fn list_apps(&self) -> Vec<App> {
        self.state.borrow().apps.clone()
    }

    fn current_app(&self) -> Option<App> {
        let state = self.state.borrow();
        let id = state.current_app_id?;
        state.apps.iter().find(|app| app.id == id).cloned()
    }

    fn menu_tree(&self, app_id: i64) -> std::result::Result<MenuItem, HostError> {
        self.state
            .borrow()
            .menus
            .get(&app_id)
            .cloned()
            .ok_or_else(|| HostError::Failed(format!("no menu tree for app {}", app_id)))
    }
}

impl ActionState for SnapshotHost {
    fn current_controller(&self) -> std::result::Result<Option<ControllerSnapshot>, HostError> {
        let state = self.state.borrow();
        if let Some(error) = &state.controller_error {
            return Err(HostError::Failed(error.clone()));
        }
        Ok(state.controller.clone())
    }

    fn do_action(&self, request: ActionRequest) -> std::result::Result<(), HostError> {
        {
            let mut state = self.state.borrow_mut();
            state.controller = Some(ControllerSnapshot {
                action: Some(match request.action.as_number() {
                    Some(id) => ActionDescriptor {
                        id: Some(id),
                        tag: None,
                        action_type: None,
                    },
                    None => ActionDescriptor {
                        id: None,
                        tag: Some(request.action.to_string()),
                        action_type: Some(CLIENT_ACTION_TYPE.to_string()),
                    },
                }),
                props: RenderProps {
                    view_type: request.view_type.clone(),
                    model: None,
                    res_id: request.res_id,
                },
                display_name: None,
            });
            state.controller_error = None;
            state.hash = RouterHash {
                action: Some(request.action.clone()),
                view_type: request.view_type.clone(),
                model: None,
                id: request.res_id,
            };
        }
        self.dispatched.borrow_mut().push(request);
        Ok(())
    }
}

impl RouterState for SnapshotHost {
    fn current_hash(&self) -> std::result::Result<RouterHash, HostError> {
        let state = self.state.borrow();
        match &state.router_error {
            Some(error) => Err(HostError::Failed(error.clone())),
            None => Ok(state.hash.clone()),
        }
    }
}

impl DocumentState for SnapshotHost {
    fn title(&self) -> Option<String> {
        self.state.borrow().title.clone()
    }
}
