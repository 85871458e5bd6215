//! Page identity resolver
//!
//! Works out which page is on screen from two sources that can disagree:
//!
//! 1. The action controller. Updated before any navigation-complete
//!    notification fires, so it is authoritative whenever it answers.
//! 2. The router hash. May lag one update behind; only consulted when the
//!    controller is not ready, fails, or has no action.
//!
//! Nothing is cached: every call queries the host again.

use crate::domain::host::{ActionState, RouterState};
use crate::domain::models::PageInfo;
use crate::shared::logging;

const CONTROLLER_SOURCE: &str = "controller";
const ROUTER_SOURCE: &str = "router";

/// Resolve the current page, or `None` when no action is open (home menu).
pub fn resolve_current_page<H>(host: &H) -> Option<PageInfo>
where
    H: ActionState + RouterState + ?Sized,
{
    let page = from_controller(host)
        .map(|page| (CONTROLLER_SOURCE, page))
        .or_else(|| from_router(host).map(|page| (ROUTER_SOURCE, page)));

    page.map(|(source, page)| {
        logging::log_page_resolved(source, page.key().as_str());
        page
    })
}

fn from_controller<H: ActionState + ?Sized>(host: &H) -> Option<PageInfo> {
    let controller = match host.current_controller() {
        Ok(controller) => controller?,
        Err(e) => {
            logging::log_source_unavailable(CONTROLLER_SOURCE, &e.to_string());
            return None;
        }
    };

    let action_id = controller.action.as_ref()?.action_id()?;
    let props = controller.props;

    Some(PageInfo {
        action_id,
        view_type: non_empty(props.view_type),
        model: non_empty(props.model),
        res_id: props.res_id,
        display_name: non_empty(controller.display_name),
    })
}

fn from_router<H: RouterState + ?Sized>(host: &H) -> Option<PageInfo> {
    let hash = match host.current_hash() {
        Ok(hash) => hash,
        Err(e) => {
            logging::log_source_unavailable(ROUTER_SOURCE, &e.to_string());
            return None;
        }
    };

    Some(PageInfo {
        action_id: hash.action?,
        view_type: non_empty(hash.view_type),
        model: non_empty(hash.model),
        res_id: hash.id,
        display_name: None,
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::host::{ActionDescriptor, ControllerSnapshot, RenderProps, RouterHash, CLIENT_ACTION_TYPE};
    use crate::domain::models::ActionId;
    use crate::infrastructure::host::{HostSnapshot, SnapshotHost};

    fn controller(id: Option<i64>, view_type: &str, res_id: Option<i64>) -> ControllerSnapshot {
        ControllerSnapshot {
            action: Some(ActionDescriptor {
                id,
                tag: None,
                action_type: Some("ir.actions.act_window".into()),
            }),
            props: RenderProps {
                view_type: Some(view_type.into()),
                model: Some("res.partner".into()),
                res_id,
            },
            display_name: Some("Azure Interior".into()),
        }
    }

    #[test]
    fn test_controller_wins_over_stale_router() {
        let host = SnapshotHost::new(HostSnapshot {
            controller: Some(controller(Some(20), "form", Some(5))),
            hash: RouterHash {
                action: Some(ActionId::Id(19)),
                view_type: Some("list".into()),
                ..Default::default()
            },
            ..Default::default()
        });

        let page = resolve_current_page(&host).unwrap();
        assert_eq!(page.action_id, ActionId::Id(20));
        assert_eq!(page.view_type.as_deref(), Some("form"));
        assert_eq!(page.model.as_deref(), Some("res.partner"));
        assert_eq!(page.res_id, Some(5));
        assert_eq!(page.display_name.as_deref(), Some("Azure Interior"));
    }

    #[test]
    fn test_failing_controller_falls_back_to_hash() {
        let host = SnapshotHost::new(HostSnapshot {
            controller_error: Some("action service not started".into()),
            hash: RouterHash {
                action: Some(ActionId::Id(12)),
                view_type: Some("list".into()),
                ..Default::default()
            },
            ..Default::default()
        });

        assert_eq!(
            resolve_current_page(&host),
            Some(PageInfo {
                action_id: ActionId::Id(12),
                view_type: Some("list".into()),
                model: None,
                res_id: None,
                display_name: None,
            })
        );
    }

    #[test]
    fn test_controller_without_action_id_falls_back() {
        let host = SnapshotHost::new(HostSnapshot {
            controller: Some(controller(None, "form", None)),
            hash: RouterHash {
                action: Some(ActionId::Id(3)),
                ..Default::default()
            },
            ..Default::default()
        });

        assert_eq!(resolve_current_page(&host).unwrap().action_id, ActionId::Id(3));
    }

    #[test]
    fn test_client_action_uses_tag() {
        let host = SnapshotHost::new(HostSnapshot {
            controller: Some(ControllerSnapshot {
                action: Some(ActionDescriptor {
                    id: None,
                    tag: Some("mail.action_discuss".into()),
                    action_type: Some(CLIENT_ACTION_TYPE.into()),
                }),
                ..Default::default()
            }),
            ..Default::default()
        });

        let page = resolve_current_page(&host).unwrap();
        assert_eq!(page.action_id, ActionId::Tag("mail.action_discuss".into()));
        assert_eq!(page.key().as_str(), "mail.action_discuss::");
    }

    #[test]
    fn test_nothing_open_resolves_none() {
        let host = SnapshotHost::new(HostSnapshot {
            router_error: Some("router not ready".into()),
            ..Default::default()
        });
        assert_eq!(resolve_current_page(&host), None);

        let home = SnapshotHost::new(HostSnapshot::default());
        assert_eq!(resolve_current_page(&home), None);
    }
}
