//! Collapsible sidebar listing the current app's menus

use crate::domain::host::{AppDirectory, RouterState};
use crate::domain::models::{ClassPatch, MenuNode};
use crate::shared::logging::{self, LogOperation};

pub const SIDEBAR_OPEN_CLASS: &str = "nova-sidebar-open";
pub const SIDEBAR_COLLAPSED_CLASS: &str = "nova-sidebar-collapsed";
pub const HOME_MENU_VISIBLE_CLASS: &str = "nova-home-menu-visible";

const DEFAULT_ICON: &str = "fa-circle-o";

/// Menu label fragments and their icons. First fragment contained in the
/// lowercased label wins, so order matters.
const MENU_ICONS: &[(&str, &str)] = &[
    ("contacts", "fa-address-book"),
    ("customers", "fa-users"),
    ("products", "fa-cube"),
    ("product", "fa-cube"),
    ("orders", "fa-shopping-cart"),
    ("order", "fa-shopping-cart"),
    ("invoices", "fa-file-text-o"),
    ("invoice", "fa-file-text-o"),
    ("pipeline", "fa-filter"),
    ("leads", "fa-phone"),
    ("lead", "fa-phone"),
    ("opportunities", "fa-star"),
    ("quotations", "fa-file-o"),
    ("quotation", "fa-file-o"),
    ("sales orders", "fa-shopping-bag"),
    ("commandes", "fa-shopping-bag"),
    ("teams", "fa-group"),
    ("activities", "fa-clock-o"),
    ("reports", "fa-bar-chart"),
    ("reporting", "fa-bar-chart"),
    ("analyse", "fa-bar-chart"),
    ("configuration", "fa-cog"),
    ("settings", "fa-cog"),
    ("paramètres", "fa-cog"),
    ("employees", "fa-id-badge"),
    ("employés", "fa-id-badge"),
    ("calendar", "fa-calendar"),
    ("calendrier", "fa-calendar"),
    ("dashboard", "fa-tachometer"),
    ("tableau de bord", "fa-tachometer"),
    ("kanban", "fa-th-large"),
    ("projects", "fa-folder"),
    ("projets", "fa-folder"),
    ("tasks", "fa-tasks"),
    ("tâches", "fa-tasks"),
    ("timesheets", "fa-clock-o"),
    ("feuilles de temps", "fa-clock-o"),
    ("inventory", "fa-cubes"),
    ("inventaire", "fa-cubes"),
    ("operations", "fa-exchange"),
    ("opérations", "fa-exchange"),
    ("manufacturing", "fa-industry"),
    ("fabrication", "fa-industry"),
    ("purchases", "fa-shopping-basket"),
    ("achats", "fa-shopping-basket"),
    ("vendors", "fa-truck"),
    ("fournisseurs", "fa-truck"),
    ("payments", "fa-credit-card"),
    ("paiements", "fa-credit-card"),
    ("journals", "fa-book"),
    ("journaux", "fa-book"),
    ("clients", "fa-users"),
    ("articles", "fa-cube"),
    ("factures", "fa-file-text-o"),
    ("devis", "fa-file-o"),
    ("réparations", "fa-wrench"),
    ("repairs", "fa-wrench"),
    ("tickets", "fa-ticket"),
    ("planning", "fa-calendar-check-o"),
    ("notes", "fa-sticky-note"),
    ("discuss", "fa-comments"),
    ("mail", "fa-envelope"),
    ("accounting", "fa-university"),
    ("comptabilité", "fa-university"),
];

/// Font Awesome icon for a menu label
pub fn menu_icon(name: &str) -> &'static str {
    let name = name.to_lowercase();
    MENU_ICONS
        .iter()
        .find(|(fragment, _)| name.contains(fragment))
        .map(|(_, icon)| *icon)
        .unwrap_or(DEFAULT_ICON)
}

/// Whether the menu entry's action is the one in the router hash.
/// Compared numerically; entries without an action are never active.
pub fn is_menu_active<N, H>(item: &N, host: &H) -> bool
where
    N: MenuNode,
    H: RouterState + ?Sized,
{
    let Some(item_action) = item.action_id().and_then(|id| id.as_number()) else {
        return false;
    };
    match host.current_hash() {
        Ok(hash) => hash.action.and_then(|id| id.as_number()) == Some(item_action),
        Err(_) => false,
    }
}

#[derive(Debug, Clone)]
pub struct SidebarState<M> {
    collapsed: bool,
    current_app_id: Option<i64>,
    menu_items: Vec<M>,
}

impl<M: MenuNode + Clone> SidebarState<M> {
    pub fn new(collapsed: bool) -> Self {
        Self {
            collapsed,
            current_app_id: None,
            menu_items: Vec::new(),
        }
    }

    pub fn collapsed(&self) -> bool {
        self.collapsed
    }

    pub fn current_app_id(&self) -> Option<i64> {
        self.current_app_id
    }

    pub fn menu_items(&self) -> &[M] {
        &self.menu_items
    }

    /// Reload the top-level menus of the current app. Called on every
    /// navigation; the menu tree is cheap to fetch.
    pub fn refresh<H>(&mut self, host: &H) -> ClassPatch
    where
        H: AppDirectory<Menu = M> + ?Sized,
    {
        let mut patch = ClassPatch::default();
        match host.current_app() {
            Some(app) => {
                self.menu_items = match host.menu_tree(app.id) {
                    Ok(tree) => tree.children().to_vec(),
                    Err(e) => {
                        logging::log_host_error(LogOperation::Sidebar, "menu_tree", &e.to_string());
                        Vec::new()
                    }
                };
                self.current_app_id = Some(app.id);
                patch.set(SIDEBAR_OPEN_CLASS, true);
                patch.set(HOME_MENU_VISIBLE_CLASS, false);
            }
            None => {
                self.menu_items.clear();
                self.current_app_id = None;
                patch.set(SIDEBAR_OPEN_CLASS, false);
                patch.set(HOME_MENU_VISIBLE_CLASS, true);
            }
        }
        patch.set(SIDEBAR_COLLAPSED_CLASS, self.collapsed);
        logging::log_sidebar_refresh(self.current_app_id, self.menu_items.len());
        patch
    }

    pub fn toggle_collapse(&mut self) -> ClassPatch {
        self.collapsed = !self.collapsed;
        ClassPatch::toggle(SIDEBAR_COLLAPSED_CLASS, self.collapsed)
    }

    /// Classes to drop when the sidebar is removed from the page
    pub fn teardown() -> ClassPatch {
        ClassPatch {
            add: Vec::new(),
            remove: vec![SIDEBAR_OPEN_CLASS, SIDEBAR_COLLAPSED_CLASS],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::host::RouterHash;
    use crate::domain::models::{ActionId, App, MenuItem};
    use crate::infrastructure::host::{HostSnapshot, SnapshotHost};

    fn host() -> SnapshotHost {
        let menu = MenuItem::new("CRM", None).with_children(vec![
            MenuItem::new("Pipeline", Some(ActionId::Id(50))),
            MenuItem::new("Reporting", None),
        ]);
        SnapshotHost::new(HostSnapshot {
            apps: vec![App::new(3, "CRM")],
            current_app_id: Some(3),
            menus: [(3, menu)].into_iter().collect(),
            hash: RouterHash {
                action: Some(ActionId::Tag("50".into())),
                ..Default::default()
            },
            ..Default::default()
        })
    }

    #[test]
    fn test_refresh_loads_top_level_menus() {
        let host = host();
        let mut sidebar = SidebarState::new(false);
        let patch = sidebar.refresh(&host);

        assert_eq!(sidebar.current_app_id(), Some(3));
        assert_eq!(sidebar.menu_items().len(), 2);
        assert_eq!(patch.add, vec![SIDEBAR_OPEN_CLASS]);
        assert_eq!(patch.remove, vec![HOME_MENU_VISIBLE_CLASS, SIDEBAR_COLLAPSED_CLASS]);
    }

    #[test]
    fn test_refresh_on_home_menu_clears_items() {
        let host = host();
        let mut sidebar = SidebarState::new(true);
        sidebar.refresh(&host);

        host.update(|s| s.current_app_id = None);
        let patch = sidebar.refresh(&host);

        assert!(sidebar.menu_items().is_empty());
        assert_eq!(sidebar.current_app_id(), None);
        assert_eq!(patch.add, vec![HOME_MENU_VISIBLE_CLASS, SIDEBAR_COLLAPSED_CLASS]);
        assert_eq!(patch.remove, vec![SIDEBAR_OPEN_CLASS]);
    }

    #[test]
    fn test_missing_menu_tree_clears_items() {
        let host = host();
        let mut sidebar = SidebarState::new(false);
        sidebar.refresh(&host);

        host.update(|s| s.menus.clear());
        sidebar.refresh(&host);
        assert!(sidebar.menu_items().is_empty());
        assert_eq!(sidebar.current_app_id(), Some(3));
    }

    #[test]
    fn test_toggle_collapse() {
        let mut sidebar: SidebarState<MenuItem> = SidebarState::new(false);
        assert_eq!(sidebar.toggle_collapse().add, vec![SIDEBAR_COLLAPSED_CLASS]);
        assert_eq!(sidebar.toggle_collapse().remove, vec![SIDEBAR_COLLAPSED_CLASS]);
        assert!(!sidebar.collapsed());
    }

    #[test]
    fn test_teardown_removes_sidebar_classes() {
        let patch = SidebarState::<MenuItem>::teardown();
        assert!(patch.add.is_empty());
        assert_eq!(patch.remove, vec![SIDEBAR_OPEN_CLASS, SIDEBAR_COLLAPSED_CLASS]);
    }

    #[test]
    fn test_is_menu_active_compares_numerically() {
        let host = host();
        let mut sidebar = SidebarState::new(false);
        sidebar.refresh(&host);

        assert!(is_menu_active(&sidebar.menu_items()[0], &host));
        assert!(!is_menu_active(&sidebar.menu_items()[1], &host));

        host.update(|s| s.router_error = Some("not ready".into()));
        assert!(!is_menu_active(&sidebar.menu_items()[0], &host));
    }

    #[test]
    fn test_menu_icon() {
        assert_eq!(menu_icon("Customers"), "fa-users");
        assert_eq!(menu_icon("Sales Orders"), "fa-shopping-cart");
        assert_eq!(menu_icon("Tableau de bord"), "fa-tachometer");
        assert_eq!(menu_icon("Paramètres"), "fa-cog");
        assert_eq!(menu_icon("Something else"), DEFAULT_ICON);
    }
}
