use serde::{Deserialize, Serialize};

use super::page::{lenient_action_id, ActionId};

/// An installed top-level application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct App {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub xmlid: Option<String>,
}

impl App {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            xmlid: None,
        }
    }
}

/// Read-only view of a node in a host-owned menu tree.
pub trait MenuNode: Sized {
    fn action_id(&self) -> Option<ActionId>;
    fn label(&self) -> Option<&str>;
    fn children(&self) -> &[Self];
}

/// Menu entry as served by the web client's menu service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "actionID", default, deserialize_with = "lenient_action_id")]
    pub action_id: Option<ActionId>,
    #[serde(default)]
    pub xmlid: Option<String>,
    #[serde(rename = "childrenTree", default)]
    pub children: Vec<MenuItem>,
}

impl MenuItem {
    pub fn new(name: impl Into<String>, action_id: Option<ActionId>) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
            action_id,
            xmlid: None,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<MenuItem>) -> Self {
        self.children = children;
        self
    }
}

impl MenuNode for MenuItem {
    fn action_id(&self) -> Option<ActionId> {
        self.action_id.clone()
    }

    fn label(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn children(&self) -> &[Self] {
        &self.children
    }
}

/// Depth-first search for the first node whose action string-equals `target`.
pub fn find_menu_by_action<'a, N: MenuNode>(root: Option<&'a N>, target: &ActionId) -> Option<&'a N> {
    let node = root?;
    if node.action_id().is_some_and(|id| id.matches(target)) {
        return Some(node);
    }
    node.children()
        .iter()
        .find_map(|child| find_menu_by_action(Some(child), target))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sales_tree() -> MenuItem {
        MenuItem::new("Sales", None).with_children(vec![
            MenuItem::new("Orders", None).with_children(vec![
                MenuItem::new("Quotations", Some(ActionId::Id(10))),
                MenuItem::new("Orders", Some(ActionId::Id(11))),
            ]),
            MenuItem::new("Customers", Some(ActionId::Id(12))),
            MenuItem::new("Customers (duplicate)", Some(ActionId::Id(12))),
        ])
    }

    #[test]
    fn test_find_returns_first_depth_first_match() {
        let tree = sales_tree();
        let found = find_menu_by_action(Some(&tree), &ActionId::Id(12)).unwrap();
        assert_eq!(found.label(), Some("Customers"));

        let nested = find_menu_by_action(Some(&tree), &ActionId::Tag("11".into())).unwrap();
        assert_eq!(nested.label(), Some("Orders"));
    }

    #[test]
    fn test_find_missing_and_null_root() {
        let tree = sales_tree();
        assert!(find_menu_by_action(Some(&tree), &ActionId::Id(99)).is_none());
        assert!(find_menu_by_action::<MenuItem>(None, &ActionId::Id(10)).is_none());
    }

    #[test]
    fn test_menu_item_accepts_false_action() {
        let raw = r#"{
            "id": 1, "name": "Sales", "actionID": false,
            "childrenTree": [{"id": 2, "name": "Customers", "actionID": 12}]
        }"#;
        let tree: MenuItem = serde_json::from_str(raw).unwrap();
        assert_eq!(tree.action_id, None);
        assert_eq!(tree.children[0].action_id, Some(ActionId::Id(12)));
    }
}
