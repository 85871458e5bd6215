use dioxus::prelude::*;

use crate::domain::models::MenuItem;
use crate::domain::services::SidebarState;
use crate::infrastructure::dom::{self, PatchTarget};

/// Sidebar state, collapsed per `data-nova-sidebar-collapsed`.
/// Its body classes are removed when the component unmounts.
pub fn use_sidebar() -> Signal<SidebarState<MenuItem>> {
    let state = use_signal(|| SidebarState::new(dom::theme_settings().sidebar_collapsed));

    use_drop(|| {
        dom::apply_patch(PatchTarget::Body, &SidebarState::<MenuItem>::teardown());
    });

    state
}
