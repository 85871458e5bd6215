// Business logic services
// Framework-agnostic, 100% testable

// Page identity + pinned pages
pub mod resolver;
pub mod pins;

// Favorite apps
pub mod favorites;

// Sidebar and launcher state
pub mod sidebar;
pub mod launcher;

pub use resolver::resolve_current_page;
pub use pins::{load_pins, resolve_pin_name, strip_site_suffix, PinBoard};
pub use favorites::FavoriteApps;
pub use sidebar::{is_menu_active, menu_icon, SidebarState};
pub use launcher::AppLauncher;
