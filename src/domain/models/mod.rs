// Domain models
// Pure Rust, no framework dependencies

pub mod page;
pub mod pin;
pub mod menu;
pub mod theme;

pub use page::{ActionId, PageInfo, PinKey};
pub use pin::Pin;
pub use menu::{find_menu_by_action, App, MenuItem, MenuNode};
pub use theme::{AccentColor, ClassPatch, DarkModeToggle, ThemeMode, ThemeSettings, DARK_CLASS};
