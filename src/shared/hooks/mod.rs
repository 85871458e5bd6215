// Custom Dioxus hooks
pub mod use_theme;
pub mod use_bookmarks;
pub mod use_sidebar;

pub use use_theme::{use_dark_mode, load_theme_mode, save_theme_mode, saved_theme_mode, DarkModeState, THEME_MODE_KEY};
pub use use_bookmarks::{use_favorite_ids, use_pinned_pages};
pub use use_sidebar::use_sidebar;
