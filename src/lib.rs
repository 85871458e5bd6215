//! Nova theme: favorite apps, pinned pages and theme state for the web
//! client sidebar and app launcher.

// Public API exports (shared between browser and native builds)
pub mod domain;
pub mod shared;
pub mod config;
pub mod infrastructure;

// Native-only modules (NOT compiled for WASM)
#[cfg(not(target_arch = "wasm32"))]
pub mod cli;

pub use domain::host::{ActionState, AppDirectory, DocumentState, RouterState, WebClientHost};
pub use domain::models::{ActionId, App, PageInfo, Pin, PinKey};
pub use domain::services::{resolve_current_page, FavoriteApps, PinBoard};
pub use infrastructure::storage::{BookmarkStore, KeyValueStore};
pub use shared::errors::{AppError, HostError, Result};
pub use shared::events::{NotificationBus, Topic};
