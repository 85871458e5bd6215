pub mod errors;
pub mod events;
pub mod logging;

// Dioxus hooks for the sidebar, launcher and systray components
pub mod hooks;
