//! Structured logging module for the Nova theme
//!
//! Provides consistent, contextual logging across the subsystem.
//! Every event carries an `operation` field so absorbed failures can be
//! traced back to the component that swallowed them.

/// Log categories for the different components
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    Storage,
    PageResolution,
    Pinning,
    Favorites,
    Sidebar,
    Theme,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::Storage => "storage",
            LogOperation::PageResolution => "page_resolution",
            LogOperation::Pinning => "pinning",
            LogOperation::Favorites => "favorites",
            LogOperation::Sidebar => "sidebar",
            LogOperation::Theme => "theme",
        }
    }
}

/// Log a stored value that could not be read or parsed
pub fn log_storage_read_error(key: &str, error: &str) {
    tracing::warn!(
        operation = LogOperation::Storage.as_str(),
        storage_key = key,
        error = error,
        "Stored value unreadable, using empty list"
    );
}

/// Log a failed write to the durable store
pub fn log_storage_write_error(key: &str, error: &str) {
    tracing::warn!(
        operation = LogOperation::Storage.as_str(),
        storage_key = key,
        error = error,
        "Failed to persist value"
    );
}

/// Log an ambient-state source that yielded nothing
pub fn log_source_unavailable(source: &str, error: &str) {
    tracing::debug!(
        operation = LogOperation::PageResolution.as_str(),
        source = source,
        error = error,
        "Navigation source unavailable"
    );
}

/// Log the resolved page identity
pub fn log_page_resolved(source: &str, key: &str) {
    tracing::trace!(
        operation = LogOperation::PageResolution.as_str(),
        source = source,
        pin_key = key,
        "Resolved current page"
    );
}

/// Log legacy pin records migrated on load
pub fn log_pins_migrated(migrated: usize, total: usize) {
    if migrated > 0 {
        tracing::info!(
            operation = LogOperation::Pinning.as_str(),
            migrated_count = migrated,
            pin_count = total,
            "Computed keys for legacy pinned pages"
        );
    }
}

/// Log a pin mutation
pub fn log_pin_change(action: &str, key: &str, pin_count: usize) {
    tracing::info!(
        operation = LogOperation::Pinning.as_str(),
        change = action,
        pin_key = key,
        pin_count = pin_count,
        "Pinned pages updated"
    );
}

/// Log a pin command that left the list untouched
pub fn log_pin_noop(action: &str, reason: &str) {
    tracing::debug!(
        operation = LogOperation::Pinning.as_str(),
        change = action,
        reason = reason,
        "Pinned pages unchanged"
    );
}

/// Log a favorite toggle
pub fn log_favorite_toggled(app_id: i64, favorited: bool, count: usize) {
    tracing::info!(
        operation = LogOperation::Favorites.as_str(),
        app_id = app_id,
        favorited = favorited,
        favorite_count = count,
        "Favorite apps updated"
    );
}

/// Log favorites dropped because their app no longer exists
pub fn log_stale_favorites(stale: usize) {
    if stale > 0 {
        tracing::debug!(
            operation = LogOperation::Favorites.as_str(),
            stale_count = stale,
            "Skipped favorites without a matching app"
        );
    }
}

/// Log a sidebar refresh
pub fn log_sidebar_refresh(app_id: Option<i64>, item_count: usize) {
    tracing::debug!(
        operation = LogOperation::Sidebar.as_str(),
        app_id = ?app_id,
        item_count = item_count,
        "Sidebar menu refreshed"
    );
}

/// Log a host call failure outside page resolution
pub fn log_host_error(operation: LogOperation, call: &str, error: &str) {
    tracing::warn!(
        operation = operation.as_str(),
        host_call = call,
        error = error,
        "Web client call failed"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_operation_as_str() {
        assert_eq!(LogOperation::Storage.as_str(), "storage");
        assert_eq!(LogOperation::PageResolution.as_str(), "page_resolution");
        assert_eq!(LogOperation::Pinning.as_str(), "pinning");
        assert_eq!(LogOperation::Favorites.as_str(), "favorites");
        assert_eq!(LogOperation::Sidebar.as_str(), "sidebar");
        assert_eq!(LogOperation::Theme.as_str(), "theme");
    }
}
