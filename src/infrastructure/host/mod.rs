// Web client adapters
pub mod snapshot;

pub use snapshot::{HostSnapshot, SnapshotHost};
