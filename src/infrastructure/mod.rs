// Storage backends, web client adapters and the document bridge
pub mod storage;
pub mod host;
pub mod dom;
