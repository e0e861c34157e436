// Adapters layer: concrete implementations for external systems (storage, http).

pub mod http;
pub mod store;

pub use http::HttpFetcher;
pub use store::FsArtifactStore;
