use crate::domain::artifact::Artifact;
use crate::utils::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::SystemTime;

/// Retrieves remote documents as text.
pub trait Fetcher: Send + Sync {
    fn fetch_text(&self, url: &str) -> impl std::future::Future<Output = Result<String>> + Send;
}

/// Typed persistence for cache artifacts.
///
/// Reads and writes go through serde so callers never touch raw XML.
pub trait ArtifactStore: Send + Sync {
    fn exists(&self, artifact: &Artifact) -> bool;

    /// Last modification time of the artifact, if it is present.
    fn last_modified(&self, artifact: &Artifact) -> Result<SystemTime>;

    fn read<D: DeserializeOwned>(&self, artifact: &Artifact) -> Result<D>;

    fn write<D: Serialize>(&self, artifact: &Artifact, document: &D) -> Result<()>;
}
