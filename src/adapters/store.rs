use crate::domain::artifact::Artifact;
use crate::domain::ports::ArtifactStore;
use crate::utils::error::{CacheError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tempfile::NamedTempFile;

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

/// File-system artifact store rooted at the cache directory.
///
/// Writes go through a temporary file in the target directory and are
/// renamed into place, so a concurrent reader never sees a partial
/// artifact. Directories are created on first write.
#[derive(Debug, Clone)]
pub struct FsArtifactStore {
    root: PathBuf,
}

impl FsArtifactStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn full_path(&self, artifact: &Artifact) -> PathBuf {
        self.root.join(artifact.rel_path())
    }
}

impl ArtifactStore for FsArtifactStore {
    fn exists(&self, artifact: &Artifact) -> bool {
        self.full_path(artifact).is_file()
    }

    fn last_modified(&self, artifact: &Artifact) -> Result<SystemTime> {
        let path = self.full_path(artifact);
        let metadata = fs::metadata(&path).map_err(|err| missing_or_io(err, artifact))?;
        Ok(metadata.modified()?)
    }

    fn read<D: DeserializeOwned>(&self, artifact: &Artifact) -> Result<D> {
        let path = self.full_path(artifact);
        let body = fs::read_to_string(&path).map_err(|err| missing_or_io(err, artifact))?;
        Ok(quick_xml::de::from_str(&body)?)
    }

    fn write<D: Serialize>(&self, artifact: &Artifact, document: &D) -> Result<()> {
        let path = self.full_path(artifact);
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        let body = quick_xml::se::to_string(document)?;
        let mut temp = NamedTempFile::new_in(dir)?;
        temp.write_all(XML_DECLARATION.as_bytes())?;
        temp.write_all(body.as_bytes())?;
        temp.persist(&path)?;

        tracing::debug!("Wrote {}", path.display());
        Ok(())
    }
}

fn missing_or_io(err: std::io::Error, artifact: &Artifact) -> CacheError {
    if err.kind() == std::io::ErrorKind::NotFound {
        CacheError::NotFound(artifact.to_string())
    } else {
        CacheError::Io(err)
    }
}
