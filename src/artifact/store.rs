use std::path::{Path, PathBuf};

use super::encoder::LabelEncoder;
use super::error::PredictorError;
use super::model::DecisionTree;
use super::{ENCODER_FILE, MODEL_FILE};

// ---------------------------------------------------------------------------
// Artifact locations
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub model: PathBuf,
    pub encoder: PathBuf,
}

impl ArtifactPaths {
    /// The default file names inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::with_files(dir, MODEL_FILE, ENCODER_FILE)
    }

    pub fn with_files(dir: impl AsRef<Path>, model: &str, encoder: &str) -> Self {
        let dir = dir.as_ref();
        Self {
            model: dir.join(model),
            encoder: dir.join(encoder),
        }
    }
}

impl Default for ArtifactPaths {
    fn default() -> Self {
        Self::in_dir(".")
    }
}

// ---------------------------------------------------------------------------
// Byte source
// ---------------------------------------------------------------------------

/// Where artifact bytes come from. The filesystem in production.
pub trait ArtifactSource {
    fn read(&self, path: &Path) -> std::io::Result<Vec<u8>>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FsSource;

impl ArtifactSource for FsSource {
    fn read(&self, path: &Path) -> std::io::Result<Vec<u8>> {
        std::fs::read(path)
    }
}

// ---------------------------------------------------------------------------
// Load report
// ---------------------------------------------------------------------------

/// Outcome of one `ensure_loaded` call for a single artifact.
#[derive(Debug)]
pub enum LoadStatus {
    /// Already in memory; nothing was read.
    Cached,
    /// Read and parsed during this call.
    Loaded,
    Failed(PredictorError),
}

impl LoadStatus {
    pub fn is_available(&self) -> bool {
        !matches!(self, LoadStatus::Failed(_))
    }

    pub fn error(&self) -> Option<&PredictorError> {
        match self {
            LoadStatus::Failed(e) => Some(e),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct LoadReport {
    pub model: LoadStatus,
    pub encoder: LoadStatus,
}

// ---------------------------------------------------------------------------
// ArtifactStore – process-lifetime cache
// ---------------------------------------------------------------------------

/// Lazily loaded model and encoder.
///
/// Each artifact is read at most once after it loads successfully. Failed
/// artifacts stay empty and are attempted again on the next call, so a file
/// dropped into the folder while the window is open gets picked up.
pub struct ArtifactStore<S = FsSource> {
    source: S,
    paths: ArtifactPaths,
    model: Option<DecisionTree>,
    encoder: Option<LabelEncoder>,
}

impl ArtifactStore<FsSource> {
    pub fn new(paths: ArtifactPaths) -> Self {
        Self::with_source(FsSource, paths)
    }
}

impl<S: ArtifactSource> ArtifactStore<S> {
    pub fn with_source(source: S, paths: ArtifactPaths) -> Self {
        Self {
            source,
            paths,
            model: None,
            encoder: None,
        }
    }

    pub fn paths(&self) -> &ArtifactPaths {
        &self.paths
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn model(&self) -> Option<&DecisionTree> {
        self.model.as_ref()
    }

    pub fn encoder(&self) -> Option<&LabelEncoder> {
        self.encoder.as_ref()
    }

    /// Load whatever is not cached yet.
    pub fn ensure_loaded(&mut self) -> LoadReport {
        let model = if self.model.is_some() {
            log::debug!("Model already cached");
            LoadStatus::Cached
        } else {
            match self.read_with(&self.paths.model, DecisionTree::from_slice) {
                Ok(tree) => {
                    log::info!(
                        "Loaded model {} ({} nodes, {} classes)",
                        self.paths.model.display(),
                        tree.root.node_count(),
                        tree.n_classes
                    );
                    self.model = Some(tree);
                    LoadStatus::Loaded
                }
                Err(e) => {
                    log::error!("Could not load model: {e}");
                    LoadStatus::Failed(e)
                }
            }
        };

        let encoder = if self.encoder.is_some() {
            log::debug!("Encoder already cached");
            LoadStatus::Cached
        } else {
            match self.read_with(&self.paths.encoder, LabelEncoder::from_slice) {
                Ok(enc) => {
                    log::info!(
                        "Loaded encoder {} ({} classes)",
                        self.paths.encoder.display(),
                        enc.len()
                    );
                    self.encoder = Some(enc);
                    LoadStatus::Loaded
                }
                Err(e) => {
                    log::warn!("Could not load encoder: {e}");
                    LoadStatus::Failed(e)
                }
            }
        };

        LoadReport { model, encoder }
    }

    /// Forget both artifacts so the next call reads them again.
    pub fn reset(&mut self) {
        self.model = None;
        self.encoder = None;
    }

    fn read_with<T>(
        &self,
        path: &Path,
        parse: fn(&Path, &[u8]) -> Result<T, PredictorError>,
    ) -> Result<T, PredictorError> {
        let bytes = self
            .source
            .read(path)
            .map_err(|e| PredictorError::from_io(path, e))?;
        parse(path, &bytes)
    }
}

// ---------------------------------------------------------------------------
// In-memory source for tests
// ---------------------------------------------------------------------------

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::path::{Path, PathBuf};

    use super::ArtifactSource;

    /// Serves bytes from a map and counts reads per path.
    #[derive(Default)]
    pub struct MemorySource {
        files: HashMap<PathBuf, Vec<u8>>,
        reads: RefCell<HashMap<PathBuf, usize>>,
    }

    impl MemorySource {
        pub fn with_file(mut self, path: &Path, bytes: impl Into<Vec<u8>>) -> Self {
            self.files.insert(path.to_path_buf(), bytes.into());
            self
        }

        pub fn reads(&self, path: &Path) -> usize {
            self.reads.borrow().get(path).copied().unwrap_or(0)
        }
    }

    impl ArtifactSource for MemorySource {
        fn read(&self, path: &Path) -> std::io::Result<Vec<u8>> {
            *self.reads.borrow_mut().entry(path.to_path_buf()).or_insert(0) += 1;
            self.files
                .get(path)
                .cloned()
                .ok_or_else(|| std::io::Error::from(std::io::ErrorKind::NotFound))
        }
    }
}
