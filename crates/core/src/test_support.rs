//! Simulated working trees for tests.

use crate::config::CheckerConfig;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// PNG signature plus the start of an IHDR chunk; enough for media type sniffing.
pub(crate) const PNG_BYTES: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44, 0x52,
];

/// Writes a small PNG to `path`, creating parent directories.
pub(crate) fn write_image(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create image parent dir");
    }
    let mut bytes = PNG_BYTES.to_vec();
    // Distinct content per file so byte comparisons are meaningful
    bytes.extend_from_slice(path.to_string_lossy().as_bytes());
    fs::write(path, bytes).expect("Failed to write image");
}

/// A temporary repository root with a resolved config.
pub(crate) struct Fixture {
    _temp: TempDir,
    pub(crate) config: CheckerConfig,
}

impl Fixture {
    pub(crate) fn empty() -> Self {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let config =
            CheckerConfig::new(temp.path().to_path_buf(), None).expect("temp dir is a directory");
        Self {
            _temp: temp,
            config,
        }
    }

    pub(crate) fn with_images() -> Self {
        let fixture = Self::empty();
        write_image(&fixture.config.source_image_path());
        write_image(&fixture.config.target_image_path());
        fixture
    }

    /// Images, extension and model all present.
    pub(crate) fn ready() -> Self {
        let fixture = Self::with_images();
        fixture.install_reactor();
        fixture.install_model();
        fixture
    }

    pub(crate) fn install_reactor(&self) {
        fs::create_dir_all(self.config.reactor_dir()).expect("Failed to create ReActor dir");
    }

    pub(crate) fn install_model(&self) {
        fs::create_dir_all(self.config.buffalo_model_dir()).expect("Failed to create model dir");
    }
}
