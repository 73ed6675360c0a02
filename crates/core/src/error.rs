use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error(
        "failed to create directory {path}: {source}",
        path = path.display()
    )]
    DirCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to resolve current directory: {0}")]
    CurrentDir(std::io::Error),
    #[error("failed to stage images: {0}")]
    Staging(#[from] faceswap_files::FilesError),
    #[error("failed to write report: {0}")]
    Report(std::io::Error),
}

pub type CheckResult<T> = std::result::Result<T, CheckError>;
