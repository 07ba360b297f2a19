use thiserror::Error;

/// Why a tick produced no cell information. The display text is what ends up
/// in [`CellInfoData::error_message`](crate::model::CellInfoData).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CellInfoError {
    #[error("Location permission not granted. Cell information requires it.")]
    PermissionDenied,
    #[error("No cell information available.")]
    NoCellInfo,
    #[error("No registered serving cell found.")]
    NoRegisteredCell,
    #[error("Unsupported cell type: {0}")]
    UnsupportedTechnology(String),
    #[error("Security Exception: Permission may be missing or revoked.")]
    Security,
    #[error("An unexpected error occurred while fetching cell info.")]
    Platform,
}

/// Failure reported by the platform while enumerating cells.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlatformError {
    #[error("security exception: {0}")]
    Security(String),
    #[error("platform failure: {0}")]
    Other(String),
}

impl From<PlatformError> for CellInfoError {
    fn from(value: PlatformError) -> Self {
        match value {
            PlatformError::Security(_) => CellInfoError::Security,
            PlatformError::Other(_) => CellInfoError::Platform,
        }
    }
}
