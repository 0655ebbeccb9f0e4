use thiserror::Error;

use dinemap_ingest::IngestError;
use dinemap_model::DashboardError;

/// Failure to bring the dataset up; fatal to the session.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Ingest(#[from] IngestError),
    #[error(transparent)]
    Dataset(#[from] DashboardError),
}
