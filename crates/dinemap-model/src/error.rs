use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    /// Neither the selection nor the full dataset has any coordinates to average.
    #[error("degenerate dataset: no business records to compute a map center from")]
    DegenerateDataset,
}
