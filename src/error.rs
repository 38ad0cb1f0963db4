use thiserror::Error;

pub type SolverResult<T> = Result<T, SolverError>;

#[derive(Error, Debug)]
pub enum SolverError {
    /// Interior slicing needs nx >= 3, the nozzle band needs ny >= 4.
    #[error("invalid grid resolution nx = {nx}, ny = {ny} (need nx >= 3, ny >= 4)")]
    InvalidGrid { nx: usize, ny: usize },

    #[error("parameter `{name}` must be finite and positive, got {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("nozzle sequence has {len} entries, step {step} requested")]
    NozzleStepOutOfRange { step: usize, len: usize },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse parameter file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to write vtu: {0}")]
    Vtk(#[from] vtkio::Error),
}

/// Physical parameters (extents, viscosity, stability factor) must be finite
/// and strictly positive.
pub(crate) fn check_positive(name: &'static str, value: f64) -> SolverResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SolverError::InvalidParameter { name, value })
    }
}
