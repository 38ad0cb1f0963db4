use ndarray::Array1;

use crate::error::{SolverError, SolverResult, check_positive};

/// Uniform Cartesian grid on [0, lx] x [0, ly].
///
/// Field arrays laid on this grid have shape `(ny, nx)`: the row index runs
/// along y and the column index along x.
#[derive(Clone, Debug, PartialEq)]
pub struct UniformGrid {
    pub lx: f64,
    pub ly: f64,
    pub nx: usize,
    pub ny: usize,
    pub dx: f64,
    pub dy: f64,
}
impl UniformGrid {
    pub fn new(lx: f64, ly: f64, nx: usize, ny: usize) -> SolverResult<Self> {
        if nx < 3 || ny < 4 {
            return Err(SolverError::InvalidGrid { nx, ny });
        }
        check_positive("lx", lx)?;
        check_positive("ly", ly)?;
        let dx = lx / (nx - 1) as f64;
        let dy = ly / (ny - 1) as f64;
        Ok(Self {
            lx,
            ly,
            nx,
            ny,
            dx,
            dy,
        })
    }
    pub fn shape(&self) -> (usize, usize) {
        (self.ny, self.nx)
    }
    pub fn x_coords(&self) -> Array1<f64> {
        Array1::linspace(0.0, self.lx, self.nx)
    }
    pub fn y_coords(&self) -> Array1<f64> {
        Array1::linspace(0.0, self.ly, self.ny)
    }
}
