use ndarray::{Array2, ArrayView2, ArrayViewMut2};

use super::grid::UniformGrid;

/// Scaled difference coefficients of the explicit update.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Burgers2dCoefficients {
    /// dt / dx
    pub adv_x: f64,
    /// dt / dy
    pub adv_y: f64,
    /// nu * dt / dx^2
    pub diff_x: f64,
    /// nu * dt / dy^2
    pub diff_y: f64,
}
impl Burgers2dCoefficients {
    pub fn new(grid: &UniformGrid, nu: f64, dt: f64) -> Self {
        Self {
            adv_x: dt / grid.dx,
            adv_y: dt / grid.dy,
            diff_x: nu * dt / (grid.dx * grid.dx),
            diff_y: nu * dt / (grid.dy * grid.dy),
        }
    }
}

/// Explicit finite-difference step for the coupled viscous Burgers' system.
///
/// Both components are advected with `u` as the x-speed and `v` as the
/// y-speed, using first-order backward differences, and diffused with
/// second-order central differences. Only interior cells are written; the
/// first and last rows and columns keep whatever the boundary pass left there.
pub struct Disc2dBurgers {
    pub coeffs: Burgers2dCoefficients,
    un: Array2<f64>,
    vn: Array2<f64>,
}
impl Disc2dBurgers {
    pub fn new(coeffs: Burgers2dCoefficients, shape: (usize, usize)) -> Self {
        Self {
            coeffs,
            un: Array2::zeros(shape),
            vn: Array2::zeros(shape),
        }
    }
    pub fn equation_of_motion(&mut self, mut u: ArrayViewMut2<f64>, mut v: ArrayViewMut2<f64>) {
        // snapshot before any cell is overwritten
        self.un.assign(&u);
        self.vn.assign(&v);
        let un = self.un.view();
        let vn = self.vn.view();
        let (ny, nx) = un.dim();
        for i in 1..ny - 1 {
            for j in 1..nx - 1 {
                u[(i, j)] = self.update_cell(un, un, vn, i, j);
                v[(i, j)] = self.update_cell(vn, un, vn, i, j);
            }
        }
    }
    fn update_cell(
        &self,
        q: ArrayView2<f64>,
        un: ArrayView2<f64>,
        vn: ArrayView2<f64>,
        i: usize,
        j: usize,
    ) -> f64 {
        let c = &self.coeffs;
        let qc = q[(i, j)];
        let q_west = q[(i, j - 1)];
        let q_east = q[(i, j + 1)];
        let q_south = q[(i - 1, j)];
        let q_north = q[(i + 1, j)];
        qc - c.adv_x * un[(i, j)] * (qc - q_west) - c.adv_y * vn[(i, j)] * (qc - q_south)
            + c.diff_x * (q_east - 2.0 * qc + q_west)
            + c.diff_y * (q_north - 2.0 * qc + q_south)
    }
}
