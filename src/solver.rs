use ndarray::Array2;

use crate::disc::{
    boundary::{ConstantBoundary, NozzleBoundary},
    burgers2d::{Burgers2dCoefficients, Disc2dBurgers},
    grid::UniformGrid,
};
use crate::error::{SolverResult, check_positive};

#[derive(Clone, Debug, PartialEq)]
pub struct SolverParameters {
    /// stability factor, dt = sigma * dx * dy / nu
    pub sigma: f64,
    pub nu: f64,
    pub final_step: usize,
    pub boundary_value: f64,
    pub nozzle: NozzleParameters,
}
#[derive(Clone, Debug, PartialEq)]
pub struct NozzleParameters {
    pub u_value: f64,
    pub v_value: f64,
    pub pulse_steps: usize,
}
impl Default for SolverParameters {
    fn default() -> Self {
        Self {
            sigma: 0.001,
            nu: 0.01,
            final_step: 2510,
            boundary_value: 0.0,
            nozzle: NozzleParameters::default(),
        }
    }
}
impl Default for NozzleParameters {
    fn default() -> Self {
        Self {
            u_value: 10.0,
            v_value: 10.0,
            pulse_steps: 1000,
        }
    }
}

/// Velocity fields on a fixed grid, evolved to `final_step` on construction.
pub struct BurgersSolver {
    u: Array2<f64>,
    v: Array2<f64>,
    grid: UniformGrid,
    dt: f64,
    current_step: usize,
    final_step: usize,
    disc: Disc2dBurgers,
    wall: ConstantBoundary,
    nozzle_u: NozzleBoundary,
    nozzle_v: NozzleBoundary,
}
impl BurgersSolver {
    pub fn new(grid: UniformGrid, params: &SolverParameters) -> SolverResult<Self> {
        check_positive("nu", params.nu)?;
        check_positive("sigma", params.sigma)?;
        let dt = params.sigma * grid.dx * grid.dy / params.nu;
        let shape = grid.shape();
        let nozzle = &params.nozzle;
        let mut solver = Self {
            u: Array2::ones(shape),
            v: Array2::ones(shape),
            dt,
            current_step: 0,
            final_step: params.final_step,
            disc: Disc2dBurgers::new(Burgers2dCoefficients::new(&grid, params.nu, dt), shape),
            wall: ConstantBoundary::all_edges(params.boundary_value),
            nozzle_u: NozzleBoundary::new(
                grid.ny,
                nozzle.u_value,
                nozzle.pulse_steps,
                params.final_step,
            )?,
            nozzle_v: NozzleBoundary::new(
                grid.ny,
                nozzle.v_value,
                nozzle.pulse_steps,
                params.final_step,
            )?,
            grid,
        };
        log::info!(
            "burgers2d: {}x{} grid, dx = {}, dy = {}, dt = {}, {} steps",
            solver.grid.ny,
            solver.grid.nx,
            solver.grid.dx,
            solver.grid.dy,
            dt,
            params.final_step
        );
        solver.evolve()?;
        Ok(solver)
    }
    pub fn from_extents(
        lx: f64,
        ly: f64,
        nx: usize,
        ny: usize,
        params: &SolverParameters,
    ) -> SolverResult<Self> {
        Self::new(UniformGrid::new(lx, ly, nx, ny)?, params)
    }
    pub fn set_boundary_conditions(&mut self, step: usize) -> SolverResult<()> {
        self.wall.apply(self.u.view_mut());
        self.wall.apply(self.v.view_mut());
        self.nozzle_u.apply(self.u.view_mut(), step)?;
        self.nozzle_v.apply(self.v.view_mut(), step)?;
        Ok(())
    }
    pub fn equation_of_motion(&mut self) {
        self.disc
            .equation_of_motion(self.u.view_mut(), self.v.view_mut());
    }
    fn evolve(&mut self) -> SolverResult<()> {
        while self.current_step < self.final_step {
            let step = self.current_step;
            self.equation_of_motion();
            self.set_boundary_conditions(step)?;
            self.current_step += 1;
            log::trace!("step {step} done");
            if self.current_step % 500 == 0 {
                log::debug!(
                    "step {}/{}: max |u| = {:.6e}, max |v| = {:.6e}",
                    self.current_step,
                    self.final_step,
                    max_abs(&self.u),
                    max_abs(&self.v)
                );
            }
        }
        log::info!("evolution finished after {} steps", self.current_step);
        Ok(())
    }
    pub fn fetch_u(&self) -> &Array2<f64> {
        &self.u
    }
    pub fn fetch_v(&self) -> &Array2<f64> {
        &self.v
    }
    pub fn grid(&self) -> &UniformGrid {
        &self.grid
    }
    pub fn time_step(&self) -> f64 {
        self.dt
    }
    pub fn current_step(&self) -> usize {
        self.current_step
    }
    pub fn display(&self) {
        println!("{}", format_field(&self.u));
        println!("\n");
        println!("{}", format_field(&self.v));
    }
}

fn max_abs(field: &Array2<f64>) -> f64 {
    field.iter().fold(0.0_f64, |acc, x| acc.max(x.abs()))
}

pub fn format_field(field: &Array2<f64>) -> String {
    let rows: Vec<String> = field
        .rows()
        .into_iter()
        .map(|row| {
            let row_str: Vec<String> = row.iter().map(|&val| format!("{val:.4}")).collect();
            format!("[{}]", row_str.join(", "))
        })
        .collect();
    rows.join("\n")
}
