mod disc;
mod error;
mod initialization;
mod io;
mod postprocess;
mod solver;

use std::{fs, path::PathBuf};

use crate::error::SolverResult;
use crate::io::{write_to_csv::write_quiver_to_csv, write_to_vtu::write_velocity_field};
use crate::postprocess::QuiverField;
use crate::solver::BurgersSolver;

const DEFAULT_PARAM_FILE: &str = "inputs/solverparam.json";
const FRAME_NAME: &str = "frame00050";

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run() -> SolverResult<()> {
    let param = match std::env::args().nth(1) {
        Some(path) => initialization::initialize_params_by_file(path)?,
        None => initialization::initialize_params_or_default(DEFAULT_PARAM_FILE)?,
    };
    let solver_params = initialization::initialize_solver_params(&param);

    let solver =
        BurgersSolver::from_extents(param.lx, param.ly, param.nx, param.ny, &solver_params)?;
    log::info!(
        "reached step {} at t = {}",
        solver.current_step(),
        solver.current_step() as f64 * solver.time_step()
    );
    solver.display();

    let u = solver.fetch_u();
    let v = solver.fetch_v();
    let quiver = QuiverField::sample(u, v);

    let output_dir = PathBuf::from(&param.output_dir);
    fs::create_dir_all(&output_dir)?;
    let csv_path = output_dir.join(format!("{FRAME_NAME}.csv"));
    write_quiver_to_csv(&quiver, solver.grid(), &csv_path)?;
    log::info!("wrote {}", csv_path.display());
    let vtu_path = output_dir.join(format!("{FRAME_NAME}.vtu"));
    write_velocity_field(u, v, solver.grid(), &vtu_path)?;
    log::info!("wrote {}", vtu_path.display());
    Ok(())
}
