use std::path::Path;

use crate::{
    error::SolverResult,
    io::param_parser::SolverParamParser,
    solver::{NozzleParameters, SolverParameters},
};

pub fn initialize_params_by_file<P: AsRef<Path>>(file_path: P) -> SolverResult<SolverParamParser> {
    let path = file_path.as_ref();
    let param = SolverParamParser::parse(path)?;
    log::info!("loaded parameters from {}", path.display());
    Ok(param)
}
/// Reads `file_path` if it exists, otherwise falls back to built-in defaults.
pub fn initialize_params_or_default<P: AsRef<Path>>(
    file_path: P,
) -> SolverResult<SolverParamParser> {
    let path = file_path.as_ref();
    if path.exists() {
        initialize_params_by_file(path)
    } else {
        log::warn!("{} not found, using default parameters", path.display());
        Ok(SolverParamParser::default())
    }
}
pub fn initialize_solver_params(param: &SolverParamParser) -> SolverParameters {
    SolverParameters {
        sigma: param.sigma,
        nu: param.nu,
        final_step: param.final_step,
        boundary_value: param.boundary_value,
        nozzle: NozzleParameters {
            u_value: param.nozzle_u,
            v_value: param.nozzle_v,
            pulse_steps: param.nozzle_pulse_steps,
        },
    }
}
