use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::SolverResult;

/// Contents of `solverparam.json`. Omitted keys take the defaults below.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SolverParamParser {
    pub lx: f64,
    pub ly: f64,
    pub nx: usize,
    pub ny: usize,
    pub sigma: f64,
    pub nu: f64,
    pub final_step: usize,
    pub boundary_value: f64,
    pub nozzle_u: f64,
    pub nozzle_v: f64,
    pub nozzle_pulse_steps: usize,
    pub output_dir: String,
}
impl Default for SolverParamParser {
    fn default() -> Self {
        Self {
            lx: 2.0,
            ly: 2.0,
            nx: 5,
            ny: 5,
            sigma: 0.001,
            nu: 0.01,
            final_step: 2510,
            boundary_value: 0.0,
            nozzle_u: 10.0,
            nozzle_v: 10.0,
            nozzle_pulse_steps: 1000,
            output_dir: "outputs".to_string(),
        }
    }
}
impl SolverParamParser {
    pub fn parse<P: AsRef<Path>>(file_path: P) -> SolverResult<Self> {
        let file_content = fs::read_to_string(file_path)?;
        Self::parse_str(&file_content)
    }
    pub fn parse_str(content: &str) -> SolverResult<Self> {
        let param: SolverParamParser = serde_json::from_str(content)?;
        Ok(param)
    }
}
