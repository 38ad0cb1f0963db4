use std::ops::Range;

use ndarray::{Array1, ArrayViewMut2, s};

use crate::error::{SolverError, SolverResult};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BoundaryPosition {
    Lower,
    Right,
    Upper,
    Left,
}
impl BoundaryPosition {
    pub const ALL: [BoundaryPosition; 4] = [
        BoundaryPosition::Lower,
        BoundaryPosition::Right,
        BoundaryPosition::Upper,
        BoundaryPosition::Left,
    ];
}

#[derive(Clone, Debug)]
pub struct ConstantBoundary {
    pub value: f64,
    pub positions: Vec<BoundaryPosition>,
}
impl ConstantBoundary {
    pub fn all_edges(value: f64) -> Self {
        Self {
            value,
            positions: BoundaryPosition::ALL.to_vec(),
        }
    }
    pub fn apply(&self, mut field: ArrayViewMut2<f64>) {
        for position in self.positions.iter() {
            match position {
                BoundaryPosition::Lower => field.slice_mut(s![0, ..]).fill(self.value),
                BoundaryPosition::Upper => field.slice_mut(s![-1, ..]).fill(self.value),
                BoundaryPosition::Left => field.slice_mut(s![.., 0]).fill(self.value),
                BoundaryPosition::Right => field.slice_mut(s![.., -1]).fill(self.value),
            }
        }
    }
}

/// Time-varying inflow on a band of rows of the left column.
///
/// The sequence holds `pulse_steps` entries of the pulse value followed by
/// `final_step` zeros, indexed by the step number.
#[derive(Clone, Debug)]
pub struct NozzleBoundary {
    pub rows: Range<usize>,
    pub sequence: Array1<f64>,
}
impl NozzleBoundary {
    pub const BAND_HALF_WIDTH: usize = 2;

    pub fn new(
        ny: usize,
        pulse_value: f64,
        pulse_steps: usize,
        final_step: usize,
    ) -> SolverResult<Self> {
        let len = pulse_steps
            .checked_add(final_step)
            .ok_or(SolverError::InvalidParameter {
                name: "final_step",
                value: final_step as f64,
            })?;
        let mut sequence = Array1::zeros(len);
        sequence.slice_mut(s![..pulse_steps]).fill(pulse_value);
        Ok(Self {
            rows: Self::band(ny),
            sequence,
        })
    }
    /// Rows `ny/2 - 2 .. ny/2 + 2`; requires ny >= 4.
    pub fn band(ny: usize) -> Range<usize> {
        let mid = ny / 2;
        mid - Self::BAND_HALF_WIDTH..mid + Self::BAND_HALF_WIDTH
    }
    pub fn value_at(&self, step: usize) -> SolverResult<f64> {
        self.sequence
            .get(step)
            .copied()
            .ok_or(SolverError::NozzleStepOutOfRange {
                step,
                len: self.sequence.len(),
            })
    }
    pub fn apply(&self, mut field: ArrayViewMut2<f64>, step: usize) -> SolverResult<()> {
        let value = self.value_at(step)?;
        field
            .slice_mut(s![self.rows.start..self.rows.end, 0])
            .fill(value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;

    #[test]
    fn test_constant_boundary_all_edges() {
        let mut field = Array2::<f64>::ones((4, 5));
        ConstantBoundary::all_edges(-2.0).apply(field.view_mut());
        for j in 0..5 {
            assert_eq!(field[(0, j)], -2.0);
            assert_eq!(field[(3, j)], -2.0);
        }
        for i in 0..4 {
            assert_eq!(field[(i, 0)], -2.0);
            assert_eq!(field[(i, 4)], -2.0);
        }
        assert_eq!(field[(1, 1)], 1.0);
        assert_eq!(field[(2, 3)], 1.0);
    }

    #[test]
    fn test_constant_boundary_single_edge() {
        let mut field = Array2::<f64>::ones((4, 4));
        let bc = ConstantBoundary {
            value: 0.0,
            positions: vec![BoundaryPosition::Right],
        };
        bc.apply(field.view_mut());
        assert_eq!(field.column(3).sum(), 0.0);
        assert_eq!(field.column(0).sum(), 4.0);
        assert_eq!(field.row(0).sum(), 3.0);
    }

    #[test]
    fn test_band_rows() {
        assert_eq!(NozzleBoundary::band(5), 0..4);
        assert_eq!(NozzleBoundary::band(4), 0..4);
        assert_eq!(NozzleBoundary::band(11), 3..7);
    }

    #[test]
    fn test_sequence_pulse_then_zeros() {
        let nozzle = NozzleBoundary::new(5, 10.0, 3, 4).unwrap();
        assert_eq!(nozzle.sequence.len(), 7);
        assert_eq!(nozzle.value_at(0).unwrap(), 10.0);
        assert_eq!(nozzle.value_at(2).unwrap(), 10.0);
        assert_eq!(nozzle.value_at(3).unwrap(), 0.0);
        assert_eq!(nozzle.value_at(6).unwrap(), 0.0);
        assert!(matches!(
            nozzle.value_at(7),
            Err(SolverError::NozzleStepOutOfRange { step: 7, len: 7 })
        ));
    }

    #[test]
    fn test_sequence_length_overflow() {
        let result = NozzleBoundary::new(5, 10.0, 1000, usize::MAX);
        assert!(matches!(
            result,
            Err(SolverError::InvalidParameter {
                name: "final_step",
                ..
            })
        ));
    }

    #[test]
    fn test_nozzle_overwrites_band_only() {
        let mut field = Array2::<f64>::zeros((8, 3));
        let nozzle = NozzleBoundary::new(8, 4.0, 1, 1).unwrap();
        nozzle.apply(field.view_mut(), 0).unwrap();
        let column: Vec<f64> = field.column(0).to_vec();
        assert_eq!(column, vec![0.0, 0.0, 4.0, 4.0, 4.0, 4.0, 0.0, 0.0]);
        assert_eq!(field.column(1).sum(), 0.0);
    }
}
