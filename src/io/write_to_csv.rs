use std::path::Path;

use csv::Writer;
use serde::Serialize;

use crate::{disc::grid::UniformGrid, error::SolverResult, postprocess::QuiverField};

#[derive(Serialize)]
struct QuiverRecord {
    row: usize,
    col: usize,
    x: f64,
    y: f64,
    u: f64,
    v: f64,
    magnitude: f64,
    normalized: f64,
}

pub fn write_quiver_to_csv<P: AsRef<Path>>(
    quiver: &QuiverField,
    grid: &UniformGrid,
    filename: P,
) -> SolverResult<()> {
    let x_coords = grid.x_coords();
    let y_coords = grid.y_coords();
    let mut writer = Writer::from_path(filename)?;
    for (k, &row) in quiver.rows.iter().enumerate() {
        for col in 0..quiver.u.ncols() {
            let record = QuiverRecord {
                row,
                col,
                x: x_coords[col],
                y: y_coords[row],
                u: quiver.u[(k, col)],
                v: quiver.v[(k, col)],
                magnitude: quiver.magnitude[(k, col)],
                normalized: quiver.normalized[(k, col)],
            };
            writer.serialize(record)?;
        }
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;

    #[test]
    fn test_one_record_per_sample() {
        let grid = UniformGrid::new(2.0, 2.0, 5, 5).unwrap();
        let u = Array2::from_shape_fn((5, 5), |(i, j)| (i + j) as f64);
        let v = Array2::<f64>::zeros((5, 5));
        let quiver = QuiverField::sample(&u, &v);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.csv");
        write_quiver_to_csv(&quiver, &grid, &path).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(
            headers.iter().collect::<Vec<_>>(),
            vec!["row", "col", "x", "y", "u", "v", "magnitude", "normalized"]
        );
        let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 15);
        // last sample: grid row 4, column 4
        let last = &records[14];
        assert_eq!(&last[0], "4");
        assert_eq!(&last[1], "4");
        assert_eq!(last[4].parse::<f64>().unwrap(), 8.0);
        assert_eq!(last[7].parse::<f64>().unwrap(), 1.0);
    }
}
