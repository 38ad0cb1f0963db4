use ndarray::{Array2, Zip, s};

/// Velocity vectors sampled on every other row of the grid, ready for a
/// quiver plot.
#[derive(Clone, Debug)]
pub struct QuiverField {
    /// grid row of each sampled row
    pub rows: Vec<usize>,
    pub u: Array2<f64>,
    pub v: Array2<f64>,
    pub magnitude: Array2<f64>,
    /// magnitude mapped linearly onto [0, 1]
    pub normalized: Array2<f64>,
}
impl QuiverField {
    pub fn sample(u: &Array2<f64>, v: &Array2<f64>) -> Self {
        let u = u.slice(s![..;2, ..]).to_owned();
        let v = v.slice(s![..;2, ..]).to_owned();
        let rows = (0..u.nrows()).map(|i| 2 * i).collect();
        let magnitude = Zip::from(&u)
            .and(&v)
            .map_collect(|&a, &b| (a * a + b * b).sqrt());
        let normalized = normalize(&magnitude);
        Self {
            rows,
            u,
            v,
            magnitude,
            normalized,
        }
    }
}

fn normalize(values: &Array2<f64>) -> Array2<f64> {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;
    if range > 0.0 {
        values.mapv(|x| (x - min) / range)
    } else {
        Array2::zeros(values.raw_dim())
    }
}
