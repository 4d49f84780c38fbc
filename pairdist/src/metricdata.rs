pub mod euclideandata;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DataError {
    /// the input rows do not form a rectangular table
    #[error("point {index} has {found} coordinates, expected {expected}")]
    ShapeMismatch {
        index: usize,
        expected: usize,
        found: usize,
    },
}

pub trait MetricData {
    fn distance(&self, i: usize, j: usize) -> f64;
    fn all_distances(&self, j: usize, out: &mut [f64]);
    fn num_points(&self) -> usize;
    fn dimensions(&self) -> usize;
}

pub use self::euclideandata::EuclideanData;
