use ndarray::{prelude::*, Data, OwnedRepr};

use crate::metricdata::{DataError, MetricData};

/// Euclidean points, stored row-wise along with the squared norm of each row.
///
/// Distances are evaluated through the identity
/// `||a - b||^2 = ||a||^2 + ||b||^2 - 2 a.b`, which turns each distance into a
/// single dot product once the norms are precomputed. Cancellation can push the
/// squared distance slightly below zero for (near-)identical points, hence the
/// clamp in [`MetricData::distance`].
#[derive(Debug)]
pub struct EuclideanData<S: Data<Elem = f64>> {
    data: ArrayBase<S, Ix2>,
    squared_norms: Array1<f64>,
}

impl<S: Data<Elem = f64>> EuclideanData<S> {
    pub fn new(data: ArrayBase<S, Ix2>) -> Self {
        let norms = data.rows().into_iter().map(|row| row.dot(&row)).collect();
        Self {
            data,
            squared_norms: norms,
        }
    }

    pub fn points(&self) -> ArrayView2<f64> {
        self.data.view()
    }
}

impl EuclideanData<OwnedRepr<f64>> {
    /// Builds a dataset from caller-supplied rows, verifying that all points
    /// share the dimensionality of the first one.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, DataError> {
        let expected = rows.first().map(Vec::len).unwrap_or(0);
        let mut flat = Vec::with_capacity(rows.len() * expected);
        for (index, row) in rows.iter().enumerate() {
            if row.len() != expected {
                return Err(DataError::ShapeMismatch {
                    index,
                    expected,
                    found: row.len(),
                });
            }
            flat.extend_from_slice(row);
        }
        let data = Array2::from_shape_vec((rows.len(), expected), flat).unwrap();
        Ok(Self::new(data))
    }
}

impl<S: Data<Elem = f64>> MetricData for EuclideanData<S> {
    fn distance(&self, i: usize, j: usize) -> f64 {
        let sq_eucl = self.squared_norms[i] + self.squared_norms[j]
            - 2.0 * self.data.row(i).dot(&self.data.row(j));
        if sq_eucl < 0.0 {
            0.0
        } else {
            sq_eucl.sqrt()
        }
    }

    fn all_distances(&self, j: usize, out: &mut [f64]) {
        // OPTIMIZE: try using matrix vector product, for instance
        assert_eq!(out.len(), self.data.nrows());
        for (i, oo) in out.iter_mut().enumerate() {
            *oo = self.distance(i, j);
        }
    }

    fn num_points(&self) -> usize {
        self.data.nrows()
    }

    fn dimensions(&self) -> usize {
        self.data.ncols()
    }
}
