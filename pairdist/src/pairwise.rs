use ndarray::{prelude::*, Data};

use crate::metricdata::MetricData;

/// Computes the full matrix of pairwise distances for the given dataset.
///
/// The output is symmetric with a zero diagonal; entry `(i, j)` is the distance
/// between points `i` and `j`. Each row is filled in a single
/// [`MetricData::all_distances`] call, relying on the symmetry of the metric.
pub fn matrix<D: MetricData>(data: &D) -> Array2<f64> {
    let n = data.num_points();
    log::debug!(
        "computing {}x{} distance matrix over {} dimensions",
        n,
        n,
        data.dimensions()
    );
    let mut out = Array2::<f64>::zeros((n, n));
    for (j, mut row) in out.rows_mut().into_iter().enumerate() {
        data.all_distances(j, row.as_slice_mut().unwrap());
    }
    out
}

/// Same result as [`matrix`], computed over `threads` scoped threads, each
/// filling an independent block of rows. No pair depends on any other, so the
/// blocks compose without coordination.
pub fn matrix_threaded<D: MetricData + Sync>(data: &D, threads: usize) -> Array2<f64> {
    assert!(threads >= 1);
    let n = data.num_points();
    let mut out = Array2::<f64>::zeros((n, n));
    if n == 0 {
        return out;
    }
    let chunk_size = (n as f64 / threads as f64).ceil() as usize;
    log::debug!(
        "computing {}x{} distance matrix on {} threads, {} rows per block",
        n,
        n,
        threads,
        chunk_size
    );
    std::thread::scope(|scope| {
        let mut handles = Vec::new();
        for (c, mut block) in out.axis_chunks_iter_mut(Axis(0), chunk_size).enumerate() {
            let offset = c * chunk_size;
            let h = scope.spawn(move || {
                for (r, mut row) in block.rows_mut().into_iter().enumerate() {
                    data.all_distances(offset + r, row.as_slice_mut().unwrap());
                }
            });
            handles.push(h);
        }

        for h in handles {
            h.join().unwrap();
        }
    });
    out
}

/// Reference formulation: for each pair accumulate the squared per-dimension
/// differences, then take the square root. Slower than the norms-based
/// [`matrix`] but free of cancellation, so it doubles as the ground truth the
/// fast path is checked against.
pub fn matrix_direct<S: Data<Elem = f64>>(points: &ArrayBase<S, Ix2>) -> Array2<f64> {
    let (n, p) = points.dim();
    let mut out = Array2::<f64>::zeros((n, n));
    for i in 0..n {
        for j in 0..n {
            let mut s = 0.0;
            for k in 0..p {
                let tmp = points[[i, k]] - points[[j, k]];
                s += tmp * tmp;
            }
            out[[i, j]] = s.sqrt();
        }
    }
    out
}
