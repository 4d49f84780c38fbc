use numpy::*;
use pyo3::prelude::*;

use pairdist::metricdata::EuclideanData;
use pairdist::pairwise;

/// Pairwise Euclidean distance matrix of a (n, p) array of points.
#[pyfunction]
#[pyo3(signature = (points, threads=None))]
fn pairwise_distances<'py>(
    py: Python<'py>,
    points: PyReadonlyArray2<'py, f64>,
    threads: Option<usize>,
) -> Bound<'py, PyArray2<f64>> {
    let data = EuclideanData::new(points.as_array());
    let matrix = match threads {
        Some(threads) if threads > 1 => pairwise::matrix_threaded(&data, threads),
        _ => pairwise::matrix(&data),
    };
    matrix.into_pyarray_bound(py)
}

#[pymodule]
#[pyo3(name = "pairdist")]
fn py_pairdist(m: &Bound<'_, PyModule>) -> PyResult<()> {
    pyo3_log::init();
    m.add_function(wrap_pyfunction!(pairwise_distances, m)?)?;
    Ok(())
}
