pub mod metricdata;
pub mod pairwise;
