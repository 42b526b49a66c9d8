extern crate ndarray;
extern crate ndarray_linalg;

use ndarray::*;
use ndarray_linalg::*;
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::StandardNormal;
use rand::prelude::*;

pub use crate::params::*;

pub fn init_test_logging() {
    let _ = pretty_env_logger::try_init();
}

pub fn seeded_rng(seed : u64) -> StdRng {
    init_test_logging();
    StdRng::seed_from_u64(seed)
}

pub fn frob_norm(mat : &Array2<f64>) -> f64 {
    mat.opnorm_fro().unwrap()
}

pub fn assert_equal_matrices_to_within(one : &Array2<f64>, two : &Array2<f64>, thresh : f64) {
    let diff = one - two;
    let diff_norm = frob_norm(&diff);
    if (diff_norm > thresh) {
        panic!("Matrices differ by {} (tolerance {}):\n{}\n{}", diff_norm, thresh, one, two);
    }
}

pub fn assert_equal_matrices(one : &Array2<f64>, two : &Array2<f64>) {
    assert_equal_matrices_to_within(one, two, DEFAULT_TEST_THRESH);
}

pub fn random_matrix(t : usize, s : usize) -> Array2<f64> {
    Array::random((t, s), StandardNormal)
}

///A random symmetric positive-definite matrix whose eigenvalues are all at least `dim`.
pub fn random_psd_matrix(dim : usize) -> Array2<f64> {
    let sqrt = random_matrix(dim, dim);
    let mut result = sqrt.t().dot(&sqrt);
    for i in 0..dim {
        result[[i, i]] += dim as f64;
    }
    result
}
