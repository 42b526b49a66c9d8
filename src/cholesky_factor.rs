extern crate ndarray;
extern crate ndarray_linalg;

use ndarray::*;
use ndarray_linalg::*;
use ndarray_linalg::error::LinalgError;

use crate::error::*;
use crate::linalg_utils::*;

///Lower-triangular Cholesky factor `L` of a symmetric positive-definite
///matrix `M = L L^T`. Only the lower triangle of `M` is read.
#[derive(Clone, Debug)]
pub struct CholeskyFactor {
    lower : Array2<f64>,
    ///`L^T`, kept in standard layout so both triangular solves see matching layouts
    upper : Array2<f64>,
    dim : usize
}

impl CholeskyFactor {
    ///Factors `mat`. Fails with [`DistributionError::DecompositionFailure`]
    ///if `mat` is not square or not positive-definite.
    pub fn new(mat : &Array2<f64>) -> Result<CholeskyFactor, DistributionError> {
        let lower = mat.cholesky(UPLO::Lower).map_err(|err| {
            error!("Cholesky factorization failed for {}x{} matrix: {}", mat.nrows(), mat.ncols(), err);
            DistributionError::from(err)
        })?;
        let dim = lower.nrows();
        let upper = Array2::from_shape_fn((dim, dim), |(i, j)| lower[[j, i]]);
        Ok(CholeskyFactor {
            lower,
            upper,
            dim
        })
    }

    pub fn lower(&self) -> &Array2<f64> {
        &self.lower
    }

    pub fn dimension(&self) -> usize {
        self.dim
    }

    ///Determinant of the factored matrix, `prod(L_ii)^2`.
    pub fn determinant(&self) -> f64 {
        let diag_product : f64 = self.lower.diag().iter().product();
        diag_product * diag_product
    }

    pub fn ln_determinant(&self) -> f64 {
        let ln_diag_sum : f64 = self.lower.diag().iter().map(|x| x.ln()).sum();
        2.0f64 * ln_diag_sum
    }

    ///Solves `M X = rhs` for `X` by forward substitution through `L`
    ///followed by back substitution through `L^T`.
    pub fn solve(&self, rhs : &Array2<f64>) -> Result<Array2<f64>, DistributionError> {
        if (rhs.nrows() != self.dim) {
            return Err(DistributionError::DimensionMismatch {
                expected : self.dim,
                rows : rhs.nrows(),
                cols : rhs.ncols()
            });
        }
        let forward = self.lower.solve_triangular(UPLO::Lower, Diag::NonUnit, rhs)
                                .map_err(|err| solve_failure("Forward", self.dim, err))?;
        let result = self.upper.solve_triangular(UPLO::Upper, Diag::NonUnit, &forward)
                               .map_err(|err| solve_failure("Back", self.dim, err))?;
        Ok(result)
    }

    ///Inverse of the factored matrix.
    pub fn inverse(&self) -> Result<Array2<f64>, DistributionError> {
        let eye : Array2<f64> = Array::eye(self.dim);
        let inv = self.solve(&eye)?;
        Ok(symmetrize(inv.view()))
    }
}

fn solve_failure(direction : &str, dim : usize, err : LinalgError) -> DistributionError {
    error!("{} substitution through {}x{} Cholesky factor failed: {}", direction, dim, dim, err);
    DistributionError::from(err)
}
