extern crate ndarray;
extern crate ndarray_linalg;

use ndarray::*;

use rand::prelude::*;

use crate::cholesky_factor::*;
use crate::error::*;
use crate::linalg_utils::*;
use crate::rand_utils::*;

///Something which can draw symmetric positive-definite `p x p` samples from the
///Wishart law with the given degrees of freedom and positive-definite scale.
///
///Inverse-Wishart sampling inverts whatever this returns, so substituting a
///deterministic implementation makes that inversion testable in isolation.
pub trait MatrixVariateSampler {
    fn sample_matrix<R : Rng + ?Sized>(&self, rng : &mut R, degrees_of_freedom : f64,
                                       scale : &Array2<f64>) -> Result<Array2<f64>, DistributionError>;
}

///Samples the Wishart law through the Bartlett decomposition.
#[derive(Clone, Copy, Debug, Default)]
pub struct BartlettSampler;

impl MatrixVariateSampler for BartlettSampler {
    fn sample_matrix<R : Rng + ?Sized>(&self, rng : &mut R, degrees_of_freedom : f64,
                                       scale : &Array2<f64>) -> Result<Array2<f64>, DistributionError> {
        let wishart = Wishart::new(scale.clone(), degrees_of_freedom)?;
        wishart.sample(rng)
    }
}

///Wishart distribution with a cached Cholesky factor of its scale matrix.
pub struct Wishart {
    pub scale_mat : Array2<f64>,
    pub scale_cholesky_factor : CholeskyFactor,
    pub degrees_of_freedom : f64,
    pub dim : usize
}

impl Wishart {
    pub fn new(scale_mat : Array2<f64>, degrees_of_freedom : f64) -> Result<Wishart, DistributionError> {
        let scale_cholesky_factor = CholeskyFactor::new(&scale_mat)?;
        let dim = scale_cholesky_factor.dimension();
        Ok(Wishart {
            scale_mat,
            scale_cholesky_factor,
            degrees_of_freedom,
            dim
        })
    }

    ///`degrees_of_freedom * scale_mat`
    pub fn mean(&self) -> Array2<f64> {
        self.degrees_of_freedom * &self.scale_mat
    }

    pub fn sample<R : Rng + ?Sized>(&self, rng : &mut R) -> Result<Array2<f64>, DistributionError> {
        let L = self.sample_cholesky_factor(rng)?;
        let result = L.dot(&L.t());
        Ok(symmetrize(result.view()))
    }

    ///Draws the lower-triangular Cholesky factor of a Wishart sample.
    pub fn sample_cholesky_factor<R : Rng + ?Sized>(&self, rng : &mut R) -> Result<Array2<f64>, DistributionError> {
        let A = generate_bartlett_factor(rng, self.degrees_of_freedom, self.dim)?;
        trace!("Drew Bartlett factor for {}-dimensional Wishart with {} degrees of freedom",
               self.dim, self.degrees_of_freedom);

        //The product of lower-triangular matrices stays lower-triangular
        let result = self.scale_cholesky_factor.lower().dot(&A);
        Ok(result)
    }
}
