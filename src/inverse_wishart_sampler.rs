extern crate ndarray;
extern crate ndarray_linalg;

use ndarray::*;

use rand::prelude::*;

use crate::cholesky_factor::*;
use crate::control::*;
use crate::error::*;
use crate::inverse_wishart::*;
use crate::rand_utils::*;
use crate::wishart::*;

///Draws `W ~ Wishart(ν, Ψ^-1)` with `sampler` and inverts it. A `W` which fails
///to factor is reported, never redrawn.
fn invert_wishart_sample<S, R>(sampler : &S, rng : &mut R, degrees_of_freedom : f64,
                               scale_inverse : &Array2<f64>) -> Result<Array2<f64>, DistributionError>
    where S : MatrixVariateSampler, R : Rng + ?Sized {
    let wishart_sample = sampler.sample_matrix(rng, degrees_of_freedom, scale_inverse)?;
    let wishart_cholesky = CholeskyFactor::new(&wishart_sample)?;
    wishart_cholesky.inverse()
}

///Samples an inverse-Wishart distributed matrix with degrees of freedom
///`degrees_of_freedom` and scale `scale` by sampling a Wishart matrix with the
///inverted scale and inverting the result.
pub fn sample_inverse_wishart<S, R>(sampler : &S, rng : &mut R, degrees_of_freedom : f64, scale : &Array2<f64>,
                                    checking : ParameterChecking) -> Result<Array2<f64>, DistributionError>
    where S : MatrixVariateSampler, R : Rng + ?Sized {
    check_parameters(degrees_of_freedom, scale, checking)?;
    let scale_inverse = CholeskyFactor::new(scale)?.inverse()?;
    invert_wishart_sample(sampler, rng, degrees_of_freedom, &scale_inverse)
}

impl InverseWishart {
    ///Stateless sampling with the Bartlett Wishart sampler and process-wide
    ///parameter checking.
    pub fn sample_with<R : Rng + ?Sized>(rng : &mut R, degrees_of_freedom : f64,
                                         scale : &Array2<f64>) -> Result<Array2<f64>, DistributionError> {
        sample_inverse_wishart(&BartlettSampler, rng, degrees_of_freedom, scale, ParameterChecking::default())
    }
}

impl<R, S : MatrixVariateSampler> InverseWishart<R, S> {
    ///Draws a sample using a caller-held generator instead of the one stored in `self`.
    pub fn sample_using<G : Rng + ?Sized>(&self, rng : &mut G) -> Result<Array2<f64>, DistributionError> {
        check_parameters(self.degrees_of_freedom(), self.scale(), self.checking())?;
        let scale_inverse = self.scale_cholesky().inverse()?;
        invert_wishart_sample(&self.sampler, rng, self.degrees_of_freedom(), &scale_inverse)
    }
}

impl<R, S> InverseWishart<R, S> {
    ///Replaces the stored generator. `None` makes the next sample create a
    ///fresh entropy-seeded generator.
    pub fn set_random_source(&mut self, random_source : Option<R>) {
        self.random_source = random_source;
    }
}

impl<R : SeedableRng, S> InverseWishart<R, S> {
    ///The stored generator, created from entropy first if there is none.
    pub fn random_source_mut(&mut self) -> &mut R {
        self.random_source.get_or_insert_with(default_random_source)
    }
}

impl<R : Rng + SeedableRng, S : MatrixVariateSampler> InverseWishart<R, S> {
    ///Draws a sample with the stored generator, advancing its state.
    pub fn sample(&mut self) -> Result<Array2<f64>, DistributionError> {
        let degrees_of_freedom = self.degrees_of_freedom();
        check_parameters(degrees_of_freedom, self.scale(), self.checking())?;
        let scale_inverse = self.scale_cholesky().inverse()?;

        let rng = self.random_source.get_or_insert_with(default_random_source);
        invert_wishart_sample(&self.sampler, rng, degrees_of_freedom, &scale_inverse)
    }

    ///Draws `num_samples` independent samples, stopping at the first failure.
    pub fn samples(&mut self, num_samples : usize) -> Result<Vec<Array2<f64>>, DistributionError> {
        trace!("Drawing {} inverse-Wishart samples", num_samples);
        let mut result = Vec::with_capacity(num_samples);
        for _ in 0..num_samples {
            result.push(self.sample()?);
        }
        Ok(result)
    }
}
