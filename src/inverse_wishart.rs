extern crate ndarray;
extern crate ndarray_linalg;

use std::fmt;
use std::f64::consts::LN_2;
use ndarray::*;
use serde::{Serialize, Deserialize};

use rand::prelude::*;

use crate::cholesky_factor::*;
use crate::control::*;
use crate::error::*;
use crate::linalg_utils::*;
use crate::multivariate_gamma::*;
use crate::wishart::*;

///Plain (degrees of freedom, scale matrix) record, for persisting priors.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InverseWishartParameters {
    pub degrees_of_freedom : f64,
    pub scale : Array2<f64>
}

///Checks whether `scale` is square with a strictly positive diagonal and
///`degrees_of_freedom` is positive. Positive-definiteness of `scale` is left
///to its Cholesky factorization.
pub fn is_valid_parameter_set(degrees_of_freedom : f64, scale : &Array2<f64>) -> bool {
    if (!is_square(scale.view())) {
        return false;
    }
    for i in 0..scale.nrows() {
        if (!(scale[[i, i]] > 0.0f64)) {
            return false;
        }
    }
    degrees_of_freedom > 0.0f64
}

///Fails with [`DistributionError::InvalidParameter`] if `checking` is enabled
///and [`is_valid_parameter_set`] rejects the pair.
pub fn check_parameters(degrees_of_freedom : f64, scale : &Array2<f64>,
                        checking : ParameterChecking) -> Result<(), DistributionError> {
    if (checking.is_enabled() && !is_valid_parameter_set(degrees_of_freedom, scale)) {
        debug!("Rejecting inverse-Wishart parameters with ν = {} and {}x{} scale",
               degrees_of_freedom, scale.nrows(), scale.ncols());
        return Err(DistributionError::InvalidParameter(
            format!("ν = {} with a {}x{} scale matrix", degrees_of_freedom, scale.nrows(), scale.ncols())));
    }
    Ok(())
}

///Inverse-Wishart distribution over `p x p` symmetric positive-definite matrices,
///parameterized by degrees of freedom `ν` and scale matrix `Ψ`.
///This is the conjugate prior for the covariance of a multivariate normal.
///
///The Cholesky factor of `Ψ` is cached and only ever replaced together with
///the parameters it was computed from. Samples are drawn with the generator
///`R` (created from entropy on first use unless one is supplied) by inverting
///Wishart samples drawn with `S`.
pub struct InverseWishart<R = StdRng, S = BartlettSampler> {
    degrees_of_freedom : f64,
    scale : Array2<f64>,
    scale_cholesky : CholeskyFactor,
    pub(crate) random_source : Option<R>,
    pub(crate) sampler : S,
    checking : ParameterChecking
}

impl InverseWishart {
    ///Constructs an [`InverseWishart`] distribution with a default generator,
    ///the Bartlett Wishart sampler and process-wide parameter checking.
    pub fn new(degrees_of_freedom : f64, scale : Array2<f64>) -> Result<InverseWishart, DistributionError> {
        InverseWishart::with_options(degrees_of_freedom, scale, None, BartlettSampler,
                                     ParameterChecking::default())
    }

    ///Constructs from a previously-saved [`InverseWishartParameters`].
    pub fn from_parameters(parameters : InverseWishartParameters) -> Result<InverseWishart, DistributionError> {
        InverseWishart::new(parameters.degrees_of_freedom, parameters.scale)
    }
}

impl<R : Rng + SeedableRng> InverseWishart<R> {
    ///Constructs an [`InverseWishart`] distribution which samples with the given generator.
    ///The generator must be seedable so that [`InverseWishart::set_random_source`] with `None`
    ///can fall back to an entropy-seeded one. Generators which are not, such as `thread_rng()`,
    ///are passed per call to [`InverseWishart::sample_using`] instead.
    pub fn with_random_source(degrees_of_freedom : f64, scale : Array2<f64>,
                              random_source : R) -> Result<InverseWishart<R>, DistributionError> {
        InverseWishart::with_options(degrees_of_freedom, scale, Some(random_source), BartlettSampler,
                                     ParameterChecking::default())
    }
}

impl<R, S> InverseWishart<R, S> {
    pub fn with_options(degrees_of_freedom : f64, scale : Array2<f64>, random_source : Option<R>,
                        sampler : S, checking : ParameterChecking) -> Result<InverseWishart<R, S>, DistributionError> {
        let scale_cholesky = Self::checked_factor(degrees_of_freedom, &scale, checking)?;
        Ok(InverseWishart {
            degrees_of_freedom,
            scale,
            scale_cholesky,
            random_source,
            sampler,
            checking
        })
    }

    fn checked_factor(degrees_of_freedom : f64, scale : &Array2<f64>,
                      checking : ParameterChecking) -> Result<CholeskyFactor, DistributionError> {
        check_parameters(degrees_of_freedom, scale, checking)?;
        trace!("Refreshing Cholesky factor of {}x{} scale matrix", scale.nrows(), scale.ncols());
        CholeskyFactor::new(scale)
    }

    ///Replaces both parameters at once. On failure, nothing about `self` changes.
    pub fn set_parameters(&mut self, degrees_of_freedom : f64, scale : Array2<f64>) -> Result<(), DistributionError> {
        let scale_cholesky = Self::checked_factor(degrees_of_freedom, &scale, self.checking)?;
        self.degrees_of_freedom = degrees_of_freedom;
        self.scale = scale;
        self.scale_cholesky = scale_cholesky;
        Ok(())
    }

    pub fn set_degrees_of_freedom(&mut self, degrees_of_freedom : f64) -> Result<(), DistributionError> {
        let scale = self.scale.clone();
        self.set_parameters(degrees_of_freedom, scale)
    }

    pub fn set_scale(&mut self, scale : Array2<f64>) -> Result<(), DistributionError> {
        self.set_parameters(self.degrees_of_freedom, scale)
    }

    pub fn degrees_of_freedom(&self) -> f64 {
        self.degrees_of_freedom
    }

    pub fn scale(&self) -> &Array2<f64> {
        &self.scale
    }

    pub fn scale_cholesky(&self) -> &CholeskyFactor {
        &self.scale_cholesky
    }

    pub fn checking(&self) -> ParameterChecking {
        self.checking
    }

    ///The dimension `p` of the matrices this distribution is over.
    pub fn dimension(&self) -> usize {
        self.scale.nrows()
    }

    pub fn parameters(&self) -> InverseWishartParameters {
        InverseWishartParameters {
            degrees_of_freedom : self.degrees_of_freedom,
            scale : self.scale.clone()
        }
    }

    ///`Ψ / (ν - p - 1)`. Non-finite when `ν <= p + 1`.
    pub fn mean(&self) -> Array2<f64> {
        let p = self.dimension() as f64;
        &self.scale * (1.0f64 / (self.degrees_of_freedom - p - 1.0f64))
    }

    ///`Ψ / (ν + p + 1)`
    pub fn mode(&self) -> Array2<f64> {
        let p = self.dimension() as f64;
        &self.scale * (1.0f64 / (self.degrees_of_freedom + p + 1.0f64))
    }

    ///Entrywise variance, following Mardia, Kent and Bibby (1979), Multivariate Analysis.
    ///Non-finite when `ν <= p + 3`.
    pub fn variance(&self) -> Array2<f64> {
        let p = self.dimension();
        let nu_minus_p = self.degrees_of_freedom - (p as f64);
        let denominator = nu_minus_p * (nu_minus_p - 1.0f64) * (nu_minus_p - 1.0f64) * (nu_minus_p - 3.0f64);

        let psi = &self.scale;
        Array2::from_shape_fn((p, p), |(i, j)| {
            let numerator = (nu_minus_p + 1.0f64) * psi[[i, j]] * psi[[i, j]]
                          + (nu_minus_p - 1.0f64) * psi[[i, i]] * psi[[j, j]];
            numerator / denominator
        })
    }

    fn check_dimensions(&self, x : &Array2<f64>) -> Result<(), DistributionError> {
        let p = self.dimension();
        if (x.nrows() != p || x.ncols() != p) {
            return Err(DistributionError::DimensionMismatch {
                expected : p,
                rows : x.nrows(),
                cols : x.ncols()
            });
        }
        Ok(())
    }

    ///Factors `x` and computes `tr(x^-1 Ψ)` through that factor.
    fn density_terms(&self, x : &Array2<f64>) -> Result<(CholeskyFactor, f64), DistributionError> {
        self.check_dimensions(x)?;
        let x_cholesky = CholeskyFactor::new(x)?;
        let x_inv_scale = x_cholesky.solve(&self.scale)?;
        let x_inv_scale_trace = trace(x_inv_scale.view());
        Ok((x_cholesky, x_inv_scale_trace))
    }

    ///Evaluates the probability density at `x`.
    ///
    ///Fails with [`DistributionError::DimensionMismatch`] unless `x` is `p x p`, and with
    ///[`DistributionError::DecompositionFailure`] unless `x` is positive-definite.
    ///May underflow to zero for extreme parameters; see [`InverseWishart::ln_density`].
    pub fn density(&self, x : &Array2<f64>) -> Result<f64, DistributionError> {
        let (x_cholesky, x_inv_scale_trace) = self.density_terms(x)?;
        let det_x = x_cholesky.determinant();

        let nu = self.degrees_of_freedom;
        let p = self.dimension();
        let p_float = p as f64;
        let gamma_p = multivariate_gamma(p, nu / 2.0f64);

        let result = det_x.powf(-(nu + p_float + 1.0f64) / 2.0f64)
                   * (-0.5f64 * x_inv_scale_trace).exp()
                   * self.scale_cholesky.determinant().powf(nu / 2.0f64)
                   / 2.0f64.powf(nu * p_float / 2.0f64)
                   / gamma_p;
        Ok(result)
    }

    ///Natural log of [`InverseWishart::density`], computed without forming the
    ///density itself.
    pub fn ln_density(&self, x : &Array2<f64>) -> Result<f64, DistributionError> {
        let (x_cholesky, x_inv_scale_trace) = self.density_terms(x)?;
        let ln_det_x = x_cholesky.ln_determinant();

        let nu = self.degrees_of_freedom;
        let p = self.dimension();
        let p_float = p as f64;

        let result = -(nu + p_float + 1.0f64) / 2.0f64 * ln_det_x
                   - 0.5f64 * x_inv_scale_trace
                   + nu / 2.0f64 * self.scale_cholesky.ln_determinant()
                   - nu * p_float / 2.0f64 * LN_2
                   - ln_multivariate_gamma(p, nu / 2.0f64);
        Ok(result)
    }
}

impl<R, S> fmt::Display for InverseWishart<R, S> {
    fn fmt(&self, f : &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InverseWishart(ν = {}, Rows = {}, Columns = {})",
               self.degrees_of_freedom, self.scale.nrows(), self.scale.ncols())
    }
}
