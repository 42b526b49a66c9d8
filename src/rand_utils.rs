extern crate ndarray;

use ndarray::*;

use rand::prelude::*;
use rand_distr::{ChiSquared, Distribution, StandardNormal};

use crate::error::*;

///Creates a generator seeded from system entropy, used whenever a
///distribution is asked to sample without a caller-supplied generator.
pub fn default_random_source<R : SeedableRng>() -> R {
    R::from_entropy()
}

///Draws the Bartlett factor of a standard Wishart variate: a lower-triangular
///`dim x dim` matrix whose strictly-lower entries are standard normal and whose
///`i`th diagonal entry is the square root of a chi-squared variate with
///`degrees_of_freedom - i` degrees of freedom.
///
///Fails with [`DistributionError::InvalidParameter`] if any of those chi-squared
///degrees of freedom is not positive, i.e. when `degrees_of_freedom <= dim - 1`.
pub fn generate_bartlett_factor<R : Rng + ?Sized>(rng : &mut R, degrees_of_freedom : f64,
                                                  dim : usize) -> Result<Array2<f64>, DistributionError> {
    //Following https://github.com/scipy/scipy/blob/v1.5.1/scipy/stats/_multivariate.py
    //and https://www.math.wustl.edu/~sawyer/hmhandouts/Wishart.pdf
    let mut result : Array2<f64> = Array::zeros((dim, dim));

    //Off-diagonal elems
    for i in 0..dim {
        for j in 0..i {
            result[[i, j]] = rng.sample(StandardNormal);
        }
    }
    //Diagonal elems
    for i in 0..dim {
        let chi_dof = degrees_of_freedom - (i as f64);
        if (!(chi_dof > 0.0f64)) {
            return Err(DistributionError::InvalidParameter(
                format!("Wishart sampling needs more than {} degrees of freedom, got {}",
                        i, degrees_of_freedom)));
        }
        let chi = ChiSquared::new(chi_dof).map_err(|err| {
            DistributionError::InvalidParameter(format!("{:?}", err))
        })?;
        let chi_sample : f64 = chi.sample(rng);
        result[[i, i]] = chi_sample.sqrt();
    }
    Ok(result)
}
