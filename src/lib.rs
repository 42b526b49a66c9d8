//! The **inverse-Wishart** distribution over symmetric positive-definite matrices,
//! the conjugate prior for the covariance matrix of a multivariate normal.
//!
//! For starting points on this library, see the Rustdoc on
//! [`crate::inverse_wishart::InverseWishart`] and the stateless
//! [`crate::inverse_wishart_sampler::sample_inverse_wishart`].
//!
//! All computation is in `f64`. Moments and densities follow ordinary floating-point
//! rules at the edges of the parameter space, so e.g. the mean for `ν <= p + 1`
//! comes back non-finite rather than as an error.
//!
//! Parameter validation is governed by [`crate::control::ParameterChecking`], which
//! by default defers to a process-wide toggle
//! ([`crate::control::set_check_distribution_parameters`]).

#![allow(non_snake_case)]
#![allow(unused_imports)]
#![allow(unused_parens)]

#[macro_use] extern crate log;
pub mod params;
pub mod control;
pub mod error;
pub mod linalg_utils;
pub mod cholesky_factor;
pub mod multivariate_gamma;
pub mod rand_utils;
pub mod wishart;
pub mod inverse_wishart;
pub mod inverse_wishart_sampler;
#[cfg(test)]
pub mod test_utils;
