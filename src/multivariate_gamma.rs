use std::f64::consts::PI;
use statrs::function::gamma::{gamma, ln_gamma};

///The multivariate gamma function
///`Γ_p(a) = π^{p(p-1)/4} * prod_{j=1..p} Γ(a + (1 - j) / 2)`.
///For `p == 1` this is the ordinary gamma function.
pub fn multivariate_gamma(p : usize, a : f64) -> f64 {
    let p_float = p as f64;
    let mut result = PI.powf(p_float * (p_float - 1.0f64) / 4.0f64);
    for j in 1..=p {
        result *= gamma(a + (1.0f64 - (j as f64)) / 2.0f64);
    }
    result
}

///Natural log of [`multivariate_gamma`], for arguments where the product
///itself would overflow.
pub fn ln_multivariate_gamma(p : usize, a : f64) -> f64 {
    let p_float = p as f64;
    let mut result = p_float * (p_float - 1.0f64) / 4.0f64 * PI.ln();
    for j in 1..=p {
        result += ln_gamma(a + (1.0f64 - (j as f64)) / 2.0f64);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::*;

    #[test]
    fn univariate_case_is_gamma() {
        assert!((multivariate_gamma(1, 4.0) - 6.0).abs() < DEFAULT_TEST_THRESH);
        assert!((multivariate_gamma(1, 0.5) - PI.sqrt()).abs() < DEFAULT_TEST_THRESH);
    }

    #[test]
    fn bivariate_at_five_halves() {
        //sqrt(pi) * Γ(5/2) * Γ(2) = 3π/4
        let expected = 3.0 * PI / 4.0;
        assert!((multivariate_gamma(2, 2.5) - expected).abs() < DEFAULT_TEST_THRESH);
        assert!((ln_multivariate_gamma(2, 2.5) - expected.ln()).abs() < DEFAULT_TEST_THRESH);
    }

    #[test]
    fn trivariate_at_five() {
        let expected = 9326.776159029441;
        let actual = multivariate_gamma(3, 5.0);
        assert!(((actual - expected) / expected).abs() < DENSITY_TEST_REL_THRESH);
        assert!((ln_multivariate_gamma(3, 5.0) - 9.140644699192542).abs() < 0.000000001);
    }
}
