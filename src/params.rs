//Numerical constants and defaults shared across the crate

///Whether distribution parameters are checked when the process starts.
pub const DEFAULT_CHECK_DISTRIBUTION_PARAMETERS : bool = true;

//Test tolerances
pub const DEFAULT_TEST_THRESH : f64 = 0.000000001f64;

pub const SYMMETRY_TEST_THRESH : f64 = 0.0000001f64;

//Relative tolerance for comparing densities against analytically computed values
pub const DENSITY_TEST_REL_THRESH : f64 = 0.0000000001f64;
