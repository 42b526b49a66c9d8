use std::sync::atomic::{AtomicBool, Ordering};
use serde::{Serialize, Deserialize};

use crate::params::*;

static CHECK_DISTRIBUTION_PARAMETERS : AtomicBool = AtomicBool::new(DEFAULT_CHECK_DISTRIBUTION_PARAMETERS);

///Reads the process-wide parameter checking toggle.
pub fn check_distribution_parameters() -> bool {
    CHECK_DISTRIBUTION_PARAMETERS.load(Ordering::SeqCst)
}

///Turns process-wide parameter checking on or off. Only distributions
///configured with [`ParameterChecking::ProcessDefault`] observe this.
pub fn set_check_distribution_parameters(enabled : bool) {
    CHECK_DISTRIBUTION_PARAMETERS.store(enabled, Ordering::SeqCst);
}

///Whether parameter sets are validated on construction, mutation and sampling.
///
///With checking disabled, invalid parameters are accepted as long as the scale
///matrix still factors, and moments/densities may come out non-finite.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParameterChecking {
    ///Defer to [`check_distribution_parameters`], read anew at every check.
    ProcessDefault,
    Enabled,
    Disabled
}

impl ParameterChecking {
    pub fn is_enabled(&self) -> bool {
        match self {
            ParameterChecking::ProcessDefault => check_distribution_parameters(),
            ParameterChecking::Enabled => true,
            ParameterChecking::Disabled => false
        }
    }
}

impl Default for ParameterChecking {
    fn default() -> ParameterChecking {
        ParameterChecking::ProcessDefault
    }
}
