//Lives in its own test binary: flipping the process-wide toggle would race
//with unit tests relying on its default.

use ndarray::Array;
use rand::rngs::StdRng;

use inverse_wishart::control::*;
use inverse_wishart::error::DistributionError;
use inverse_wishart::inverse_wishart::*;
use inverse_wishart::wishart::BartlettSampler;

#[test]
fn process_wide_toggle_governs_default_checking() {
    let _ = pretty_env_logger::try_init();

    assert!(check_distribution_parameters());
    assert!(matches!(InverseWishart::new(-1.0, Array::eye(2)),
                     Err(DistributionError::InvalidParameter(_))));

    set_check_distribution_parameters(false);
    let mut dist = InverseWishart::new(-1.0, Array::eye(2)).unwrap();
    assert_eq!(dist.degrees_of_freedom(), -1.0);
    assert_eq!(dist.checking(), ParameterChecking::ProcessDefault);

    //Explicit configuration ignores the toggle
    let explicit = InverseWishart::with_options(-1.0, Array::eye(2), None::<StdRng>, BartlettSampler,
                                                ParameterChecking::Enabled);
    assert!(matches!(explicit, Err(DistributionError::InvalidParameter(_))));

    //The toggle is re-read on every mutation of an existing distribution
    set_check_distribution_parameters(true);
    assert!(matches!(dist.set_degrees_of_freedom(-2.0), Err(DistributionError::InvalidParameter(_))));
    assert_eq!(dist.degrees_of_freedom(), -1.0);
    assert!(dist.set_degrees_of_freedom(4.0).is_ok());
    assert_eq!(dist.degrees_of_freedom(), 4.0);
}
