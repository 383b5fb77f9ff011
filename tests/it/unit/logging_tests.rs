//! Unit tests for log subscriber installation.

use numwire::constants::DEFAULT_LOG_FILTER;
use numwire::logging::init_logging;

#[test]
fn test_second_install_fails_without_panicking() {
    let _ = init_logging(DEFAULT_LOG_FILTER);
    assert!(init_logging(DEFAULT_LOG_FILTER).is_err());
}
