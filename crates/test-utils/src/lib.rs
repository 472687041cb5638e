//! Test helpers for the modis-l1b workspace.
//!
//! - [`paths`]: locating MODIS granules that live outside the repository
//! - [`generators`]: synthetic band stacks and geolocation grids
//! - [`fixtures`]: MOD021KM band tables and synthetic calibration constants
//!
//! Real-granule tests call [`require_test_file!`] so they pass silently on
//! machines without the sample data.

pub mod fixtures;
pub mod generators;
pub mod paths;

pub use fixtures::*;
pub use generators::*;
pub use paths::*;

/// Resolve a sample granule by name, or return from the calling test.
///
/// ```ignore
/// let path = require_test_file!(modis::SAMPLE_L1B);
/// ```
#[macro_export]
macro_rules! require_test_file {
    ($name:expr) => {{
        match $crate::find_test_file($name) {
            Some(path) => path,
            None => {
                eprintln!("SKIPPED: granule '{}' not found (set TEST_DATA_DIR)", $name);
                return;
            }
        }
    }};
}

/// Resolve several granules at once; the test is skipped if any is missing.
///
/// Evaluates to a `Vec<PathBuf>` in argument order.
#[macro_export]
macro_rules! require_test_files {
    ($($name:expr),+ $(,)?) => {{
        match $crate::find_test_files(&[$($name),+]) {
            Ok(paths) => paths,
            Err(missing) => {
                eprintln!("SKIPPED: granule '{}' not found (set TEST_DATA_DIR)", missing);
                return;
            }
        }
    }};
}

/// Assert two calibrated values agree within `epsilon`.
///
/// Two NaNs compare equal, since NaN marks a masked sample on both sides.
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let left: f64 = $left as f64;
        let right: f64 = $right as f64;
        let epsilon: f64 = $epsilon as f64;
        let same = (left.is_nan() && right.is_nan()) || (left - right).abs() <= epsilon;
        if !same {
            panic!(
                "values differ: left = {:?}, right = {:?}, epsilon = {:?}",
                left, right, epsilon
            );
        }
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_approx_eq_within_epsilon() {
        assert_approx_eq!(0.25001, 0.25, 0.001);
        assert_approx_eq!(-5.5, -5.500001, 0.0001);
    }

    #[test]
    fn test_approx_eq_masked_samples() {
        assert_approx_eq!(f64::NAN, f64::NAN, 0.0);
    }

    #[test]
    #[should_panic(expected = "values differ")]
    fn test_approx_eq_nan_against_value() {
        assert_approx_eq!(f64::NAN, 1.0, 0.5);
    }

    #[test]
    #[should_panic(expected = "values differ")]
    fn test_approx_eq_outside_epsilon() {
        assert_approx_eq!(1.1, 1.0, 0.001);
    }
}
