//! Severity classifiers for stage codes and test pass rates.
//!
//! Both classifiers map their input to one of the `status1`..`status4`
//! severity classes. Unrecognized input is a hard error, never a default.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StatusError {
    #[error("unknown stage \"{0}\"")]
    UnknownStage(String),
    #[error("invalid passing percentage \"{0}\"")]
    InvalidPercentage(i64),
}

/// Severity class for a design or verification stage code.
///
/// `"N/A"` is recognized but carries no severity.
pub fn stage_status(stage: &str) -> Result<&'static str, StatusError> {
    match stage {
        "N/A" => Ok(""),
        "D0" | "V0" => Ok("status1"),
        "D1" | "V1" => Ok("status2"),
        "D2" | "V2" | "D2S" | "V2S" => Ok("status3"),
        "D3" | "V3" => Ok("status4"),
        other => Err(StatusError::UnknownStage(other.to_string())),
    }
}

/// Severity class for a passing-rate percentage.
///
/// Anything above 100 is rejected. Negative input falls into the lowest
/// class rather than erroring; callers feeding floor(100 * passing / runs)
/// never produce one.
pub fn passing_status(passing: i64) -> Result<&'static str, StatusError> {
    if passing <= 45 {
        Ok("status1")
    } else if passing <= 90 {
        Ok("status2")
    } else if passing < 100 {
        Ok("status3")
    } else if passing == 100 {
        Ok("status4")
    } else {
        Err(StatusError::InvalidPercentage(passing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_status_covers_every_recognized_code() {
        assert_eq!(stage_status("N/A"), Ok(""));
        assert_eq!(stage_status("D0"), Ok("status1"));
        assert_eq!(stage_status("V0"), Ok("status1"));
        assert_eq!(stage_status("D1"), Ok("status2"));
        assert_eq!(stage_status("V1"), Ok("status2"));
        assert_eq!(stage_status("D2"), Ok("status3"));
        assert_eq!(stage_status("V2"), Ok("status3"));
        assert_eq!(stage_status("D2S"), Ok("status3"));
        assert_eq!(stage_status("V2S"), Ok("status3"));
        assert_eq!(stage_status("D3"), Ok("status4"));
        assert_eq!(stage_status("V3"), Ok("status4"));
    }

    #[test]
    fn stage_status_is_case_sensitive_and_exact() {
        for bad in ["d0", "D4", "V", "", "n/a", " D0"] {
            assert_eq!(
                stage_status(bad),
                Err(StatusError::UnknownStage(bad.to_string())),
                "expected UnknownStage for {:?}",
                bad
            );
        }
    }

    #[test]
    fn passing_status_boundaries() {
        assert_eq!(passing_status(0), Ok("status1"));
        assert_eq!(passing_status(45), Ok("status1"));
        assert_eq!(passing_status(46), Ok("status2"));
        assert_eq!(passing_status(90), Ok("status2"));
        assert_eq!(passing_status(91), Ok("status3"));
        assert_eq!(passing_status(99), Ok("status3"));
        assert_eq!(passing_status(100), Ok("status4"));
    }

    #[test]
    fn passing_status_rejects_over_100() {
        assert_eq!(
            passing_status(101),
            Err(StatusError::InvalidPercentage(101))
        );
        assert_eq!(
            passing_status(1000),
            Err(StatusError::InvalidPercentage(1000))
        );
    }

    #[test]
    fn passing_status_negative_falls_into_lowest_class() {
        assert_eq!(passing_status(-1), Ok("status1"));
        assert_eq!(passing_status(-100), Ok("status1"));
    }
}
