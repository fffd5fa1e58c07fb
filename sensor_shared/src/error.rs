//! Simulator errors.
//!
//! Both variants are caller bugs: bad bounds at construction, or a clock
//! that went backwards. Neither is retried.

use std::fmt;

/// Error type for simulator construction and sampling.
#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// Bounds are inconsistent; the message names the offending field.
    Configuration(String),
    /// `sample` was called with a timestamp earlier than the previous one.
    InvalidTime { previous: f64, requested: f64 },
}

impl SimError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        SimError::Configuration(msg.into())
    }
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::Configuration(msg) => write!(f, "invalid simulation bounds: {}", msg),
            SimError::InvalidTime {
                previous,
                requested,
            } => write!(
                f,
                "non-monotonic sample time: {} is earlier than previous {}",
                requested, previous
            ),
        }
    }
}

impl std::error::Error for SimError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_problem() {
        let e = SimError::config("max_force_magnitude must be > 0");
        assert_eq!(
            e.to_string(),
            "invalid simulation bounds: max_force_magnitude must be > 0"
        );

        let e = SimError::InvalidTime {
            previous: 2.0,
            requested: 1.5,
        };
        assert!(e.to_string().contains("1.5"));
        assert!(e.to_string().contains("2"));
    }

    #[test]
    fn converts_into_anyhow() {
        fn fails() -> anyhow::Result<()> {
            Err(SimError::config("bad"))?;
            Ok(())
        }
        let err = fails().unwrap_err();
        assert!(err.downcast_ref::<SimError>().is_some());
    }
}
