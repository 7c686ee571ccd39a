//! Engine configuration, validation, and error types.
//!
//! [`EngineConfig`] is the builder-input for constructing an
//! [`Engine`](crate::Engine). [`validate()`](EngineConfig::validate) checks every
//! invariant up front; the same checks back the runtime setters, which
//! reject invalid values synchronously and leave state untouched.

use std::error::Error;
use std::fmt;

use spindle_lattice::{Lattice, LatticeError};

// ── EngineConfig ───────────────────────────────────────────────────

/// Configuration for constructing an [`Engine`](crate::Engine).
///
/// Defaults match the reference ferromagnet: a 256×256 lattice at the
/// 2D Ising critical temperature with 10 000 attempted flips per frame.
#[derive(Clone, Debug)]
pub struct EngineConfig {
    /// Lattice side length `N`. Must be in `[1, Lattice::MAX_DIM]`.
    pub size: u32,
    /// Temperature `T`. Must be finite and strictly positive — `T <= 0`
    /// degenerates the acceptance weight `exp(-ΔE/T)`.
    pub temperature: f64,
    /// Coupling constant `J`. Positive favours aligned neighbours
    /// (ferromagnetic), negative anti-aligned. Must be finite and
    /// non-zero.
    pub coupling: f64,
    /// Attempted flips per frame: the sole backpressure knob bounding
    /// per-tick work. Zero is a valid no-op frame budget.
    pub steps_per_frame: u32,
    /// RNG seed. Identical seeds reproduce identical spin and
    /// accumulator trajectories.
    pub seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            size: 256,
            temperature: 2.269,
            coupling: 1.0,
            steps_per_frame: 10_000,
            seed: 42,
        }
    }
}

impl EngineConfig {
    /// Check every structural invariant.
    ///
    /// Returns the first violation found. A config that passes here
    /// constructs an engine without further fallible work.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_size(self.size)?;
        validate_temperature(self.temperature)?;
        validate_coupling(self.coupling)?;
        Ok(())
    }
}

/// Validate a lattice side length without constructing a lattice.
pub(crate) fn validate_size(size: u32) -> Result<(), ConfigError> {
    if size == 0 {
        return Err(ConfigError::Lattice(LatticeError::EmptyLattice));
    }
    if size > Lattice::MAX_DIM {
        return Err(ConfigError::Lattice(LatticeError::DimensionTooLarge {
            value: size,
            max: Lattice::MAX_DIM,
        }));
    }
    Ok(())
}

/// Validate a temperature value for the acceptance rule.
pub(crate) fn validate_temperature(value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ConfigError::NonPositiveTemperature { value });
    }
    Ok(())
}

/// Validate a coupling constant.
pub(crate) fn validate_coupling(value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() || value == 0.0 {
        return Err(ConfigError::InvalidCoupling { value });
    }
    Ok(())
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected at configuration time — construction or a runtime
/// setter. Never raised mid-step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// Lattice side length is invalid.
    Lattice(LatticeError),
    /// Temperature is non-finite, zero, or negative.
    NonPositiveTemperature {
        /// The rejected value.
        value: f64,
    },
    /// Coupling constant is non-finite or zero.
    InvalidCoupling {
        /// The rejected value.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lattice(e) => write!(f, "lattice: {e}"),
            Self::NonPositiveTemperature { value } => {
                write!(f, "temperature must be finite and positive, got {value}")
            }
            Self::InvalidCoupling { value } => {
                write!(f, "coupling must be finite and non-zero, got {value}")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Lattice(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LatticeError> for ConfigError {
    fn from(e: LatticeError) -> Self {
        Self::Lattice(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_zero_size() {
        let config = EngineConfig {
            size: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Lattice(LatticeError::EmptyLattice))
        ));
    }

    #[test]
    fn rejects_oversized_lattice() {
        let config = EngineConfig {
            size: Lattice::MAX_DIM + 1,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Lattice(LatticeError::DimensionTooLarge { .. }))
        ));
    }

    #[test]
    fn rejects_non_positive_temperature() {
        for t in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let config = EngineConfig {
                temperature: t,
                ..Default::default()
            };
            assert!(
                matches!(
                    config.validate(),
                    Err(ConfigError::NonPositiveTemperature { .. })
                ),
                "temperature {t} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_degenerate_coupling() {
        for j in [0.0, f64::NAN, f64::NEG_INFINITY] {
            let config = EngineConfig {
                coupling: j,
                ..Default::default()
            };
            assert!(
                matches!(config.validate(), Err(ConfigError::InvalidCoupling { .. })),
                "coupling {j} should be rejected"
            );
        }
    }

    #[test]
    fn zero_step_budget_is_valid() {
        let config = EngineConfig {
            steps_per_frame: 0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
