//! Error types for the plate heat exchanger model.
//!
//! Two tiers: [`Violation`]s are input problems, collected exhaustively so a
//! caller can show every violated constraint at once; the remaining
//! [`SimulationError`] variants report derived quantities that degenerated
//! during the calculation itself.

use std::fmt;

use thiserror::Error;
use uom::si::f64::TemperatureInterval;

/// A single violated input constraint.
///
/// Messages match the wording shown to users of the original tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("mass flow rate must be greater than 0")]
    MassFlowNotPositive,

    #[error("hot fluid inlet temperature must be greater than 0°C")]
    HotInletNotPositive,

    #[error("hot fluid outlet temperature must be greater than 0°C")]
    HotOutletNotPositive,

    #[error("cold fluid inlet temperature must be greater than 0°C")]
    ColdInletNotPositive,

    #[error("cold fluid outlet temperature must be greater than 0°C")]
    ColdOutletNotPositive,

    #[error("hot fluid inlet temperature must be greater than cold fluid outlet temperature")]
    HotInletNotAboveColdOutlet,

    #[error("cold fluid inlet temperature must be less than hot fluid outlet temperature")]
    ColdInletNotBelowHotOutlet,

    #[error("plate length must be greater than 0")]
    LengthNotPositive,

    #[error("plate breadth must be greater than 0")]
    BreadthNotPositive,

    #[error("plate gap must be greater than 0")]
    GapNotPositive,

    #[error("number of plates must be at least 2")]
    TooFewPlates,
}

/// The full batch of violations found in one validation pass.
///
/// Validation never short-circuits: every rule is evaluated and every
/// failure is recorded, in input-declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Violations(Vec<Violation>);

impl Violations {
    pub(super) fn new() -> Self {
        Self(Vec::new())
    }

    pub(super) fn push(&mut self, violation: Violation) {
        self.0.push(violation);
    }

    /// Records `violation` when `failed` holds.
    pub(super) fn check(&mut self, failed: bool, violation: Violation) {
        if failed {
            self.push(violation);
        }
    }

    /// Returns true if no violations were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the violations in the order they were found.
    #[must_use]
    pub fn as_slice(&self) -> &[Violation] {
        &self.0
    }

    /// Returns true if `violation` is in the batch.
    #[must_use]
    pub fn contains(&self, violation: Violation) -> bool {
        self.0.contains(&violation)
    }

    /// Number of violations in the batch.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for violation in &self.0 {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{violation}")?;
            first = false;
        }
        Ok(())
    }
}

/// Errors returned by [`solve`](super::solve::solve).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// One or more input constraints were violated; no calculation was
    /// attempted.
    #[error("invalid inputs: {0}")]
    InvalidInputs(Violations),

    /// The resolved boundary temperatures left a non-positive temperature
    /// difference at one of the exchanger ends, putting the log-mean
    /// temperature difference outside its domain.
    #[error(
        "terminal temperature differences must be positive \
         (hot end {hot_end:?}, cold end {cold_end:?})"
    )]
    NonPositiveTerminalDifference {
        hot_end: TemperatureInterval,
        cold_end: TemperatureInterval,
    },

    /// A derived quantity came out NaN or infinite.
    #[error("computed {quantity} is not finite")]
    NonFinite { quantity: &'static str },
}
