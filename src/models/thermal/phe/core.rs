//! Computational core of the plate heat exchanger performance model.
//!
//! The module split follows the calculation pipeline: [`input`] describes and
//! validates the problem, [`fluid`] provides thermophysical properties,
//! [`correlations`] holds the stateless formulas, and [`solve`] composes them
//! into the mode-dependent heat-balance closure. [`results`] and [`error`]
//! carry the outputs of the two possible outcomes.

pub mod correlations;
pub mod error;
pub mod fluid;
pub mod input;
pub mod results;
pub mod solve;
