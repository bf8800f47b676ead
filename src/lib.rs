//! # PHE Models
//!
//! Lumped-parameter performance models for plate heat exchangers (PHEs).
//!
//! The crate's centerpiece is the [`models::thermal::phe`] engine: a pure
//! function from operating mode, hot-fluid selection, boundary temperatures,
//! mass flow rate, and plate geometry to a complete thermal/hydraulic
//! performance report.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific model implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Scope
//!
//! The engine is a single-pass estimator with fixed closure assumptions,
//! not a discretized multi-node thermal solver. Input forms, result
//! rendering, and file export are collaborator concerns; the engine exposes
//! a serializable report record and nothing more.
//!
//! All dimensional quantities use [`uom`] types. The only process-wide data
//! are immutable property tables, so concurrent invocations need no
//! coordination.

pub mod models;
pub mod support;
