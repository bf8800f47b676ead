//! Supporting utilities used by models.
//!
//! Code here is part of the public API because it's useful alongside the
//! models, but its surface is small and may grow or shift as more models
//! are added.

pub mod units;
