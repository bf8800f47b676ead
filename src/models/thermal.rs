//! Thermal systems models.
//!
//! Models for heat exchange equipment. Currently holds the plate heat
//! exchanger performance model in [`phe`].

pub mod phe;
