//! Public models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models are organized into domain-specific submodules (currently only
//! [`thermal`]) so related models can share domain-level support code as
//! the collection grows.
//!
//! # Model structure
//!
//! Each model lives in its own module and keeps its computation and domain
//! logic in an internal `core` submodule. The module root re-exports the
//! model's public types and entry points; `core` itself is an
//! implementation detail.

pub mod thermal;
