//! # Shared Types Crate
//!
//! Cross-subsystem primitives for the SubChain workspace.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: every type that crosses a crate boundary
//!   (principals, identifiers, amounts, timestamps) is defined here.
//! - **Opaque Principals**: a `Principal` is an already-authenticated caller
//!   identity. Nothing in this workspace signs, verifies, or derives it;
//!   binding a principal to a real key is the transport layer's job.

pub mod entities;

pub use entities::*;
