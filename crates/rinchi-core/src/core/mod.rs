//! # Core Module
//!
//! Stateless building blocks shared by the decomposition engine and the key encoders.
//!
//! ## Architecture
//!
//! - **Format Constants** ([`constants`]) - Header literals, delimiters and tag markers of the
//!   RInChI and RAuxInfo formats
//! - **Reaction Models** ([`models`]) - Components, roles, directions and no-structure counts
//! - **Key Encoding** ([`key`]) - Base26 encoding of digest bit windows into letter codes
//!
//! Nothing in this module allocates shared state or performs I/O; every type is a plain
//! value that is safe to share across threads.

pub mod constants;
pub mod key;
pub mod models;
