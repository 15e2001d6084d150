//! # Engine Module
//!
//! The decomposition engine: everything between a raw RInChI/RAuxInfo pair and the ordered
//! list of reaction components.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Header literals the grammar is anchored on
//! - **Grammar** ([`grammar`]) - Anchored recognition of the full RInChI string
//! - **Layer Splitting** ([`layers`]) - Molecule fragments of a layer and RAuxInfo layers
//! - **Assembly** ([`assembler`]) - Role assignment and component construction
//! - **Status Reporting** ([`status`]) - Status log, severities and injectable sinks
//! - **Error Handling** ([`error`]) - Domain errors raised while decomposing
//!
//! Every stage is a pure function of its inputs; the engine holds no state between calls.

pub mod assembler;
pub mod config;
pub mod error;
pub mod grammar;
pub mod layers;
pub mod status;
