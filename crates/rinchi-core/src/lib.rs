//! # RInChI Core Library
//!
//! A library for taking apart RInChI reaction identifiers and their companion RAuxInfo
//! strings, and for encoding digest windows into the Base26 letter codes used by
//! InChI-style keys.
//!
//! ## Architectural Philosophy
//!
//! The library keeps the same three-layer split as its sibling crates so that each
//! concern can be tested on its own.
//!
//! - **[`core`]: The Foundation.** Stateless data models (`Component`, `Direction`,
//!   `Role`), the format constants, and the pure Base26 key encoders.
//!
//! - **[`engine`]: The Logic Core.** The grammar matcher, the layer splitters, the
//!   component assembler, the status log and sinks, configuration and errors.
//!
//! - **[`workflows`]: The Public API.** Ties `engine` and `core` together into a single
//!   decomposition call that records every failure as status instead of aborting.
//!
//! ```
//! use rinchi_core::workflows::decompose;
//!
//! let result = decompose::decompose(
//!     Some("RInChI=1.00.1S/CH4/h1H4<>CO2/c2-1-3/d+"),
//!     Some(""),
//! );
//! assert!(result.is_success());
//! assert_eq!(result.components().len(), 2);
//! ```

pub mod core;
pub mod engine;
pub mod workflows;
