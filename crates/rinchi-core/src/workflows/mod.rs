//! # Workflows Module
//!
//! High-level entry points that run the whole decomposition pipeline for one
//! RInChI/RAuxInfo pair.
//!
//! ## Overview
//!
//! A workflow validates its inputs, drives the grammar, layer splitting and assembly
//! stages of the [`engine`](crate::engine), and packages the outcome together with its
//! status log. Domain failures never escape as panics: they are recorded as status
//! messages and forwarded to the caller's [`StatusSink`](crate::engine::status::StatusSink).
//!
//! ## Architecture
//!
//! - **Decomposition Workflow** ([`decompose`]) - Splits a reaction identifier into
//!   standalone per-molecule InChI components with roles.

pub mod decompose;
