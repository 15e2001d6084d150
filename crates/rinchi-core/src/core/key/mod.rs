//! # Key Module
//!
//! Base26 encoding of hash digests into the upper-case letter codes used by InChI- and
//! RInChI-style keys.
//!
//! ## Overview
//!
//! A key block is built from fixed bit windows of a digest. The windows are not aligned to
//! byte boundaries (a 14-bit triplet window starting at bit 14 spans three bytes), so every
//! encoder goes through a [`BitWindow`](window::BitWindow) descriptor that extracts the exact
//! bits before they are mapped to letters.
//!
//! - [`window`] - Bit window descriptors and bit extraction
//! - [`base26`] - Index-to-letter tables and the per-window encoders
//!
//! The digest itself is produced elsewhere; these functions treat it as opaque bytes.

pub mod base26;
pub mod window;
