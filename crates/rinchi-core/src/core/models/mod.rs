//! Value types describing a decomposed reaction.
//!
//! - [`component`] - A single reaction component and its [`Role`](component::Role)
//! - [`direction`] - The reaction direction encoded in layer 5
//! - [`nostruct`] - Counts of structure-less placeholders from layer 6

pub mod component;
pub mod direction;
pub mod nostruct;
