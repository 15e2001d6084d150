pub mod decompose;
pub mod key;
