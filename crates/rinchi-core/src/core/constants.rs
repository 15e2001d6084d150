//! Literals of the RInChI 1.00 format.
//!
//! The header values are the defaults of [`FormatConfig`](crate::engine::config::FormatConfig);
//! the delimiters and tags are fixed by the grammar and are not configurable.

pub const RINCHI_STD_HEADER: &str = "RInChI=1.00.1S/";
pub const RINCHI_AUXINFO_HEADER: &str = "RAuxInfo=1.00.1/";
pub const INCHI_STD_HEADER: &str = "InChI=1S/";
pub const INCHI_AUXINFO_HEADER: &str = "AuxInfo=1/";

/// Separates layers 2, 3 and 4 of a RInChI and the layers of a RAuxInfo.
pub const LAYER_DELIMITER: &str = "<>";
/// Separates the molecules within one layer.
pub const COMPONENT_DELIMITER: char = '!';

pub const DIRECTION_TAG: &str = "/d";
pub const NOSTRUCT_TAG: &str = "/u";
pub const NOSTRUCT_DELIMITER: char = '-';

pub const DIRECTION_FORWARD: char = '+';
pub const DIRECTION_REVERSE: char = '-';
pub const DIRECTION_EQUILIBRIUM: char = '=';
