use super::error::DecompositionError;
use crate::core::constants::{COMPONENT_DELIMITER, LAYER_DELIMITER};

/// Fragments of layers 2, 3 and 4, in that order.
pub type Layers<'a> = [Vec<&'a str>; 3];

/// Splits a layer into its component fragments.
///
/// An absent or empty layer yields no fragments, and empty fragments produced by
/// leading, trailing or doubled delimiters are dropped.
pub fn split_layer(layer: Option<&str>) -> Vec<&str> {
    layer
        .map(|text| {
            text.split(COMPONENT_DELIMITER)
                .filter(|fragment| !fragment.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

/// Splits a non-empty RAuxInfo string into three layers of fragments.
///
/// Layers omitted at the end are returned empty, and anything after a third `<>`
/// is ignored.
pub fn decompose_aux_info<'a>(
    aux_info: &'a str,
    header: &str,
) -> Result<Layers<'a>, DecompositionError> {
    let body =
        aux_info
            .strip_prefix(header)
            .ok_or_else(|| DecompositionError::AuxInfoHeaderMismatch {
                expected: header.to_string(),
            })?;

    let mut layers = body.split(LAYER_DELIMITER);
    Ok([
        split_layer(layers.next()),
        split_layer(layers.next()),
        split_layer(layers.next()),
    ])
}

/// Per-layer fragment counts, as used in mismatch reports.
pub fn layer_counts(layers: &Layers<'_>) -> [usize; 3] {
    [layers[0].len(), layers[1].len(), layers[2].len()]
}
