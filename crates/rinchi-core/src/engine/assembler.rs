use super::config::FormatConfig;
use super::error::DecompositionError;
use super::layers::{Layers, layer_counts};
use crate::core::models::component::{Component, Role};
use crate::core::models::direction::Direction;
use tracing::trace;

/// Roles of the molecules in layers 2, 3 and 4 for a reaction direction.
///
/// Only [`Direction::Backward`] swaps reactants and products; equilibrium and
/// undirected reactions are read left to right.
pub fn layer_roles(direction: Direction) -> [Role; 3] {
    match direction {
        Direction::Backward => [Role::Product, Role::Reactant, Role::Agent],
        Direction::Forward | Direction::Bidirectional | Direction::Undirected => {
            [Role::Reactant, Role::Product, Role::Agent]
        }
    }
}

/// Builds the ordered component list from the split RInChI layers and, when present,
/// the matching RAuxInfo layers.
///
/// Components come out layer by layer, preserving fragment order within each layer.
/// Fails with [`DecompositionError::LayerCountMismatch`] if any RAuxInfo layer holds a
/// different number of fragments than its RInChI layer.
pub fn assemble_components(
    layers: &Layers<'_>,
    aux_layers: Option<&Layers<'_>>,
    direction: Direction,
    config: &FormatConfig,
) -> Result<Vec<Component>, DecompositionError> {
    if let Some(aux_layers) = aux_layers {
        let rinchi = layer_counts(layers);
        let aux_info = layer_counts(aux_layers);
        if rinchi != aux_info {
            return Err(DecompositionError::LayerCountMismatch { rinchi, aux_info });
        }
    }

    let roles = layer_roles(direction);
    let capacity = layers.iter().map(Vec::len).sum();
    let mut components = Vec::with_capacity(capacity);

    for (index, (fragments, role)) in layers.iter().zip(roles).enumerate() {
        for (position, fragment) in fragments.iter().enumerate() {
            let aux_info = aux_layers
                .map(|aux| format!("{}{}", config.auxinfo_header, aux[index][position]))
                .unwrap_or_default();
            trace!(layer = index + 2, position, %role, fragment, "Assembled component");
            components.push(Component::new(
                format!("{}{}", config.inchi_header, fragment),
                aux_info,
                role,
            ));
        }
    }

    Ok(components)
}
