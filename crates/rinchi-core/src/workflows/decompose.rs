use crate::core::models::component::Component;
use crate::core::models::direction::Direction;
use crate::core::models::nostruct::NoStructCounts;
use crate::engine::assembler::assemble_components;
use crate::engine::config::FormatConfig;
use crate::engine::error::{DecompositionError, InputKind};
use crate::engine::grammar::match_rinchi;
use crate::engine::layers::{Layers, decompose_aux_info, layer_counts, split_layer};
use crate::engine::status::{NoopSink, Status, StatusLog, StatusMessage, StatusSink};
use serde::Serialize;
use tracing::{debug, instrument, trace};

/// The components of a successfully decomposed reaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecomposedReaction {
    pub components: Vec<Component>,
    pub direction: Direction,
    pub no_struct: NoStructCounts,
}

/// Outcome of [`decompose_with`], successful or not.
///
/// On failure the component list is empty, the direction is `None`, and the status
/// log holds the reason. Check [`status`](Self::status) before using the components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decomposition {
    components: Vec<Component>,
    direction: Option<Direction>,
    no_struct: NoStructCounts,
    status_log: StatusLog,
}

impl Decomposition {
    fn failed(status_log: StatusLog) -> Self {
        Self {
            components: Vec::new(),
            direction: None,
            no_struct: NoStructCounts::default(),
            status_log,
        }
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    pub fn no_struct(&self) -> NoStructCounts {
        self.no_struct
    }

    pub fn status(&self) -> Status {
        self.status_log.status()
    }

    pub fn is_success(&self) -> bool {
        self.status() == Status::Success
    }

    pub fn status_log(&self) -> &StatusLog {
        &self.status_log
    }
}

/// Decomposes a RInChI and its RAuxInfo, propagating the first error.
///
/// An empty `rauxinfo` means no auxiliary information is available; every component
/// then has an empty AuxInfo.
pub fn try_decompose(
    rinchi: &str,
    rauxinfo: &str,
    config: &FormatConfig,
) -> Result<DecomposedReaction, DecompositionError> {
    let matched = match_rinchi(rinchi, &config.rinchi_header)?;
    trace!(
        layer2 = ?matched.layer2,
        layer3 = ?matched.layer3,
        layer4 = ?matched.layer4,
        direction = ?matched.direction,
        "Matched RInChI layers"
    );

    let no_struct = matched.no_struct_counts()?;
    let layers: Layers<'_> = [
        split_layer(matched.layer2),
        split_layer(matched.layer3),
        split_layer(matched.layer4),
    ];

    let aux_layers = if rauxinfo.is_empty() {
        None
    } else {
        Some(decompose_aux_info(rauxinfo, &config.rauxinfo_header)?)
    };

    let direction = Direction::from_tag(matched.direction);
    debug!(
        counts = ?layer_counts(&layers),
        aux_counts = ?aux_layers.as_ref().map(layer_counts),
        %direction,
        "Split RInChI into layers"
    );

    let components = assemble_components(&layers, aux_layers.as_ref(), direction, config)?;

    Ok(DecomposedReaction {
        components,
        direction,
        no_struct,
    })
}

/// Decomposes a RInChI and its RAuxInfo, recording every failure in the result's status
/// log and forwarding it to `sink`.
///
/// Each absent input is reported separately, so passing two `None`s records two errors.
#[instrument(skip_all, name = "decompose_workflow")]
pub fn decompose_with(
    rinchi: Option<&str>,
    rauxinfo: Option<&str>,
    config: &FormatConfig,
    sink: &dyn StatusSink,
) -> Decomposition {
    let mut status_log = StatusLog::new();
    let mut record = |error: DecompositionError| {
        status_log.add_message(StatusMessage::new(error.to_string(), Status::Error), sink);
    };

    let (rinchi, rauxinfo) = match (rinchi, rauxinfo) {
        (Some(rinchi), Some(rauxinfo)) => (rinchi, rauxinfo),
        (rinchi, rauxinfo) => {
            if rinchi.is_none() {
                record(DecompositionError::NullInput(InputKind::Rinchi));
            }
            if rauxinfo.is_none() {
                record(DecompositionError::NullInput(InputKind::AuxInfo));
            }
            return Decomposition::failed(status_log);
        }
    };

    match try_decompose(rinchi, rauxinfo, config) {
        Ok(reaction) => {
            debug!(
                components = reaction.components.len(),
                direction = %reaction.direction,
                "Decomposition finished."
            );
            Decomposition {
                components: reaction.components,
                direction: Some(reaction.direction),
                no_struct: reaction.no_struct,
                status_log,
            }
        }
        Err(error) => {
            record(error);
            Decomposition::failed(status_log)
        }
    }
}

/// [`decompose_with`] using the default RInChI 1.00 format and discarding status
/// messages; they remain available through [`Decomposition::status_log`].
pub fn decompose(rinchi: Option<&str>, rauxinfo: Option<&str>) -> Decomposition {
    decompose_with(rinchi, rauxinfo, &FormatConfig::default(), &NoopSink)
}
