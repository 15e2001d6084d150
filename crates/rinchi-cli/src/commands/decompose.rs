use crate::cli::{DecomposeArgs, OutputFormat};
use crate::config::PartialConfig;
use crate::error::{CliError, Result};
use crate::utils::parser::{self, ReactionInput};
use rinchi_core::core::models::component::Component;
use rinchi_core::core::models::direction::Direction;
use rinchi_core::core::models::nostruct::NoStructCounts;
use rinchi_core::engine::status::{Status, StatusMessage, TracingSink};
use rinchi_core::workflows::decompose::{Decomposition, decompose_with};
use serde::Serialize;
use tracing::{info, warn};

#[derive(Serialize)]
struct DecompositionReport<'a> {
    status: Status,
    direction: Option<Direction>,
    no_struct: NoStructCounts,
    components: &'a [Component],
    messages: &'a [StatusMessage],
}

impl<'a> From<&'a Decomposition> for DecompositionReport<'a> {
    fn from(result: &'a Decomposition) -> Self {
        Self {
            status: result.status(),
            direction: result.direction(),
            no_struct: result.no_struct(),
            components: result.components(),
            messages: result.status_log().messages(),
        }
    }
}

pub fn run(args: DecomposeArgs) -> Result<()> {
    let partial_config = PartialConfig::load(args.config.as_deref())?;
    info!("Merging configuration from file and CLI arguments...");
    let config = partial_config.merge_with_cli(&args)?;

    let reaction = read_reaction(&args)?;
    let rauxinfo = reaction.rauxinfo.as_deref().unwrap_or("");
    if rauxinfo.is_empty() {
        info!("No RAuxInfo supplied; components will carry no AuxInfo.");
    }

    info!("Decomposing {}", reaction.rinchi);
    let result = decompose_with(
        Some(reaction.rinchi.as_str()),
        Some(rauxinfo),
        &config.format,
        &TracingSink,
    );

    println!("{}", render(&result, config.output)?);

    match result.status() {
        Status::Error => Err(CliError::Decomposition(result.status_log().summary())),
        Status::Warning => {
            warn!("Decomposition finished with warnings.");
            Ok(())
        }
        Status::Success => {
            info!(
                "Decomposition finished with {} component(s).",
                result.components().len()
            );
            Ok(())
        }
    }
}

fn read_reaction(args: &DecomposeArgs) -> Result<ReactionInput> {
    if let Some(path) = &args.input {
        info!("Reading reaction from {:?}", path);
        let content = std::fs::read_to_string(path)?;
        return parser::parse_reaction_file(&content).map_err(|e| CliError::FileParsing {
            path: path.clone(),
            source: e.into(),
        });
    }

    let rinchi = args
        .rinchi
        .clone()
        .ok_or_else(|| CliError::Argument("Either --rinchi or --input is required.".to_string()))?;
    Ok(ReactionInput {
        rinchi,
        rauxinfo: args.auxinfo.clone(),
    })
}

fn render(result: &Decomposition, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&DecompositionReport::from(
            result,
        ))?),
        OutputFormat::Text => Ok(render_text(result)),
    }
}

fn render_text(result: &Decomposition) -> String {
    let direction = match result.direction() {
        Some(direction) => match direction.tag() {
            Some(tag) => format!("{direction} (/d{tag})"),
            None => direction.to_string(),
        },
        None => "-".to_string(),
    };

    let mut lines = vec![
        format!("Status: {}", result.status()),
        format!("Direction: {direction}"),
    ];
    let counts = result.no_struct();
    if !counts.is_empty() {
        lines.push(format!(
            "No-structure counts: {}, {}, {} ({} total)",
            counts.layer2,
            counts.layer3,
            counts.layer4,
            counts.total()
        ));
    }
    lines.extend(result.components().iter().map(|component| {
        if component.has_aux_info() {
            format!(
                "{}\t{}\t{}",
                component.role(),
                component.inchi(),
                component.aux_info()
            )
        } else {
            format!("{}\t{}", component.role(), component.inchi())
        }
    }));
    lines.join("\n")
}
