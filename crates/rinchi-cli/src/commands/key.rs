use crate::cli::KeyArgs;
use crate::error::{CliError, Result};
use crate::utils::parser;
use rinchi_core::core::key::base26::{
    DOUBLET_COUNT, TRIPLET_COUNT, base26_doublet, base26_major_block, base26_triplet,
};
use rinchi_core::core::key::window::DOUBLET_BITS_56_TO_64;
use tracing::{debug, info};

pub fn run(args: KeyArgs) -> Result<()> {
    let code = encode(&args)?;
    info!("Encoded Base26 code: {}", code);
    println!("{}", code);
    Ok(())
}

fn encode(args: &KeyArgs) -> Result<String> {
    if let Some(hex) = &args.digest {
        let digest =
            parser::parse_hex_digest(hex).map_err(|e| CliError::Argument(e.to_string()))?;
        let required = DOUBLET_BITS_56_TO_64.min_bytes();
        if digest.len() < required {
            return Err(CliError::Argument(format!(
                "Digest of {} byte(s) is too short; the major block needs at least {}.",
                digest.len(),
                required
            )));
        }
        debug!("Encoding major block of a {}-byte digest.", digest.len());
        return Ok(base26_major_block(&digest));
    }

    if let Some(index) = args.triplet {
        if index >= TRIPLET_COUNT {
            return Err(CliError::Argument(format!(
                "Triplet index {} is out of range; expected 0..{}.",
                index, TRIPLET_COUNT
            )));
        }
        return Ok(base26_triplet(index));
    }

    if let Some(index) = args.doublet {
        if index >= DOUBLET_COUNT {
            return Err(CliError::Argument(format!(
                "Doublet index {} is out of range; expected 0..{}.",
                index, DOUBLET_COUNT
            )));
        }
        return Ok(base26_doublet(index));
    }

    Err(CliError::Argument(
        "One of --digest, --triplet or --doublet is required.".to_string(),
    ))
}
