use thiserror::Error;

const RINCHI_LINE_PREFIX: &str = "RInChI=";
const RAUXINFO_LINE_PREFIX: &str = "RAuxInfo=";

#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("Invalid hex digest: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("No line starting with 'RInChI=' was found.")]
    MissingRinchi,

    #[error("More than one '{prefix}' line was found (line {line}).")]
    DuplicateLine { prefix: &'static str, line: usize },
}

/// A RInChI and its optional RAuxInfo, as read from a reaction file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionInput {
    pub rinchi: String,
    pub rauxinfo: Option<String>,
}

/// Decodes a hex string such as `"7031ff"` into bytes. An optional `0x` prefix and
/// surrounding whitespace are accepted; digits may be upper or lower case.
pub fn parse_hex_digest(input: &str) -> Result<Vec<u8>, ParseError> {
    let trimmed = input.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    Ok(hex::decode(digits)?)
}

/// Reads the `RInChI=` line and the optional `RAuxInfo=` line of a reaction file.
///
/// Other lines, such as RInChIKeys written alongside the identifier, are ignored.
pub fn parse_reaction_file(content: &str) -> Result<ReactionInput, ParseError> {
    let mut rinchi = None;
    let mut rauxinfo = None;

    for (index, line) in content.lines().enumerate() {
        let line = line.trim();
        let slot = if line.starts_with(RINCHI_LINE_PREFIX) {
            (&mut rinchi, RINCHI_LINE_PREFIX)
        } else if line.starts_with(RAUXINFO_LINE_PREFIX) {
            (&mut rauxinfo, RAUXINFO_LINE_PREFIX)
        } else {
            continue;
        };

        match slot {
            (Some(_), prefix) => {
                return Err(ParseError::DuplicateLine {
                    prefix,
                    line: index + 1,
                });
            }
            (target, _) => *target = Some(line.to_string()),
        }
    }

    Ok(ReactionInput {
        rinchi: rinchi.ok_or(ParseError::MissingRinchi)?,
        rauxinfo,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_digest_decodes_pairs_of_digits() {
        assert_eq!(parse_hex_digest("7031").unwrap(), vec![112, 49]);
        assert_eq!(parse_hex_digest("0x00FFcb").unwrap(), vec![0, 255, 203]);
        assert_eq!(parse_hex_digest("  0a0b \n").unwrap(), vec![10, 11]);
        assert!(parse_hex_digest("").unwrap().is_empty());
    }

    #[test]
    fn hex_digest_rejects_malformed_input() {
        assert_eq!(
            parse_hex_digest("abc"),
            Err(ParseError::InvalidHex(hex::FromHexError::OddLength))
        );
        assert_eq!(
            parse_hex_digest("00zz"),
            Err(ParseError::InvalidHex(
                hex::FromHexError::InvalidHexCharacter { c: 'z', index: 2 }
            ))
        );
    }

    #[test]
    fn hex_digest_rejects_non_ascii_input() {
        assert!(matches!(
            parse_hex_digest("0é"),
            Err(ParseError::InvalidHex(_))
        ));
    }

    #[test]
    fn reaction_file_with_both_lines() {
        let content = "RInChI=1.00.1S/CH4<>CO2/d+\nRAuxInfo=1.00.1/0/N:1<>0/N:1\n";
        let input = parse_reaction_file(content).unwrap();
        assert_eq!(input.rinchi, "RInChI=1.00.1S/CH4<>CO2/d+");
        assert_eq!(
            input.rauxinfo.as_deref(),
            Some("RAuxInfo=1.00.1/0/N:1<>0/N:1")
        );
    }

    #[test]
    fn reaction_file_ignores_unrelated_lines_and_whitespace() {
        let content = "\n  RInChI=1.00.1S/CH4  \r\nLong-RInChIKey=SA-FUHFF-UHFFFADPSC-VAWYEMLNLVT\n";
        let input = parse_reaction_file(content).unwrap();
        assert_eq!(input.rinchi, "RInChI=1.00.1S/CH4");
        assert_eq!(input.rauxinfo, None);
    }

    #[test]
    fn reaction_file_requires_exactly_one_rinchi() {
        assert_eq!(
            parse_reaction_file("RAuxInfo=1.00.1/0/N:1"),
            Err(ParseError::MissingRinchi)
        );
        assert_eq!(
            parse_reaction_file("RInChI=1.00.1S/A\nRInChI=1.00.1S/B"),
            Err(ParseError::DuplicateLine {
                prefix: "RInChI=",
                line: 2
            })
        );
    }
}
