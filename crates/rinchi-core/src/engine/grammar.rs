//! Anchored recognition of a complete RInChI string.
//!
//! ```text
//! identifier   := HEADER layer2? ("<>" layer3?)? ("<>" layer4?)? directionTag? nostructTag?
//! directionTag := "/d" ("=" | "+" | "-")
//! nostructTag  := "/u" DIGITS ("-" DIGITS ("-" DIGITS)?)?
//! ```
//!
//! Layer text may contain anything except a line terminator or the start of a `/d` or `/u`
//! tag, and each layer is the shortest run that lets the rest of the string match. In
//! practice this means:
//!
//! - the layers end at the first `/d` or `/u` after the header, and everything from there
//!   on must be a well-formed tail;
//! - layer 2 ends at the first `<>`, layer 3 at the next one, and layer 4 takes whatever
//!   is left, including any further `<>`.

use super::error::DecompositionError;
use crate::core::constants::{
    DIRECTION_EQUILIBRIUM, DIRECTION_FORWARD, DIRECTION_REVERSE, DIRECTION_TAG, LAYER_DELIMITER,
    NOSTRUCT_DELIMITER, NOSTRUCT_TAG,
};
use crate::core::models::nostruct::NoStructCounts;

const MAX_NOSTRUCT_COUNTS: usize = 3;

/// Raw captures of a matched RInChI, borrowed from the input string.
///
/// `None` means the layer or tag did not appear at all; an empty layer that was
/// present (e.g. between two `<>`) is `Some("")`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RinchiLayers<'a> {
    pub layer2: Option<&'a str>,
    pub layer3: Option<&'a str>,
    pub layer4: Option<&'a str>,
    pub direction: Option<char>,
    pub no_struct: [Option<&'a str>; MAX_NOSTRUCT_COUNTS],
}

impl RinchiLayers<'_> {
    /// Parses the captured `/u` counts; absent counts are zero.
    pub fn no_struct_counts(&self) -> Result<NoStructCounts, DecompositionError> {
        let mut counts = [0u32; MAX_NOSTRUCT_COUNTS];
        for (count, raw) in counts.iter_mut().zip(self.no_struct) {
            if let Some(raw) = raw {
                *count = raw
                    .parse()
                    .map_err(|_| DecompositionError::InvalidNoStructCount {
                        value: raw.to_string(),
                    })?;
            }
        }
        Ok(NoStructCounts::new(counts[0], counts[1], counts[2]))
    }
}

/// Matches `rinchi` against the grammar anchored on `header`.
///
/// Fails with [`DecompositionError::GrammarMismatch`] unless the whole string matches.
pub fn match_rinchi<'a>(
    rinchi: &'a str,
    header: &str,
) -> Result<RinchiLayers<'a>, DecompositionError> {
    let mismatch = || DecompositionError::GrammarMismatch {
        rinchi: rinchi.to_string(),
    };

    let after_header = rinchi.strip_prefix(header).ok_or_else(mismatch)?;
    let (body, tail) = after_header.split_at(tail_start(after_header));
    if body.chars().any(is_line_terminator) {
        return Err(mismatch());
    }

    let (direction, no_struct) = match_tail(tail).ok_or_else(mismatch)?;

    let mut layers = body.splitn(3, LAYER_DELIMITER);
    Ok(RinchiLayers {
        layer2: layers.next(),
        layer3: layers.next(),
        layer4: layers.next(),
        direction,
        no_struct,
    })
}

fn tail_start(s: &str) -> usize {
    [DIRECTION_TAG, NOSTRUCT_TAG]
        .iter()
        .filter_map(|tag| s.find(tag))
        .min()
        .unwrap_or(s.len())
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{0085}' | '\u{2028}' | '\u{2029}')
}

type Tail<'a> = (Option<char>, [Option<&'a str>; MAX_NOSTRUCT_COUNTS]);

fn match_tail(tail: &str) -> Option<Tail<'_>> {
    let mut rest = tail;

    let mut direction = None;
    if let Some(after_tag) = rest.strip_prefix(DIRECTION_TAG) {
        let mut chars = after_tag.chars();
        let tag = chars.next().filter(|c| {
            matches!(
                *c,
                DIRECTION_EQUILIBRIUM | DIRECTION_FORWARD | DIRECTION_REVERSE
            )
        })?;
        direction = Some(tag);
        rest = chars.as_str();
    }

    let mut no_struct = [None; MAX_NOSTRUCT_COUNTS];
    if let Some(after_tag) = rest.strip_prefix(NOSTRUCT_TAG) {
        let groups: Vec<&str> = after_tag.split(NOSTRUCT_DELIMITER).collect();
        if groups.len() > MAX_NOSTRUCT_COUNTS || !groups.iter().all(|g| is_digits(g)) {
            return None;
        }
        for (slot, group) in no_struct.iter_mut().zip(groups) {
            *slot = Some(group);
        }
        rest = "";
    }

    rest.is_empty().then_some((direction, no_struct))
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
