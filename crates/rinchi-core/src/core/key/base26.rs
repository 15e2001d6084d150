use super::window::{
    BitWindow, CodeLength, DOUBLET_BITS_56_TO_64, TRIPLET_1, TRIPLET_2, TRIPLET_3, TRIPLET_4,
};

const RADIX: u32 = 26;
const TRIPLETS_PER_LEAD: u32 = RADIX * RADIX;

/// Number of doublets, `AA` through `ZZ`.
pub const DOUBLET_COUNT: u32 = 676;
/// Number of usable triplets, one per 14-bit value.
pub const TRIPLET_COUNT: u32 = 1 << 14;

// Of the 17576 letter triplets, those starting with 'E' and the run TAA..TTV are never
// emitted; the remaining 16384 are used in lexicographic order.
const E_BLOCK_START: u32 = 4 * TRIPLETS_PER_LEAD;
const T_BLOCK_START: u32 = 19 * TRIPLETS_PER_LEAD;
const T_BLOCK_SKIPPED: u32 = 516;

/// Writes `value` as `width` base-26 letters, most significant first, padded with 'A'.
fn to_base26(mut value: u32, width: usize) -> String {
    let mut letters = vec![b'A'; width];
    for slot in letters.iter_mut().rev() {
        *slot = b'A' + (value % RADIX) as u8;
        value /= RADIX;
    }
    debug_assert_eq!(value, 0, "value does not fit in {width} base-26 letters");
    letters.into_iter().map(char::from).collect()
}

/// Maps a triplet index onto its position among all 17576 letter triplets.
fn triplet_position(index: u32) -> u32 {
    let mut position = index;
    if position >= E_BLOCK_START {
        position += TRIPLETS_PER_LEAD;
    }
    if position >= T_BLOCK_START {
        position += T_BLOCK_SKIPPED;
    }
    position
}

/// Returns the doublet for `index`.
///
/// # Panics
///
/// Panics if `index` is not below [`DOUBLET_COUNT`].
pub fn base26_doublet(index: u32) -> String {
    assert!(
        index < DOUBLET_COUNT,
        "doublet index {index} out of range 0..{DOUBLET_COUNT}"
    );
    to_base26(index, CodeLength::Doublet.letters())
}

/// Returns the triplet for a 14-bit `index`.
///
/// # Panics
///
/// Panics if `index` is not below [`TRIPLET_COUNT`].
pub fn base26_triplet(index: u32) -> String {
    assert!(
        index < TRIPLET_COUNT,
        "triplet index {index} out of range 0..{TRIPLET_COUNT}"
    );
    to_base26(triplet_position(index), CodeLength::Triplet.letters())
}

/// Encodes the bits selected by `window` as a doublet or triplet.
///
/// # Panics
///
/// Panics if `bits` does not cover the window.
pub fn bits_to_base26(bits: &[u8], window: BitWindow) -> String {
    let value = window.extract(bits);
    match window.code() {
        CodeLength::Triplet => base26_triplet(value),
        CodeLength::Doublet => base26_doublet(value),
    }
}

/// Bits 0..14 of the digest.
pub fn base26_triplet_1(digest: &[u8]) -> String {
    bits_to_base26(digest, TRIPLET_1)
}

/// Bits 14..28 of the digest.
pub fn base26_triplet_2(digest: &[u8]) -> String {
    bits_to_base26(digest, TRIPLET_2)
}

/// Bits 28..42 of the digest.
pub fn base26_triplet_3(digest: &[u8]) -> String {
    bits_to_base26(digest, TRIPLET_3)
}

/// Bits 42..56 of the digest.
pub fn base26_triplet_4(digest: &[u8]) -> String {
    bits_to_base26(digest, TRIPLET_4)
}

/// The nine bits 56..=64 of the digest.
pub fn base26_doublet_for_bits_56_to_64(digest: &[u8]) -> String {
    bits_to_base26(digest, DOUBLET_BITS_56_TO_64)
}

/// The 14-letter block built from the first 65 bits of a digest: four triplets followed
/// by the doublet for bits 56 to 64.
///
/// # Panics
///
/// Panics if `digest` is shorter than nine bytes.
pub fn base26_major_block(digest: &[u8]) -> String {
    [TRIPLET_1, TRIPLET_2, TRIPLET_3, TRIPLET_4, DOUBLET_BITS_56_TO_64]
        .into_iter()
        .map(|window| bits_to_base26(digest, window))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn triplet_boundaries_match_known_values() {
        assert_eq!(base26_triplet(0), "AAA");
        assert_eq!(base26_triplet(676), "BAA");
        assert_eq!(base26_triplet(701), "BAZ");
        assert_eq!(base26_triplet(2703), "DZZ");
        assert_eq!(base26_triplet(2704), "FAA");
        assert_eq!(base26_triplet(16383), "ZZZ");
    }

    #[test]
    fn doublet_boundaries_match_known_values() {
        assert_eq!(base26_doublet(0), "AA");
        assert_eq!(base26_doublet(25), "AZ");
        assert_eq!(base26_doublet(26), "BA");
        assert_eq!(base26_doublet(256), "JW");
        assert_eq!(base26_doublet(675), "ZZ");
    }

    #[test]
    fn triplet_table_is_strictly_increasing_and_skips_e() {
        let triplets: Vec<String> = (0..TRIPLET_COUNT).map(base26_triplet).collect();
        assert!(triplets.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(triplets.iter().all(|t| !t.starts_with('E')));
        assert!(triplets.iter().all(|t| t.len() == 3));
        let unique: HashSet<_> = triplets.iter().collect();
        assert_eq!(unique.len(), TRIPLET_COUNT as usize);
    }

    #[test]
    fn triplet_table_skips_the_reserved_t_run() {
        let triplets: HashSet<String> = (0..TRIPLET_COUNT).map(base26_triplet).collect();
        assert!(!triplets.contains("TAA"));
        assert!(!triplets.contains("TTV"));
        assert!(triplets.contains("TTW"));
        assert!(triplets.contains("SZZ"));
        assert!(triplets.contains("UAA"));
    }

    #[test]
    fn doublet_table_covers_every_letter_pair() {
        let doublets: HashSet<String> = (0..DOUBLET_COUNT).map(base26_doublet).collect();
        assert_eq!(doublets.len(), 676);
    }

    #[test]
    fn triplet_1_matches_known_vectors() {
        assert_eq!(base26_triplet_1(&[0, 0]), "AAA");
        assert_eq!(base26_triplet_1(&[255, 255]), "ZZZ");
        assert_eq!(base26_triplet_1(&[128, 128]), "AEY");
        assert_eq!(base26_triplet_1(&[1, 2]), "ATT");
        assert_eq!(base26_triplet_1(&[64, 32]), "NFO");
        assert_eq!(base26_triplet_1(&[112, 49]), "UMQ");
    }

    #[test]
    fn triplet_2_matches_known_vectors() {
        assert_eq!(base26_triplet_2(&[0, 0, 0, 0]), "AAA");
        assert_eq!(base26_triplet_2(&[0, 192, 255, 15]), "ZZZ");
        assert_eq!(base26_triplet_2(&[0, 128, 170, 5]), "JPE");
        assert_eq!(base26_triplet_2(&[0, 64, 85, 9]), "PDP");
        assert_eq!(base26_triplet_2(&[0, 150, 200, 11]), "SWC");
    }

    #[test]
    fn triplet_3_matches_known_vectors() {
        assert_eq!(base26_triplet_3(&[0, 0, 0, 0, 0, 0]), "AAA");
        assert_eq!(base26_triplet_3(&[0, 0, 0, 240, 255, 3]), "ZZZ");
        assert_eq!(base26_triplet_3(&[0, 0, 0, 128, 127, 2]), "QDO");
        assert_eq!(base26_triplet_3(&[0, 0, 0, 27, 12, 0]), "AHL");
    }

    #[test]
    fn triplet_4_matches_known_vectors() {
        assert_eq!(base26_triplet_4(&[0, 0, 0, 0, 0, 0, 0]), "AAA");
        assert_eq!(base26_triplet_4(&[0, 0, 0, 0, 0, 252, 255]), "ZZZ");
        assert_eq!(base26_triplet_4(&[0, 0, 0, 0, 0, 127, 2]), "AGD");
        assert_eq!(base26_triplet_4(&[0, 0, 0, 0, 0, 1, 89]), "JLC");
    }

    #[test]
    fn doublet_for_bits_56_to_64_matches_known_vectors() {
        assert_eq!(base26_doublet_for_bits_56_to_64(&[0; 9]), "AA");
        assert_eq!(
            base26_doublet_for_bits_56_to_64(&[0, 0, 0, 0, 0, 0, 0, 255, 1]),
            "TR"
        );
        assert_eq!(
            base26_doublet_for_bits_56_to_64(&[0, 0, 0, 0, 0, 0, 0, 203, 0]),
            "HV"
        );
    }

    #[test]
    fn windows_only_see_their_own_bits() {
        // bytes 0..=1 carry noise outside triplet 2's window
        assert_eq!(base26_triplet_2(&[255, 63, 0, 240]), "AAA");
        let digest = [255, 255, 255, 255, 255, 255, 255, 0, 254];
        assert_eq!(base26_doublet_for_bits_56_to_64(&digest), "AA");
    }

    #[test]
    fn major_block_concatenates_windows_in_order() {
        assert_eq!(base26_major_block(&[0; 9]), "AAAAAAAAAAAAAA");
        assert_eq!(base26_major_block(&[255; 32]), "ZZZZZZZZZZZZTR");

        let digest = [112, 49, 0, 0, 0, 0, 0, 203, 0];
        let block = base26_major_block(&digest);
        assert_eq!(block.len(), 14);
        assert!(block.starts_with("UMQ"));
        assert!(block.ends_with("HV"));
    }

    #[test]
    #[should_panic(expected = "too short")]
    fn short_digest_is_a_contract_violation() {
        base26_triplet_3(&[0, 0, 0]);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn triplet_index_beyond_14_bits_panics() {
        base26_triplet(TRIPLET_COUNT);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn doublet_index_beyond_table_panics() {
        base26_doublet(DOUBLET_COUNT);
    }
}
