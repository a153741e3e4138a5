//! Complementary DNA strand.
//!
//! Each base maps via the fixed pairing A<->T, G<->C. Lowercase bases
//! are recognized and complement to uppercase. Characters outside the
//! four bases pass through unchanged; the archive's solutions only ever
//! replaced recognized bases, and that behavior is kept.

/// Per-character match solution.
pub fn complement(dna: &str) -> String {
    dna.chars().map(complement_base).collect()
}

/// Lookup-table solution over the four base pairs.
pub fn complement_pairs(dna: &str) -> String {
    const PAIRS: [(char, char); 4] = [('A', 'T'), ('T', 'A'), ('G', 'C'), ('C', 'G')];
    dna.chars()
        .map(|base| {
            let upper = base.to_ascii_uppercase();
            PAIRS
                .iter()
                .find(|(from, _)| *from == upper)
                .map_or(base, |(_, to)| *to)
        })
        .collect()
}

fn complement_base(base: char) -> char {
    match base {
        'A' | 'a' => 'T',
        'T' | 't' => 'A',
        'G' | 'g' => 'C',
        'C' | 'c' => 'G',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complements_each_base() {
        assert_eq!(complement("ATTGC"), "TAACG");
        assert_eq!(complement("GTAT"), "CATA");
        assert_eq!(complement("AAAA"), "TTTT");
        assert_eq!(complement(""), "");
    }

    #[test]
    fn lowercase_bases_complement_to_uppercase() {
        assert_eq!(complement("atgc"), "TACG");
    }

    #[test]
    fn unrecognized_characters_pass_through() {
        assert_eq!(complement("AXT"), "TXA");
        assert_eq!(complement("A T"), "T A");
    }

    #[test]
    fn variants_agree() {
        for dna in ["ATTGC", "", "atgc", "AXT", "GGGGCCCC"] {
            assert_eq!(complement(dna), complement_pairs(dna), "dna {dna:?}");
        }
    }
}
