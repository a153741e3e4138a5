//! Word reverser: reverse every word longer than five characters,
//! keeping word order and spacing intact. The threshold is strictly
//! greater than five; a five-letter word is left alone.

/// Split on single spaces (so runs of spaces survive the round trip),
/// reverse the long words, rejoin.
pub fn spin_words(sentence: &str) -> String {
    sentence
        .split(' ')
        .map(|word| {
            if word.len() > 5 {
                word.chars().rev().collect()
            } else {
                word.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
