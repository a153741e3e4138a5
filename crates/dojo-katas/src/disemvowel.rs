//! Disemvowel: remove a, e, i, o, u in either case; everything else is
//! preserved exactly, including the casing of what remains.

pub fn disemvowel(text: &str) -> String {
    text.chars().filter(|ch| !is_vowel(*ch)).collect()
}

fn is_vowel(ch: char) -> bool {
    matches!(ch.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}
