//! Normalization of user input before it reaches the dictionary.
//!
//! The trie itself accepts any string. Front ends run words through
//! [`normalize_word`] so that queries and the word list agree on case and
//! alphabet.
use smol_str::SmolStr;
use unic_ucd_category::GeneralCategory;

/// Reasons a string is not accepted as a word.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum InputError {
    /// Nothing left after trimming
    #[error("Empty input")]
    Empty,

    /// Contains something other than letters
    #[error("{0:?} is not a word: only letters are allowed")]
    NotAlphabetic(SmolStr),
}

#[inline(always)]
fn lower_case(s: &str) -> SmolStr {
    s.chars().flat_map(char::to_lowercase).collect::<SmolStr>()
}

#[inline(always)]
fn is_letter(ch: char) -> bool {
    GeneralCategory::of(ch).is_letter()
}

/// Trims and lowercases `input`, rejecting anything that is not made of
/// letters only.
pub fn normalize_word(input: &str) -> Result<SmolStr, InputError> {
    let word = input.trim();

    if word.is_empty() {
        return Err(InputError::Empty);
    }

    if !word.chars().all(is_letter) {
        return Err(InputError::NotAlphabetic(word.into()));
    }

    Ok(lower_case(word))
}
