//! Primitive predicates over a candidate key.
//!
//! These are pure functions of the input string. Policies compose them
//! through [`Requirement`](super::Requirement) steps rather than calling
//! them ad hoc, so every check is deterministic and side-effect free.

/// Special characters required by the strict policy.
pub const SPECIAL_CHARS: &str = "@_#$%";

/// Secret word required by the secret-word policy.
pub const SECRET_WORD: &str = "calisto";

/// Minimum number of uppercase letters the secret word must show.
const SECRET_WORD_MIN_UPPERCASE: usize = 2;

/// Check that `key` has at least `minimum` characters.
///
/// Length is counted in Unicode scalar values, not bytes.
///
/// # Example
///
/// ```rust
/// use keyrules::core::checks::meets_minimum_length;
///
/// assert!(meets_minimum_length("abcdef", 6));
/// assert!(!meets_minimum_length("abcde", 6));
/// ```
pub fn meets_minimum_length(key: &str, minimum: usize) -> bool {
    key.chars().count() >= minimum
}

pub fn contains_uppercase(key: &str) -> bool {
    key.chars().any(char::is_uppercase)
}

pub fn contains_lowercase(key: &str) -> bool {
    key.chars().any(char::is_lowercase)
}

/// Check for at least one ASCII decimal digit.
pub fn contains_digit(key: &str) -> bool {
    key.chars().any(|c| c.is_ascii_digit())
}

/// Check that `key` contains at least one character from `set`.
pub fn contains_any_of(key: &str, set: &str) -> bool {
    key.chars().any(|c| set.contains(c))
}

/// Check the casing rule for the first occurrence of `word` in `key`.
///
/// The word is located case-insensitively. The matched window of the
/// original key is then inspected: it passes when it shows at least two
/// uppercase letters but is not entirely uppercase. A key without the
/// word fails.
///
/// # Example
///
/// ```rust
/// use keyrules::core::checks::contains_secret_word;
///
/// assert!(contains_secret_word("abc123CaLiStO", "calisto"));
/// assert!(!contains_secret_word("abc123CALISTO", "calisto"));
/// assert!(!contains_secret_word("abc123Calisto", "calisto"));
/// ```
pub fn contains_secret_word(key: &str, word: &str) -> bool {
    match find_case_insensitive(key, word) {
        Some(window) => {
            let uppercase = window.iter().filter(|c| c.is_uppercase()).count();
            uppercase >= SECRET_WORD_MIN_UPPERCASE && uppercase != window.len()
        }
        None => false,
    }
}

/// Locate the first window of `key` whose characters lowercase to `word`.
fn find_case_insensitive(key: &str, word: &str) -> Option<Vec<char>> {
    let needle: Vec<char> = word.chars().flat_map(char::to_lowercase).collect();
    let haystack: Vec<char> = key.chars().collect();

    if needle.is_empty() || haystack.len() < needle.len() {
        return None;
    }

    haystack
        .windows(needle.len())
        .find(|window| {
            window
                .iter()
                .zip(&needle)
                .all(|(c, expected)| c.to_lowercase().eq(std::iter::once(*expected)))
        })
        .map(<[char]>::to_vec)
}
