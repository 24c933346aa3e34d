//! Text helpers for titles, excerpts and reading time

/// Default reading speed used for the reading-time estimate
pub const WORDS_PER_MINUTE: usize = 200;

/// Title-case a string: the first letter of every alphabetic run is
/// upper-cased and the rest of the run lower-cased.
///
/// ```ignore
/// title_case("hello rust2go") // -> "Hello Rust2Go"
/// ```
pub fn title_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut prev_is_alpha = false;

    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_is_alpha {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            prev_is_alpha = true;
        } else {
            result.push(c);
            prev_is_alpha = false;
        }
    }

    result
}

/// Derive a display title from a file stem like `my-first-post`
pub fn title_from_stem(stem: &str) -> String {
    title_case(&stem.replace('-', " "))
}

/// Keep the first `max` characters of `s`
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

pub fn word_count(s: &str) -> usize {
    s.split_whitespace().count()
}

/// Minutes to read `body`, rounded up, never less than one
pub fn reading_time(body: &str, words_per_minute: usize) -> usize {
    let words = word_count(body);
    words.div_ceil(words_per_minute.max(1)).max(1)
}
