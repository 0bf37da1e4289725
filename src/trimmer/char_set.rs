/// Removes leading characters contained in `set`, one at a time.
pub fn trim_start_chars<'a>(text: &'a str, set: &[char]) -> &'a str {
    text.trim_start_matches(set)
}

pub fn trim_end_chars<'a>(text: &'a str, set: &[char]) -> &'a str {
    text.trim_end_matches(set)
}

pub fn trim_chars<'a>(text: &'a str, set: &[char]) -> &'a str {
    text.trim_matches(set)
}
