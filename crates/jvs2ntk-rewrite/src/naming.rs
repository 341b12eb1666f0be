//! Identifier casing helpers shared by the naming rules.

use crate::rule::static_regex;

/// Capitalize the first word character of every underscore-delimited segment.
///
/// Underscores and all other characters are kept as they are, so
/// `foo_bar` becomes `Foo_Bar` and `MAX_SIZE` lowered first becomes
/// `Max_Size`. A leading underscore counts as the first segment's initial
/// and stays an underscore.
pub fn to_pascal_case(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }
    static_regex!(r"(^|_)(\w)")
        .replace_all(input, |caps: &regex::Captures<'_>| {
            format!("{}{}", &caps[1], caps[2].to_uppercase())
        })
        .into_owned()
}

/// Uppercase only the first character, leaving the rest untouched.
pub fn capitalize_first(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
