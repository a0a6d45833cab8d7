//! Identifier normalization.
//!
//! Component names come from a language model and follow no convention:
//! `MainPage`, `main page`, `MAIN_PAGE` and `main-page` all name the same
//! component. Every path, selector and class name in a generated project is
//! derived from the name through the functions in this module, so the two
//! casing conventions always agree with each other.

/// Prefix of every component selector in the generated project.
pub const SELECTOR_PREFIX: &str = "app";

/// Convert an arbitrary identifier into a lowercase, hyphen-separated path segment.
///
/// An uppercase letter that follows a lowercase letter or a digit starts a
/// new word and gets a hyphen in front of it. Uppercase letters without a
/// lowercase form (`ℂ`, `ϒ`) never start a word, since they survive
/// lowercasing unchanged. Everything is lowercased, runs
/// of whitespace and underscores become a single hyphen and runs of hyphens
/// collapse into one. Leading and trailing hyphens are kept.
///
/// ```
/// use shotcraft_core::naming::to_path_segment;
///
/// assert_eq!(to_path_segment("TestComponent"), "test-component");
/// assert_eq!(to_path_segment("TEST_COMPONENT"), "test-component");
/// ```
#[must_use]
pub fn to_path_segment(name: &str) -> String {
    let mut split = String::with_capacity(name.len() + 8);
    let mut previous: Option<char> = None;
    for ch in name.chars() {
        if starts_word(ch) && previous.is_some_and(|p| p.is_lowercase() || p.is_numeric()) {
            split.push('-');
        }
        split.extend(ch.to_lowercase());
        previous = Some(ch);
    }

    let mut segment = String::with_capacity(split.len());
    let mut after_hyphen = false;
    for ch in split.chars() {
        let ch = if ch.is_whitespace() || ch == '_' { '-' } else { ch };
        if ch == '-' {
            if after_hyphen {
                continue;
            }
            after_hyphen = true;
        } else {
            after_hyphen = false;
        }
        segment.push(ch);
    }
    segment
}

/// Convert an arbitrary identifier into a PascalCase type name.
///
/// The name is normalized with [`to_path_segment`] first, then each hyphen
/// separated part gets its first letter capitalized.
#[must_use]
pub fn to_type_name(name: &str) -> String {
    to_path_segment(name)
        .split('-')
        .filter(|part| !part.is_empty())
        .map(capitalize)
        .collect()
}

/// Runtime tag name of a component, e.g. `app-main-page`.
#[must_use]
pub fn to_selector(name: &str) -> String {
    format!("{SELECTOR_PREFIX}-{}", to_path_segment(name))
}

/// An uppercase letter that lowercasing actually changes.
fn starts_word(ch: char) -> bool {
    ch.is_uppercase() && !ch.to_lowercase().eq(std::iter::once(ch))
}

fn capitalize(part: &str) -> String {
    let mut chars = part.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
