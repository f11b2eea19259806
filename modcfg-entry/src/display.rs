use regex::Regex;
use std::sync::OnceLock;

static WORD: OnceLock<Regex> = OnceLock::new();

fn word_pattern() -> &'static Regex {
    WORD.get_or_init(|| Regex::new("[A-Z][a-z]+").expect("word pattern is a valid regex"))
}

/// Derives default display text from an entry name by separating
/// capitalized words: `"MaxPlayers"` becomes `"Max Players"`.
///
/// A space is inserted after each capitalized word that is directly followed
/// by another uppercase letter. Acronyms and lowercase prefixes are left as is.
#[must_use]
pub fn default_display_name(name: &str) -> String {
    let mut spaced = String::with_capacity(name.len() + 4);
    let mut copied = 0;
    for word in word_pattern().find_iter(name) {
        spaced.push_str(&name[copied..word.end()]);
        copied = word.end();
        if name[copied..].starts_with(|c: char| c.is_ascii_uppercase()) {
            spaced.push(' ');
        }
    }
    spaced.push_str(&name[copied..]);
    spaced
}
