use once_cell::sync::Lazy;
use regex::Regex;

// Removes newlines and surrounding whitespace, collapses runs of spaces
pub fn clean(text: &str) -> String {
    static REGEX_SPACES: Lazy<Regex> = Lazy::new(|| Regex::new(r" {2,}").unwrap());

    let text = text.replace('\n', "");
    REGEX_SPACES.replace_all(text.trim(), " ").into_owned()
}

// Header text as a node label
// "present tense" => "present", "Indicative mood" => "Indicative_mood"
pub fn clean_label(text: &str) -> String {
    let text = clean(text);
    if text.contains("tense") {
        // tense headers may carry trailing qualifiers
        text.split_whitespace().next().unwrap_or_default().to_owned()
    } else {
        text.split_whitespace().collect::<Vec<_>>().join("_")
    }
}
