use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::inflection_table::{
    error::{InflectionError, Result},
    paradigm::ParadigmMeta,
};

// "Inflection of antaa (Kotus type 53/muistaa, t-d gradation)"
pub fn extract_headline(headline_text: &str) -> Result<ParadigmMeta> {
    static REGEX_HEADLINE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"^\s*Inflection of (\w+) \(Kotus type (\d\d?)/(\w+), (.*) gradation\)\s*$")
            .unwrap()
    });

    let captures = REGEX_HEADLINE
        .captures(headline_text)
        .ok_or_else(|| InflectionError::StructuralMismatch(headline_text.to_owned()))?;

    let meta = ParadigmMeta {
        word: captures[1].to_owned(),
        paradigm_class: captures[2].to_owned(),
        paradigm_exemplar: captures[3].to_owned(),
        gradation: captures[4].to_owned(),
    };
    debug!(?meta, "headline");

    Ok(meta)
}
