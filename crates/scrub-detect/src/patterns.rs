//! Compiled detection patterns

use lazy_static::lazy_static;
use regex::Regex;

/// Marker the BIC detector splits the text on.
pub const BIC_MARKER: &str = "BIC";

lazy_static! {
    /// `local@domain.tld`
    pub static ref EMAIL: Regex =
        Regex::new(r"\b[A-Za-z0-9.%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap();

    /// Optional country/area prefix followed by grouped digit runs.
    pub static ref DIGIT_GROUP: Regex = Regex::new(
        r"\b(?:\+?[0-9]{1,3}\s?)?(?:\(?[0-9]{1,4}\)?\s?)?[0-9]{1,4}(?:\s?[0-9]{1,4}){1,3}\b"
    )
    .unwrap();

    /// Country code, check digits, 4-7 groups of four digits, 1-4 trailing digits.
    pub static ref IBAN: Regex =
        Regex::new(r"[A-Z]{2}[0-9]{2}\s?(?:[0-9]{4}\s?){4,7}[0-9]{1,4}").unwrap();

    /// Bank code, country code, location code.
    pub static ref BIC: Regex =
        Regex::new(r"[A-Z]{4}\s?[A-Z0-9]{2}\s?[A-Z0-9]{2}").unwrap();

    /// Runs of capitalized words.
    pub static ref CAPITALIZED_WORDS: Regex =
        Regex::new(r"\b\p{Lu}\p{Ll}+(?:\s\p{Lu}\p{Ll}+)*\b").unwrap();
}
