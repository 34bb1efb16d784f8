use scrub_config::{SynthesisConfig, TelephoneSubstitution};
use scrub_core::Category;

use crate::iban;
use crate::names::{EMAIL_DOMAINS, FIRST_NAMES, LAST_NAMES, ascii_fold};
use crate::random::RandomSource;

/// The substring registered for replacement and its synthetic counterpart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub original: String,
    pub replacement: String,
}

impl Replacement {
    fn new(original: impl Into<String>, replacement: impl Into<String>) -> Option<Self> {
        let original = original.into();
        if original.is_empty() {
            return None;
        }
        Some(Self {
            original,
            replacement: replacement.into(),
        })
    }
}

/// Generates structurally similar, unrelated values for one document.
///
/// Create one factory per document: the synthetic BIC is drawn once and
/// shared by every BIC candidate the factory sees.
pub struct SyntheticValueFactory<R> {
    rng: R,
    telephone: TelephoneSubstitution,
    document_bic: Option<String>,
}

impl<R: RandomSource> SyntheticValueFactory<R> {
    pub fn new(config: &SynthesisConfig, rng: R) -> Self {
        Self {
            rng,
            telephone: config.telephone_substitution,
            document_bic: None,
        }
    }

    /// Registered substring and replacement for a candidate of `category`.
    ///
    /// Returns None when nothing of the candidate would be registered.
    pub fn replacement(&mut self, category: Category, raw: &str) -> Option<Replacement> {
        match category {
            Category::Name => Replacement::new(raw, self.name(raw)),
            Category::Email => {
                let (local, _) = raw.split_once('@')?;
                let fake = self.email();
                let (fake_local, _) = fake.split_once('@')?;
                Replacement::new(local, fake_local)
            }
            Category::Iban => {
                let fake = self.iban(raw);
                Replacement::new(skip_chars(raw, 2), skip_chars(&fake, 2))
            }
            Category::Bic => Replacement::new(raw, self.bic()),
            Category::Telephone => {
                let fake = self.telephone(raw);
                match self.telephone {
                    TelephoneSubstitution::Full => Replacement::new(raw, fake),
                    TelephoneSubstitution::SkipPrefix { offset } => {
                        Replacement::new(skip_chars(raw, offset), skip_chars(&fake, offset))
                    }
                }
            }
            Category::Numeric => Replacement::new(raw, self.numeric(raw)),
        }
    }

    /// Fake name with the original's word count and trailing non-alphabetic run.
    pub fn name(&mut self, original: &str) -> String {
        let body = original.trim_end_matches(|c: char| !c.is_alphabetic());
        let suffix = &original[body.len()..];
        let words = body
            .split_whitespace()
            .filter(|w| w.chars().any(char::is_alphabetic))
            .count()
            .max(1);

        let mut name = self.rng.choose(FIRST_NAMES).to_string();
        for _ in 1..words {
            name.push(' ');
            name.push_str(self.rng.choose(LAST_NAMES));
        }
        name.push_str(suffix);
        name
    }

    /// Every digit outside the kept prefix is redrawn; everything else is copied.
    pub fn telephone(&mut self, original: &str) -> String {
        let keep = match self.telephone {
            TelephoneSubstitution::Full => 0,
            TelephoneSubstitution::SkipPrefix { offset } => offset,
        };
        original
            .chars()
            .enumerate()
            .map(|(i, c)| {
                if i >= keep && c.is_ascii_digit() {
                    self.rng.digit()
                } else {
                    c
                }
            })
            .collect()
    }

    /// Random integer with as many decimal digits as the original.
    pub fn numeric(&mut self, original: &str) -> String {
        let digits = original.chars().filter(char::is_ascii_digit).count();
        if digits == 0 {
            return String::new();
        }
        let mut value = String::with_capacity(digits);
        value.push(self.rng.nonzero_digit());
        for _ in 1..digits {
            value.push(self.rng.digit());
        }
        value
    }

    pub fn email(&mut self) -> String {
        let first = ascii_fold(self.rng.choose(FIRST_NAMES));
        let last = ascii_fold(self.rng.choose(LAST_NAMES));
        let mut local = format!("{}.{}", first, last);
        if self.rng.below(3) == 0 {
            local.push(self.rng.digit());
            local.push(self.rng.digit());
        }
        format!("{}@{}", local, self.rng.choose(EMAIL_DOMAINS))
    }

    /// Fake IBAN with the original's country code, layout and valid check digits.
    pub fn iban(&mut self, original: &str) -> String {
        let chars: Vec<char> = original.chars().collect();
        if chars.len() < 5 {
            return self.scramble_digits(original);
        }
        let country: String = chars[..2].iter().collect();
        let bban: String = chars[4..]
            .iter()
            .map(|&c| if c.is_ascii_digit() { self.rng.digit() } else { c })
            .collect();

        match iban::check_digits(&country, &bban) {
            Some(check) => format!("{}{}{}", country, check, bban),
            None => {
                let check: String = (0..2).map(|_| self.rng.digit()).collect();
                format!("{}{}{}", country, check, bban)
            }
        }
    }

    /// Document-wide BIC: eight uppercase letters, drawn on first use.
    pub fn bic(&mut self) -> String {
        if let Some(bic) = &self.document_bic {
            return bic.clone();
        }
        let bic: String = (0..8).map(|_| self.rng.uppercase()).collect();
        self.document_bic = Some(bic.clone());
        bic
    }

    fn scramble_digits(&mut self, original: &str) -> String {
        original
            .chars()
            .map(|c| if c.is_ascii_digit() { self.rng.digit() } else { c })
            .collect()
    }
}

/// `s` without its first `n` characters.
fn skip_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((i, _)) => &s[i..],
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SequenceSource;
    use proptest::prelude::*;

    fn full() -> SynthesisConfig {
        SynthesisConfig {
            telephone_substitution: TelephoneSubstitution::Full,
        }
    }

    fn seeded(config: &SynthesisConfig, seed: u64) -> SyntheticValueFactory<fastrand::Rng> {
        SyntheticValueFactory::new(config, fastrand::Rng::with_seed(seed))
    }

    #[test]
    fn test_skip_chars() {
        assert_eq!(skip_chars("FR76 3000", 2), "76 3000");
        assert_eq!(skip_chars("é1234", 1), "1234");
        assert_eq!(skip_chars("abc", 5), "");
    }

    #[test]
    fn test_exact_output_with_scripted_source() {
        let mut factory = SyntheticValueFactory::new(&full(), SequenceSource::new(vec![3, 1, 4]));
        assert_eq!(factory.telephone("06 12"), "31 43");
        assert_eq!(factory.numeric("2024 5"), "24314");
    }

    #[test]
    fn test_name_keeps_word_count_and_suffix() {
        let mut factory = SyntheticValueFactory::new(&full(), SequenceSource::constant(0));
        assert_eq!(factory.name("Jean Dupont"), "Adèle Arnaud");
        assert_eq!(factory.name("Dupont,"), "Adèle,");
        assert_eq!(factory.name("Marie Anne Curie :"), "Adèle Arnaud Arnaud :");
    }

    #[test]
    fn test_email_registers_local_part_only() {
        let mut factory = seeded(&full(), 1);
        let r = factory
            .replacement(Category::Email, "jean.dupont@mail.com")
            .unwrap();
        assert_eq!(r.original, "jean.dupont");
        assert!(!r.replacement.contains('@'));
        assert!(r.replacement.contains('.'));
    }

    #[test]
    fn test_email_shape() {
        let mut factory = seeded(&full(), 9);
        for _ in 0..50 {
            let email = factory.email();
            let (local, domain) = email.split_once('@').unwrap();
            assert!(local.is_ascii() && !local.is_empty());
            assert!(EMAIL_DOMAINS.contains(&domain));
        }
    }

    #[test]
    fn test_iban_keeps_country_and_validates() {
        let original = "FR76 3000 6000 0112 3456 7890 189";
        let mut factory = seeded(&full(), 3);
        for _ in 0..20 {
            let fake = factory.iban(original);
            assert!(fake.starts_with("FR"));
            assert_eq!(fake.chars().count(), original.chars().count());
            assert!(iban::is_valid(&fake));
        }
    }

    #[test]
    fn test_iban_replacement_skips_country_code() {
        let mut factory = seeded(&full(), 3);
        let r = factory
            .replacement(Category::Iban, "FR76 3000 6000 0112 3456 7890 189")
            .unwrap();
        assert_eq!(r.original, "76 3000 6000 0112 3456 7890 189");
        assert_eq!(r.replacement.len(), r.original.len());
    }

    #[test]
    fn test_bic_shared_across_document() {
        let mut factory = seeded(&full(), 5);
        let a = factory.replacement(Category::Bic, "AGRIFRPP").unwrap();
        let b = factory.replacement(Category::Bic, "BNPAFRPP").unwrap();
        assert_eq!(a.replacement, b.replacement);
        assert_eq!(a.replacement.len(), 8);
        assert!(a.replacement.chars().all(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn test_new_factory_draws_new_bic() {
        let mut first = SyntheticValueFactory::new(&full(), SequenceSource::constant(0));
        let mut second = SyntheticValueFactory::new(&full(), SequenceSource::constant(1));
        assert_eq!(first.bic(), "AAAAAAAA");
        assert_eq!(second.bic(), "BBBBBBBB");
    }

    #[test]
    fn test_telephone_skip_prefix_policy() {
        let config = SynthesisConfig {
            telephone_substitution: TelephoneSubstitution::SkipPrefix { offset: 5 },
        };
        let mut factory = SyntheticValueFactory::new(&config, SequenceSource::constant(9));
        let r = factory
            .replacement(Category::Telephone, "06 12 34 56 78")
            .unwrap();
        assert_eq!(r.original, " 34 56 78");
        assert_eq!(r.replacement, " 99 99 99");
    }

    #[test]
    fn test_telephone_shorter_than_prefix_not_registered() {
        let config = SynthesisConfig {
            telephone_substitution: TelephoneSubstitution::SkipPrefix { offset: 20 },
        };
        let mut factory = seeded(&config, 1);
        assert_eq!(factory.replacement(Category::Telephone, "06 12 34 56 78"), None);
    }

    #[test]
    fn test_numeric_has_no_leading_zero() {
        let mut factory = SyntheticValueFactory::new(&full(), SequenceSource::constant(0));
        assert_eq!(factory.numeric("000123"), "100000");
    }

    proptest! {
        #[test]
        fn prop_telephone_preserves_shape(original in "[0-9 ()+.-]{1,24}", seed in any::<u64>()) {
            let mut factory = seeded(&full(), seed);
            let fake = factory.telephone(&original);
            prop_assert_eq!(fake.chars().count(), original.chars().count());
            for (a, b) in original.chars().zip(fake.chars()) {
                prop_assert_eq!(a.is_ascii_digit(), b.is_ascii_digit());
                if !a.is_ascii_digit() {
                    prop_assert_eq!(a, b);
                }
            }
        }

        #[test]
        fn prop_numeric_keeps_digit_count(digits in "[1-9][0-9 ]{0,22}", seed in any::<u64>()) {
            let mut factory = seeded(&full(), seed);
            let fake = factory.numeric(&digits);
            let n = digits.chars().filter(char::is_ascii_digit).count();
            prop_assert_eq!(fake.len(), n);
            prop_assert!(fake.chars().all(|c| c.is_ascii_digit()));
            prop_assert!(!fake.starts_with('0'));
        }

        #[test]
        fn prop_iban_prefix_preserved(
            country in "[A-Z]{2}",
            body in "[0-9]{2}( ?[0-9]{4}){4,7} ?[0-9]{1,4}",
            seed in any::<u64>(),
        ) {
            let original = format!("{}{}", country, body);
            let mut factory = seeded(&full(), seed);
            let fake = factory.iban(&original);
            prop_assert_eq!(&fake[..2], &original[..2]);
            prop_assert!(iban::is_valid(&fake));
        }
    }
}
