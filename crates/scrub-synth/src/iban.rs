//! ISO 13616 check digits

/// Mod-97 remainder of the alphanumeric string, letters counting 10..=35.
/// Whitespace is ignored. Returns None on any other character.
fn mod97(chars: impl Iterator<Item = char>) -> Option<u32> {
    let mut rem = 0u32;
    for c in chars.filter(|c| !c.is_whitespace()) {
        let value = c.to_digit(36)?;
        rem = if value < 10 {
            (rem * 10 + value) % 97
        } else {
            (rem * 100 + value) % 97
        };
    }
    Some(rem)
}

/// Two check digits for `country` + `bban`.
pub fn check_digits(country: &str, bban: &str) -> Option<String> {
    let rem = mod97(bban.chars().chain(country.chars()).chain("00".chars()))?;
    Some(format!("{:02}", 98 - rem))
}

#[cfg(test)]
pub(crate) fn is_valid(iban: &str) -> bool {
    let compact: Vec<char> = iban.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.len() < 5 {
        return false;
    }
    let (head, tail) = compact.split_at(4);
    mod97(tail.iter().chain(head).copied()) == Some(1)
}
