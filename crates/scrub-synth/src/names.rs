//! Corpora for fake identities

pub const FIRST_NAMES: &[&str] = &[
    "Adèle", "Alice", "Antoine", "Arthur", "Bastien", "Camille", "Chloé", "Clément", "Damien",
    "Élise", "Emma", "Étienne", "Fabien", "Gabriel", "Hélène", "Hugo", "Inès", "Jules", "Julie",
    "Laure", "Léa", "Louis", "Lucas", "Manon", "Mathis", "Nathalie", "Noé", "Océane", "Pauline",
    "Quentin", "Raphaël", "Sarah", "Simon", "Sophie", "Théo", "Valentin", "Yasmine", "Zoé",
];

pub const LAST_NAMES: &[&str] = &[
    "Arnaud", "Barbier", "Bertrand", "Blanc", "Bonnet", "Chevalier", "Clément", "Dubois",
    "Durand", "Faure", "Fontaine", "Garnier", "Gauthier", "Girard", "Lambert", "Laurent",
    "Lefèvre", "Leroy", "Marchand", "Martin", "Mercier", "Moreau", "Morel", "Perrin", "Petit",
    "Renaud", "Robin", "Rousseau", "Roux", "Vincent",
];

/// Reserved example domains, never routable.
pub const EMAIL_DOMAINS: &[&str] = &["example.com", "example.fr", "example.org", "example.net"];

/// Lowercase ASCII form of a name, usable in an email local part.
pub fn ascii_fold(name: &str) -> String {
    name.chars()
        .flat_map(char::to_lowercase)
        .filter_map(|c| match c {
            'à' | 'â' | 'ä' => Some('a'),
            'é' | 'è' | 'ê' | 'ë' => Some('e'),
            'î' | 'ï' => Some('i'),
            'ô' | 'ö' => Some('o'),
            'ù' | 'û' | 'ü' => Some('u'),
            'ç' => Some('c'),
            c if c.is_ascii_alphanumeric() => Some(c),
            _ => None,
        })
        .collect()
}
