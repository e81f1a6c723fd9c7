//! Profession labels for the national professional directory codes.
//!
//! The table concatenates three registries in order: social professions,
//! protected titles, then health professions. Some codes were assigned by
//! more than one registry; the last entry for a code wins. Conflicting
//! entries are kept as published upstream (see `"80"` and `"93"`).

/// Label returned for codes missing from the table.
pub const UNKNOWN_PROFESSION_LABEL: &str = "Profession inconnue";

/// `(code, label)` pairs in registry order, duplicates included.
pub const PROFESSION_LABELS: &[(&str, &str)] = &[
    // Professions du social
    ("41", "Assistant de service social"),
    ("42", "Éducateur de jeunes enfants"),
    ("80", "Conseiller en économie sociale et familiale"),
    ("93", "Éducateur spécialisé"),
    // Usagers de titres
    ("73", "Ostéopathe"),
    ("74", "Psychothérapeute"),
    ("75", "Chiropracteur"),
    ("93", "Psychologue"),
    // Professions de santé
    ("10", "Médecin"),
    ("21", "Pharmacien"),
    ("26", "Audioprothésiste"),
    ("28", "Opticien-Lunetier"),
    ("31", "Assistant dentaire"),
    ("32", "Physicien médical"),
    ("35", "Aide-soignant"),
    ("36", "Ambulancier"),
    ("37", "Auxiliaire de puériculture"),
    ("38", "Préparateur en pharmacie hospitalière"),
    ("39", "Préparateur en pharmacie"),
    ("40", "Chirurgien-Dentiste"),
    ("50", "Sage-Femme"),
    ("60", "Infirmier"),
    ("69", "Infirmier psychiatrique"),
    ("70", "Masseur-Kinésithérapeute"),
    ("80", "Pédicure-Podologue"),
    ("81", "Orthoprothésiste"),
    ("82", "Podo-Orthésiste"),
    ("83", "Orthopédiste-Orthésiste"),
    ("84", "Oculariste"),
    ("85", "Épithésiste"),
    ("86", "Technicien de laboratoire médical"),
    ("91", "Orthophoniste"),
    ("92", "Orthoptiste"),
    ("94", "Ergothérapeute"),
    ("95", "Diététicien"),
    ("96", "Psychomotricien"),
    ("98", "Manipulateur ERM"),
];

/// Returns the label for a profession code.
#[must_use]
pub fn profession_label(code: &str) -> &'static str {
    PROFESSION_LABELS
        .iter()
        .rev()
        .find(|(known, _)| *known == code)
        .map_or(UNKNOWN_PROFESSION_LABEL, |(_, label)| *label)
}
