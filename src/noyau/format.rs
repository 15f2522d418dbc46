// src/noyau/format.rs
//
// Affichage du résultat :
// - décimal "brut" (chiffres les plus courts qui relisent la même valeur, jamais d’exposant)
// - si le brut occupe toute la largeur d’affichage (15 caractères), notation
//   scientifique à 5 décimales : d.dddddE±dd
//
// Largeur et précision sont des constantes d’affichage, pas des valeurs calculées.

/// Largeur d’affichage (même borne que la saisie).
pub const LARGEUR_AFFICHAGE: usize = 15;

/// Décimales de la mantisse en notation scientifique.
pub const CHIFFRES_SCIENTIFIQUES: usize = 5;

/// Décimal brut. -0 est normalisé en 0.
pub fn decimal_brut(v: f64) -> String {
    let v = if v == 0.0 { 0.0 } else { v };
    format!("{v}")
}

/// Notation scientifique d.dddddE±dd (exposant signé, au moins deux chiffres).
pub fn scientifique(v: f64) -> String {
    // std donne "1.23457E14" / "3.00000E-1" : on normalise l’exposant
    let s = format!("{:.*E}", CHIFFRES_SCIENTIFIQUES, v);
    match s.split_once('E') {
        Some((mantisse, exposant)) => {
            let (signe, chiffres) = match exposant.strip_prefix('-') {
                Some(c) => ('-', c),
                None => ('+', exposant),
            };
            format!("{mantisse}E{signe}{chiffres:0>2}")
        }
        None => s,
    }
}

/// Texte affiché pour une valeur finie.
pub fn format_resultat(v: f64) -> String {
    let brut = decimal_brut(v);
    if brut.chars().count() >= LARGEUR_AFFICHAGE {
        scientifique(v)
    } else {
        brut
    }
}
