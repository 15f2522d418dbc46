//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> analyse (arbre) -> calcul (f64) -> affichage
//!
//! Chaque étape échoue vite et rend une erreur typée ; `evaluate` ne panique jamais
//! et ne retourne jamais de résultat partiel.

use tracing::{debug, trace};

use super::analyse::parse;
use super::calcul::evaluer;
use super::erreurs::{ErreurCalcul, Etape};
use super::format::format_resultat;
use super::jetons::{format_tokens, tokenize};

/// Texte affiché par l’UI pour TOUTE erreur (le genre reste interne).
pub const SENTINELLE_ERREUR: &str = "Error";

#[derive(Default, Clone, Debug, PartialEq)]
pub struct Demarche {
    pub jetons: String,
    pub arbre: String,
}

/// API publique : évalue une expression et retourne le texte à afficher.
pub fn evaluate(expression: &str) -> Result<String, ErreurCalcul> {
    evaluate_detaille(expression).map(|(affichage, _d)| affichage)
}

/// Comme `evaluate`, avec la démarche (jetons + arbre parenthésé) pour le panneau UI.
pub fn evaluate_detaille(expression: &str) -> Result<(String, Demarche), ErreurCalcul> {
    let resultat = pipeline(expression);

    if let Err(e) = &resultat {
        debug!(
            expression,
            etape = %e.etape(),
            etat = %Etape::Failed(e.kind()),
            erreur = %e,
            "évaluation refusée"
        );
    }

    resultat
}

fn pipeline(expression: &str) -> Result<(String, Demarche), ErreurCalcul> {
    let mut etape = Etape::Idle;
    trace!(%etape, expression);

    // 1) Jetons
    etape = Etape::Tokenizing;
    trace!(%etape);
    let jetons = tokenize(expression)?;
    let jetons_txt = format_tokens(&jetons);

    // 2) Arbre
    etape = Etape::Parsing;
    trace!(%etape, jetons = %jetons_txt);
    let arbre = parse(&jetons)?;

    // 3) Calcul
    etape = Etape::Evaluating;
    trace!(%etape, arbre = %arbre, profondeur = arbre.profondeur());
    let valeur = evaluer(&arbre)?;

    // 4) Affichage
    etape = Etape::Formatting;
    trace!(%etape, valeur);
    let affichage = format_resultat(valeur);

    etape = Etape::Done;
    debug!(%etape, expression, affichage = %affichage, "évaluation réussie");

    let d = Demarche {
        jetons: jetons_txt,
        arbre: arbre.to_string(),
    };
    Ok((affichage, d))
}
