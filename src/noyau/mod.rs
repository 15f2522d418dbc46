//! Noyau d’évaluation sûr
//!
//! Organisation interne :
//! - erreurs.rs    : LexError / ParseError / EvalError + ErrorKind + états du pipeline
//! - fonctions.rs  : table FIGÉE des constantes et fonctions (liste blanche)
//! - speciales.rs  : gamma, lgamma, erf, erfc, factorielle
//! - jetons.rs     : tokenisation (ensemble de jetons fermé)
//! - expr.rs       : arbre d’expression
//! - analyse.rs    : descente récursive + montée de précédence
//! - calcul.rs     : évaluation de l’arbre (f64)
//! - format.rs     : affichage décimal / scientifique
//! - eval.rs       : pipeline complet
//!
//! Aucune exécution de code arbitraire : rien hors grammaire + table n’est accepté.

pub mod analyse;
pub mod calcul;
pub mod erreurs;
pub mod eval;
pub mod expr;
pub mod fonctions;
pub mod format;
pub mod jetons;
pub mod speciales;

#[cfg(test)]
mod tests_fuzz_safe;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use erreurs::{ErreurCalcul, ErrorKind};
pub use eval::{evaluate, evaluate_detaille, Demarche, SENTINELLE_ERREUR};
