//! Noyau — erreurs typées
//!
//! Une famille par étape du pipeline :
//! - LexError   : jeton inconnu ou mal formé (tokenize)
//! - ParseError : structure invalide (analyse)
//! - EvalError  : calcul impossible (eval)
//!
//! `ErreurCalcul` regroupe les trois pour `evaluate`. L’UI n’affiche jamais le détail
//! (sentinelle "Error"), mais le genre (`ErrorKind`) reste disponible pour les tests
//! et le journal.

use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("caractère inattendu: '{caractere}' (position {position})")]
    CaractereInattendu { caractere: char, position: usize },

    #[error("deux points décimaux dans un même nombre (position {position})")]
    DeuxPoints { position: usize },

    #[error("nombre invalide: {texte:?}")]
    NombreInvalide { texte: String },

    #[error("multiplication implicite interdite après un nombre (position {position})")]
    MultiplicationImplicite { position: usize },

    #[error("identifiant inconnu: {nom:?}")]
    IdentifiantInconnu { nom: String },

    #[error("entrée trop longue: {longueur} caractères")]
    EntreeTropLongue { longueur: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("entrée vide")]
    Vide,

    #[error("parenthèse non fermée")]
    ParentheseNonFermee,

    #[error("parenthèse fermante sans ouvrante")]
    ParentheseSansOuverture,

    #[error("opérande manquante")]
    OperandeManquante,

    #[error("jetons en trop après l’expression")]
    JetonsEnTrop,

    #[error("identifiant hors table: {0:?}")]
    IdentifiantInconnu(String),

    #[error("imbrication trop profonde")]
    TropProfond,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("division par zéro")]
    DivisionByZero,

    #[error("hors domaine: {fonction}")]
    DomainError { fonction: &'static str },

    #[error("dépassement (résultat infini ou NaN)")]
    Overflow,

    #[error("arité incorrecte pour {fonction}: attendue {attendue}, reçue {recue}")]
    ArityMismatch {
        fonction: &'static str,
        attendue: usize,
        recue: usize,
    },
}

/// Genre d’erreur, sans détail (ce que les tests vérifient).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    LexError,
    ParseError,
    DivisionByZero,
    DomainError,
    Overflow,
    ArityMismatch,
}

/// Erreur de bout en bout : on garde l’étape d’origine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurCalcul {
    #[error("jetons: {0}")]
    Lex(#[from] LexError),

    #[error("analyse: {0}")]
    Parse(#[from] ParseError),

    #[error("évaluation: {0}")]
    Eval(#[from] EvalError),
}

impl ErreurCalcul {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ErreurCalcul::Lex(_) => ErrorKind::LexError,
            ErreurCalcul::Parse(_) => ErrorKind::ParseError,
            ErreurCalcul::Eval(e) => match e {
                EvalError::DivisionByZero => ErrorKind::DivisionByZero,
                EvalError::DomainError { .. } => ErrorKind::DomainError,
                EvalError::Overflow => ErrorKind::Overflow,
                EvalError::ArityMismatch { .. } => ErrorKind::ArityMismatch,
            },
        }
    }

    /// Étape du pipeline qui a échoué.
    pub fn etape(&self) -> Etape {
        match self {
            ErreurCalcul::Lex(_) => Etape::Tokenizing,
            ErreurCalcul::Parse(_) => Etape::Parsing,
            ErreurCalcul::Eval(_) => Etape::Evaluating,
        }
    }
}

/// États du pipeline d’évaluation.
///
/// Idle → Tokenizing → Parsing → Evaluating → Formatting → Done ;
/// tout échec saute directement à `Failed`. Aucune reprise automatique.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Etape {
    Idle,
    Tokenizing,
    Parsing,
    Evaluating,
    Formatting,
    Done,
    Failed(ErrorKind),
}

impl fmt::Display for Etape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Etape::Idle => write!(f, "repos"),
            Etape::Tokenizing => write!(f, "jetons"),
            Etape::Parsing => write!(f, "analyse"),
            Etape::Evaluating => write!(f, "évaluation"),
            Etape::Formatting => write!(f, "affichage"),
            Etape::Done => write!(f, "terminé"),
            Etape::Failed(kind) => write!(f, "échec ({kind:?})"),
        }
    }
}
