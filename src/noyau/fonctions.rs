// src/noyau/fonctions.rs
//
// Table des fonctions : liste blanche FIGÉE.
// - arité 0 : constantes (pi, e, tau)
// - arité 1 : fonctions unaires, avec contrôle de domaine
//
// Tout identifiant absent d’ici est refusé (jetons ET analyse), jamais exécuté.
// La table est `static` : aucun état mutable partagé.

use std::f64::consts::{E, PI, TAU};

use super::erreurs::EvalError;
use super::speciales;

pub type Unaire = fn(f64) -> Result<f64, EvalError>;

#[derive(Clone, Copy)]
pub enum Arite {
    Constante(f64),
    Unaire(Unaire),
}

impl Arite {
    pub fn nombre(&self) -> usize {
        match self {
            Arite::Constante(_) => 0,
            Arite::Unaire(_) => 1,
        }
    }
}

#[derive(Clone, Copy)]
pub struct Fonction {
    pub nom: &'static str,
    pub arite: Arite,
}

impl std::fmt::Debug for Fonction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.nom, self.arite.nombre())
    }
}

fn hors_domaine(fonction: &'static str) -> EvalError {
    EvalError::DomainError { fonction }
}

fn est_entier(x: f64) -> bool {
    x.is_finite() && x == x.trunc()
}

pub static TABLE: &[Fonction] = &[
    // --- constantes ---
    Fonction { nom: "pi", arite: Arite::Constante(PI) },
    Fonction { nom: "e", arite: Arite::Constante(E) },
    Fonction { nom: "tau", arite: Arite::Constante(TAU) },
    // --- trigonométrie ---
    Fonction { nom: "sin", arite: Arite::Unaire(|x| Ok(x.sin())) },
    Fonction { nom: "cos", arite: Arite::Unaire(|x| Ok(x.cos())) },
    Fonction { nom: "tan", arite: Arite::Unaire(|x| Ok(x.tan())) },
    Fonction {
        nom: "asin",
        arite: Arite::Unaire(|x| {
            if !(-1.0..=1.0).contains(&x) {
                return Err(hors_domaine("asin"));
            }
            Ok(x.asin())
        }),
    },
    Fonction {
        nom: "acos",
        arite: Arite::Unaire(|x| {
            if !(-1.0..=1.0).contains(&x) {
                return Err(hors_domaine("acos"));
            }
            Ok(x.acos())
        }),
    },
    Fonction { nom: "atan", arite: Arite::Unaire(|x| Ok(x.atan())) },
    // --- hyperboliques ---
    Fonction { nom: "sinh", arite: Arite::Unaire(|x| Ok(x.sinh())) },
    Fonction { nom: "cosh", arite: Arite::Unaire(|x| Ok(x.cosh())) },
    Fonction { nom: "tanh", arite: Arite::Unaire(|x| Ok(x.tanh())) },
    Fonction { nom: "asinh", arite: Arite::Unaire(|x| Ok(x.asinh())) },
    Fonction {
        nom: "acosh",
        arite: Arite::Unaire(|x| {
            if x < 1.0 {
                return Err(hors_domaine("acosh"));
            }
            Ok(x.acosh())
        }),
    },
    Fonction {
        nom: "atanh",
        arite: Arite::Unaire(|x| {
            if x.abs() >= 1.0 {
                return Err(hors_domaine("atanh"));
            }
            Ok(x.atanh())
        }),
    },
    // --- racines, exponentielles, logarithmes ---
    Fonction {
        nom: "sqrt",
        arite: Arite::Unaire(|x| {
            if x < 0.0 {
                return Err(hors_domaine("sqrt"));
            }
            Ok(x.sqrt())
        }),
    },
    Fonction { nom: "exp", arite: Arite::Unaire(|x| Ok(x.exp())) },
    Fonction { nom: "expm1", arite: Arite::Unaire(|x| Ok(x.exp_m1())) },
    Fonction {
        nom: "log",
        arite: Arite::Unaire(|x| {
            if x <= 0.0 {
                return Err(hors_domaine("log"));
            }
            Ok(x.ln())
        }),
    },
    Fonction {
        nom: "log2",
        arite: Arite::Unaire(|x| {
            if x <= 0.0 {
                return Err(hors_domaine("log2"));
            }
            Ok(x.log2())
        }),
    },
    Fonction {
        nom: "log10",
        arite: Arite::Unaire(|x| {
            if x <= 0.0 {
                return Err(hors_domaine("log10"));
            }
            Ok(x.log10())
        }),
    },
    Fonction {
        nom: "log1p",
        arite: Arite::Unaire(|x| {
            if x <= -1.0 {
                return Err(hors_domaine("log1p"));
            }
            Ok(x.ln_1p())
        }),
    },
    // --- divers ---
    Fonction { nom: "abs", arite: Arite::Unaire(|x| Ok(x.abs())) },
    Fonction { nom: "degrees", arite: Arite::Unaire(|x| Ok(x.to_degrees())) },
    Fonction { nom: "radians", arite: Arite::Unaire(|x| Ok(x.to_radians())) },
    Fonction {
        nom: "factorial",
        arite: Arite::Unaire(|x| {
            if x < 0.0 || !est_entier(x) {
                return Err(hors_domaine("factorial"));
            }
            if x > speciales::FACTORIELLE_MAX as f64 {
                return Err(EvalError::Overflow);
            }
            Ok(speciales::factorielle(x as u32))
        }),
    },
    Fonction {
        nom: "gamma",
        arite: Arite::Unaire(|x| {
            if x <= 0.0 && est_entier(x) {
                return Err(hors_domaine("gamma"));
            }
            Ok(speciales::gamma(x))
        }),
    },
    Fonction {
        nom: "lgamma",
        arite: Arite::Unaire(|x| {
            if x <= 0.0 && est_entier(x) {
                return Err(hors_domaine("lgamma"));
            }
            Ok(speciales::lgamma(x))
        }),
    },
    Fonction { nom: "erf", arite: Arite::Unaire(|x| Ok(speciales::erf(x))) },
    Fonction { nom: "erfc", arite: Arite::Unaire(|x| Ok(speciales::erfc(x))) },
];

/// Recherche exacte (nom déjà normalisé en minuscules).
pub fn chercher(nom: &str) -> Option<&'static Fonction> {
    TABLE.iter().find(|f| f.nom == nom)
}

/// Plus long nom de la table qui préfixe `texte` (recherche gloutonne).
pub fn plus_long_prefixe(texte: &str) -> Option<&'static Fonction> {
    TABLE
        .iter()
        .filter(|f| texte.starts_with(f.nom))
        .max_by_key(|f| f.nom.len())
}
