// src/noyau/expr.rs
//
// Arbre d’expression (flottants IEEE-754).
// - Lit     : littéral
// - Appel   : constante (argument = None) ou fonction unaire de la table
// - Binaire : opérateur binaire
//
// L’arbre appartient à l’appel qui l’a construit ; il est jeté après évaluation.
// Le moins unaire est représenté par 0 - x (comme l’injection de 0 en RPN).

use std::fmt;

use super::jetons::Op;

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Lit(f64),
    Appel {
        nom: &'static str,
        argument: Option<Box<Expr>>,
    },
    Binaire(Op, Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn binaire(op: Op, a: Expr, b: Expr) -> Expr {
        Expr::Binaire(op, Box::new(a), Box::new(b))
    }

    pub fn oppose(x: Expr) -> Expr {
        Expr::binaire(Op::Moins, Expr::Lit(0.0), x)
    }

    pub fn constante(nom: &'static str) -> Expr {
        Expr::Appel {
            nom,
            argument: None,
        }
    }

    pub fn appel(nom: &'static str, x: Expr) -> Expr {
        Expr::Appel {
            nom,
            argument: Some(Box::new(x)),
        }
    }

    /// Profondeur de l’arbre (feuille = 1).
    pub fn profondeur(&self) -> usize {
        match self {
            Expr::Lit(_) => 1,
            Expr::Appel { argument, .. } => 1 + argument.as_ref().map_or(0, |a| a.profondeur()),
            Expr::Binaire(_, a, b) => 1 + a.profondeur().max(b.profondeur()),
        }
    }
}

/// Affichage entièrement parenthésé (démarche) : aucune ambiguïté de précédence.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Lit(v) => write!(f, "{v}"),
            Expr::Appel {
                nom,
                argument: None,
            } => write!(f, "{nom}"),
            Expr::Appel {
                nom,
                argument: Some(x),
            } => write!(f, "{nom}({x})"),
            Expr::Binaire(op, a, b) => write!(f, "({a} {} {b})", op.symbole()),
        }
    }
}
