// src/noyau/calcul.rs
//
// Évaluation de l’arbre : ascendante, en profondeur, sans mémoïsation.
// - flottants IEEE-754 (f64)
// - appels résolus PAR NOM dans la table (rien d’autre n’est exécutable)
// - toute valeur intermédiaire infinie ou NaN => Overflow (pas de résultat partiel)

use super::erreurs::EvalError;
use super::expr::Expr;
use super::fonctions::{self, Arite};
use super::jetons::Op;

pub fn evaluer(expr: &Expr) -> Result<f64, EvalError> {
    let v = match expr {
        Expr::Lit(v) => *v,

        Expr::Appel { nom, argument } => {
            let recue = usize::from(argument.is_some());
            let f = fonctions::chercher(nom).ok_or(EvalError::ArityMismatch {
                fonction: *nom,
                attendue: 0,
                recue,
            })?;

            match (f.arite, argument) {
                (Arite::Constante(c), None) => c,
                (Arite::Unaire(g), Some(x)) => g(evaluer(x)?)?,
                (arite, _) => {
                    return Err(EvalError::ArityMismatch {
                        fonction: f.nom,
                        attendue: arite.nombre(),
                        recue,
                    });
                }
            }
        }

        Expr::Binaire(op, a, b) => {
            let a = evaluer(a)?;
            let b = evaluer(b)?;
            appliquer(*op, a, b)?
        }
    };

    if !v.is_finite() {
        return Err(EvalError::Overflow);
    }
    Ok(v)
}

fn appliquer(op: Op, a: f64, b: f64) -> Result<f64, EvalError> {
    match op {
        Op::Plus => Ok(a + b),
        Op::Moins => Ok(a - b),
        Op::Fois => Ok(a * b),
        Op::Div => {
            if b == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            Ok(a / b)
        }
        Op::Mod => {
            if b == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            // modulo "plancher" : le reste a le signe du diviseur
            let r = a % b;
            if r != 0.0 && (r < 0.0) != (b < 0.0) {
                Ok(r + b)
            } else {
                Ok(r)
            }
        }
        Op::Puiss => {
            if a == 0.0 && b < 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            if a < 0.0 && b.fract() != 0.0 {
                return Err(EvalError::DomainError { fonction: "**" });
            }
            Ok(a.powf(b))
        }
    }
}
