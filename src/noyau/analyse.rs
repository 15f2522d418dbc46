// src/noyau/analyse.rs
//
// Analyse syntaxique : descente récursive + montée de précédence.
//
//   expr    := term (('+' | '-') term)*
//   term    := factor (('*' | '/' | '%') factor)*
//   factor  := power ('**' power)*          (associatif à droite)
//   power   := '-' power | '(' expr ')' | nombre | IDENT power?
//
// Les trois premiers niveaux sont pilotés par Op::precedence / Op::associativite.
// IDENT : constante (arité 0, jamais suivie d’un argument) ou fonction unaire
// (arité 1, argument obligatoire).

use super::erreurs::ParseError;
use super::expr::Expr;
use super::fonctions::{self, Arite};
use super::jetons::{Associativite, Op, Tok};

/// Garde-fou : profondeur de l’ARBRE (pas seulement de la récursion d’analyse).
/// Une chaîne `1+1+…+1` est lue en boucle mais donne un arbre aussi profond que
/// long : c’est l’arbre que `evaluer`, `Display` et `Drop` parcourent récursivement.
pub const PROFONDEUR_MAX: usize = 256;

/// Nœud construit + profondeur de son arbre (même mesure que `Expr::profondeur`).
type Noeud = (Expr, usize);

/// Construit l’arbre à partir des jetons.
pub fn parse(tokens: &[Tok]) -> Result<Expr, ParseError> {
    if tokens.is_empty() {
        return Err(ParseError::Vide);
    }

    let mut p = Analyseur { tokens, pos: 0 };
    let (racine, _) = p.expression(1, 0)?;

    match p.regarder() {
        None => Ok(racine),
        Some(Tok::RPar) => Err(ParseError::ParentheseSansOuverture),
        Some(_) => Err(ParseError::JetonsEnTrop),
    }
}

fn borne(expr: Expr, profondeur: usize) -> Result<Noeud, ParseError> {
    if profondeur > PROFONDEUR_MAX {
        return Err(ParseError::TropProfond);
    }
    Ok((expr, profondeur))
}

struct Analyseur<'a> {
    tokens: &'a [Tok],
    pos: usize,
}

impl<'a> Analyseur<'a> {
    fn regarder(&self) -> Option<&'a Tok> {
        self.tokens.get(self.pos)
    }

    fn avancer(&mut self) -> Option<&'a Tok> {
        let t = self.tokens.get(self.pos);
        if t.is_some() {
            self.pos += 1;
        }
        t
    }

    /// Montée de précédence : consomme les opérateurs binaires de précédence >= prec_min.
    fn expression(&mut self, prec_min: u8, profondeur: usize) -> Result<Noeud, ParseError> {
        let (mut gauche, mut prof_gauche) = self.primaire(profondeur)?;

        while let Some(Tok::Op(op)) = self.regarder() {
            let op = *op;
            let prec = op.precedence();
            if prec < prec_min {
                break;
            }
            self.avancer();

            let prec_droite = match op.associativite() {
                Associativite::Gauche => prec + 1,
                Associativite::Droite => prec,
            };
            let (droite, prof_droite) = self.expression(prec_droite, profondeur + 1)?;
            (gauche, prof_gauche) = borne(
                Expr::binaire(op, gauche, droite),
                1 + prof_gauche.max(prof_droite),
            )?;
        }

        Ok((gauche, prof_gauche))
    }

    /// power := '-' power | '(' expr ')' | nombre | IDENT power?
    fn primaire(&mut self, profondeur: usize) -> Result<Noeud, ParseError> {
        if profondeur > PROFONDEUR_MAX {
            return Err(ParseError::TropProfond);
        }

        match self.avancer() {
            Some(Tok::Num(v)) => Ok((Expr::Lit(*v), 1)),

            Some(Tok::Op(Op::Moins)) => {
                let (x, prof) = self.primaire(profondeur + 1)?;
                borne(Expr::oppose(x), 1 + prof)
            }

            Some(Tok::LPar) => {
                let x = self.expression(1, profondeur + 1)?;
                match self.avancer() {
                    Some(Tok::RPar) => Ok(x),
                    None => Err(ParseError::ParentheseNonFermee),
                    // `expression` ne s’arrête que sur ')' ou fin ; tout autre jeton ici = en trop
                    Some(_) => Err(ParseError::JetonsEnTrop),
                }
            }

            Some(Tok::Ident(nom)) => {
                let f = fonctions::chercher(nom)
                    .ok_or_else(|| ParseError::IdentifiantInconnu(nom.to_string()))?;
                match f.arite {
                    Arite::Constante(_) => Ok((Expr::constante(f.nom), 1)),
                    Arite::Unaire(_) => {
                        let (x, prof) = self.primaire(profondeur + 1)?;
                        borne(Expr::appel(f.nom, x), 1 + prof)
                    }
                }
            }

            // opérateur binaire, ')' ou fin de jetons là où on attend une valeur
            Some(Tok::Op(_)) | Some(Tok::RPar) | None => Err(ParseError::OperandeManquante),
        }
    }
}
