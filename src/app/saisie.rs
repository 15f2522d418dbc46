//! src/app/saisie.rs
//!
//! Assemblage de la saisie touche par touche.
//!
//! Le filtrage ici est un CONFORT (éviter les saisies absurdes) : la seule
//! barrière qui compte reste l’évaluation (`noyau::evaluate`), qui refuse tout
//! ce qui sort de la grammaire, quelle que soit la façon dont le texte a été produit.

use tracing::debug;

use super::clavier::Action;
use crate::noyau::fonctions::{Arite, TABLE};
use crate::noyau::{evaluate_detaille, Demarche, SENTINELLE_ERREUR};

const OPERATEURS: &[char] = &['+', '-', '*', '/', '%'];

#[derive(Clone, Debug, PartialEq)]
pub struct Saisie {
    texte: String,
    longueur_max: usize,
}

impl Saisie {
    pub fn new(longueur_max: usize) -> Self {
        Self {
            texte: "0".to_string(),
            longueur_max,
        }
    }

    pub fn texte(&self) -> &str {
        &self.texte
    }

    pub fn en_erreur(&self) -> bool {
        self.texte == SENTINELLE_ERREUR
    }

    /// Applique une touche. Rend la démarche quand `=` réussit.
    pub fn appliquer(&mut self, action: Action) -> Option<Demarche> {
        match action {
            Action::Chiffre(c) => {
                let mut buf = [0u8; 4];
                self.joindre_valeur(c.encode_utf8(&mut buf), false);
            }
            Action::Constante(nom) => self.joindre_valeur(nom, true),
            Action::Fonction(nom) => self.joindre_valeur(&format!("{nom}("), true),
            Action::Inserer(fragment) => self.joindre_valeur(fragment, true),
            Action::Point => self.inserer_point(),
            Action::Operateur(op) => self.inserer_operateur(op),
            Action::Ouvrir => self.ouvrir_parenthese(),
            Action::Fermer => self.fermer_parenthese(),
            Action::Effacer => self.effacer(),
            Action::Retour => self.retour_arriere(),
            Action::Egal => return self.evaluer(),
            Action::Aucune => {}
        }
        None
    }

    /* ------------------------ Règles d’insertion ------------------------ */

    fn dernier(&self) -> Option<char> {
        self.texte.chars().next_back()
    }

    fn tient(&self, ajout: usize) -> bool {
        self.texte.chars().count() + ajout <= self.longueur_max
    }

    fn finit_par_operateur(&self) -> bool {
        self.dernier().is_some_and(|c| OPERATEURS.contains(&c))
    }

    /// Chiffre, `)` ou nom de constante : une valeur vient de se terminer.
    fn finit_par_valeur(&self) -> bool {
        self.dernier()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == ')')
    }

    /// Résultat scientifique affiché (`1.23457E+14`) : l’exposant est clos,
    /// un chiffre ne doit pas le prolonger ni un point s’y coller.
    fn finit_par_exposant(&self) -> bool {
        let sans_chiffres = self.texte.trim_end_matches(|c: char| c.is_ascii_digit());
        if sans_chiffres.len() == self.texte.len() {
            return false;
        }
        let sans_signe = sans_chiffres
            .strip_suffix(['+', '-'])
            .unwrap_or(sans_chiffres);
        sans_signe.ends_with('E')
    }

    /// Valeurs : remplacent "0" et "Error" ; un `*` explicite est posé
    /// derrière une valeur terminée (pas de multiplication implicite).
    fn joindre_valeur(&mut self, morceau: &str, multiplier_si_besoin: bool) {
        if self.en_erreur() || self.texte == "0" {
            self.texte.clear();
        }

        // un chiffre prolonge le nombre en cours ; un nom ou un fragment démarre une valeur
        let etoile = if multiplier_si_besoin {
            self.finit_par_valeur()
        } else {
            self.finit_par_exposant()
                || self
                    .dernier()
                    .is_some_and(|c| c.is_ascii_alphabetic() || c == ')')
        };

        let ajout = morceau.chars().count() + usize::from(etoile);
        if !self.tient(ajout) {
            if self.texte.is_empty() {
                self.texte.push('0');
            }
            return;
        }
        if etoile {
            self.texte.push('*');
        }
        self.texte.push_str(morceau);
    }

    fn inserer_point(&mut self) {
        if self.en_erreur() || !self.tient(1) {
            return;
        }
        // seulement juste après un chiffre, et une fois par nombre
        let nombre: Vec<char> = self
            .texte
            .chars()
            .rev()
            .take_while(|c| c.is_ascii_digit() || *c == '.')
            .collect();
        let apres_chiffre = self.dernier().is_some_and(|c| c.is_ascii_digit());
        if apres_chiffre && !nombre.contains(&'.') && !self.finit_par_exposant() {
            self.texte.push('.');
        }
    }

    fn inserer_operateur(&mut self, op: &str) {
        if self.en_erreur() || !self.tient(op.chars().count()) {
            return;
        }
        if self.finit_par_operateur() || self.dernier() == Some('.') {
            return;
        }
        // après `(` seul le moins unaire a un sens
        if self.dernier() == Some('(') && op != "-" {
            return;
        }
        self.texte.push_str(op);
    }

    fn ouvrir_parenthese(&mut self) {
        if self.en_erreur() {
            return;
        }
        if self.texte == "0" {
            self.texte = "(".to_string();
            return;
        }
        let permis = self.finit_par_operateur() || self.dernier() == Some('(');
        if permis && self.tient(1) {
            self.texte.push('(');
        }
    }

    fn fermer_parenthese(&mut self) {
        if self.en_erreur() || !self.tient(1) {
            return;
        }
        let ouvertes = self.texte.chars().filter(|&c| c == '(').count();
        let fermees = self.texte.chars().filter(|&c| c == ')').count();
        if ouvertes > fermees && self.finit_par_valeur() {
            self.texte.push(')');
        }
    }

    /// `C`
    pub fn effacer(&mut self) {
        self.texte = "0".to_string();
    }

    /// `<` : retire le dernier symbole (un nom de fonction part en entier).
    pub fn retour_arriere(&mut self) {
        if self.en_erreur() {
            return;
        }

        let mot = TABLE
            .iter()
            .filter_map(|f| match f.arite {
                Arite::Unaire(_) => Some(format!("{}(", f.nom)),
                Arite::Constante(_) => Some(f.nom.to_string()),
            })
            .filter(|m| self.texte.ends_with(m.as_str()))
            .max_by_key(|m| m.len());

        match mot {
            Some(m) => self.texte.truncate(self.texte.len() - m.len()),
            None if self.texte.ends_with("**") => self.texte.truncate(self.texte.len() - 2),
            None => {
                self.texte.pop();
            }
        }

        if self.texte.is_empty() {
            self.texte.push('0');
        }
    }

    /// `=` : le résultat (ou "Error") remplace la saisie.
    pub fn evaluer(&mut self) -> Option<Demarche> {
        if self.en_erreur() {
            return None;
        }
        match evaluate_detaille(&self.texte) {
            Ok((affichage, demarche)) => {
                self.texte = affichage;
                Some(demarche)
            }
            Err(e) => {
                debug!(saisie = %self.texte, genre = ?e.kind(), "affichage de la sentinelle");
                self.texte = SENTINELLE_ERREUR.to_string();
                None
            }
        }
    }
}
