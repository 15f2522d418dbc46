//! src/app/etat.rs
//!
//! État UI (sans widgets).
//!
//! Rôle : tenir la config, la saisie et la dernière démarche réussie.
//! Aucune évaluation directe ici : tout passe par `Saisie::appliquer`.

use tracing::{info, warn};

use super::clavier::Action;
use super::saisie::Saisie;
use crate::config::{Config, Palette, PALETTE_SECOURS};
use crate::noyau::Demarche;

#[derive(Clone, Debug)]
pub struct AppCalc {
    pub config: Config,
    pub palette: Palette,
    pub saisie: Saisie,

    /// Dernière évaluation réussie (vidée par une erreur).
    pub demarche: Option<Demarche>,

    /// Les visuels egui (clair/sombre) doivent être réappliqués.
    pub visuels_a_jour: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl AppCalc {
    pub fn new(config: Config) -> Self {
        let palette = config.palette().unwrap_or_else(|e| {
            warn!(erreur = %e, "palette de secours");
            PALETTE_SECOURS
        });
        Self {
            saisie: Saisie::new(config.longueur_max),
            config,
            palette,
            demarche: None,
            visuels_a_jour: false,
        }
    }

    pub fn appliquer(&mut self, action: Action) {
        match self.saisie.appliquer(action) {
            Some(d) => self.demarche = Some(d),
            None if self.saisie.en_erreur() => self.demarche = None,
            None => {}
        }
    }

    /// Bascule de thème : nouvelle config, la saisie en cours est conservée.
    pub fn changer_theme(&mut self, nom: &str) {
        match self.config.avec_theme(nom) {
            Ok(config) => match config.palette() {
                Ok(palette) => {
                    info!(theme = nom, "thème appliqué");
                    self.config = config;
                    self.palette = palette;
                    self.visuels_a_jour = false;
                }
                Err(e) => warn!(erreur = %e, "thème refusé"),
            },
            Err(e) => warn!(erreur = %e, "thème refusé"),
        }
    }
}
