//! src/config.rs
//!
//! Configuration explicite, passée à l’app à la construction.
//!
//! Contrats :
//! - Aucun état global : la config est une valeur.
//! - Changer de thème = produire une NOUVELLE config (l’ancienne reste intacte),
//!   pas de réécriture de fichier ni de redémarrage du processus.
//! - Fichier TOML optionnel ; tout champ absent prend la valeur par défaut.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Longueur max de la saisie (même borne que l’affichage).
pub const LONGUEUR_MAX_DEFAUT: usize = 15;

/// Thème de départ.
pub const THEME_DEFAUT: &str = "Dark";

#[derive(Debug, Error)]
pub enum ErreurConfig {
    #[error("lecture de {chemin}: {source}")]
    Lecture {
        chemin: String,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML invalide: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("thème inconnu: {0:?}")]
    ThemeInconnu(String),

    #[error("couleur invalide {valeur:?} (attendu #RRGGBB) dans le thème {theme:?}")]
    Couleur { theme: String, valeur: String },

    #[error("longueur_max doit être >= 1")]
    LongueurNulle,
}

/// Couleur #RRGGBB.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn depuis_hex(s: &str) -> Option<Rgb> {
        let hex = s.strip_prefix('#')?;
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let canal = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Rgb(canal(0)?, canal(2)?, canal(4)?))
    }
}

/// Thème tel qu’écrit dans le fichier (couleurs en texte).
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Theme {
    pub nom: String,
    pub fond: String,
    pub cadre: String,
    pub texte: String,
    pub touche_nombre: String,
    pub touche_operateur: String,
    pub touche_defaut: String,
    pub touche_effacer: String,
    #[serde(default)]
    pub sombre: bool,
}

/// Thème résolu (couleurs vérifiées).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub fond: Rgb,
    pub cadre: Rgb,
    pub texte: Rgb,
    pub touche_nombre: Rgb,
    pub touche_operateur: Rgb,
    pub touche_defaut: Rgb,
    pub touche_effacer: Rgb,
    pub sombre: bool,
}

/// Palette "Dark" déjà résolue, pour ne jamais rester sans couleurs.
pub const PALETTE_SECOURS: Palette = Palette {
    fond: Rgb(0x25, 0x27, 0x29),
    cadre: Rgb(0x25, 0x27, 0x29),
    texte: Rgb(0xFF, 0xFF, 0xFF),
    touche_nombre: Rgb(0x30, 0x33, 0x36),
    touche_operateur: Rgb(0xFF, 0x95, 0x00),
    touche_defaut: Rgb(0x49, 0x4B, 0x4E),
    touche_effacer: Rgb(0xD1, 0x48, 0x3A),
    sombre: true,
};

impl Theme {
    pub fn palette(&self) -> Result<Palette, ErreurConfig> {
        let c = |valeur: &str| {
            Rgb::depuis_hex(valeur).ok_or_else(|| ErreurConfig::Couleur {
                theme: self.nom.clone(),
                valeur: valeur.to_string(),
            })
        };
        Ok(Palette {
            fond: c(&self.fond)?,
            cadre: c(&self.cadre)?,
            texte: c(&self.texte)?,
            touche_nombre: c(&self.touche_nombre)?,
            touche_operateur: c(&self.touche_operateur)?,
            touche_defaut: c(&self.touche_defaut)?,
            touche_effacer: c(&self.touche_effacer)?,
            sombre: self.sombre,
        })
    }
}

fn themes_integres() -> Vec<Theme> {
    let theme = |nom: &str, couleurs: [&str; 7], sombre: bool| Theme {
        nom: nom.to_string(),
        fond: couleurs[0].to_string(),
        cadre: couleurs[1].to_string(),
        texte: couleurs[2].to_string(),
        touche_nombre: couleurs[3].to_string(),
        touche_operateur: couleurs[4].to_string(),
        touche_defaut: couleurs[5].to_string(),
        touche_effacer: couleurs[6].to_string(),
        sombre,
    };

    vec![
        theme(
            "Dark",
            ["#252729", "#252729", "#FFFFFF", "#303336", "#FF9500", "#494B4E", "#D1483A"],
            true,
        ),
        theme(
            "Light",
            ["#F2F2F2", "#F2F2F2", "#1C1C1C", "#FFFFFF", "#F7B860", "#D9D9D9", "#E57368"],
            false,
        ),
    ]
}

fn longueur_max_defaut() -> usize {
    LONGUEUR_MAX_DEFAUT
}

fn theme_defaut() -> String {
    THEME_DEFAUT.to_string()
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "longueur_max_defaut")]
    pub longueur_max: usize,

    #[serde(default = "theme_defaut")]
    pub theme: String,

    #[serde(default = "themes_integres")]
    pub themes: Vec<Theme>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            longueur_max: LONGUEUR_MAX_DEFAUT,
            theme: theme_defaut(),
            themes: themes_integres(),
        }
    }
}

impl Config {
    /// Analyse un texte TOML puis vérifie la cohérence (thème courant connu, couleurs valides).
    pub fn depuis_toml(texte: &str) -> Result<Config, ErreurConfig> {
        let config: Config = toml::from_str(texte)?;
        config.verifier()?;
        Ok(config)
    }

    /// Charge un fichier TOML.
    pub fn charger(chemin: &Path) -> Result<Config, ErreurConfig> {
        let texte = std::fs::read_to_string(chemin).map_err(|source| ErreurConfig::Lecture {
            chemin: chemin.display().to_string(),
            source,
        })?;
        Self::depuis_toml(&texte)
    }

    fn verifier(&self) -> Result<(), ErreurConfig> {
        if self.longueur_max == 0 {
            return Err(ErreurConfig::LongueurNulle);
        }
        for t in &self.themes {
            t.palette()?;
        }
        self.theme_courant().map(|_| ())
    }

    pub fn theme_courant(&self) -> Result<&Theme, ErreurConfig> {
        self.themes
            .iter()
            .find(|t| t.nom == self.theme)
            .ok_or_else(|| ErreurConfig::ThemeInconnu(self.theme.clone()))
    }

    pub fn palette(&self) -> Result<Palette, ErreurConfig> {
        self.theme_courant()?.palette()
    }

    pub fn noms_themes(&self) -> impl Iterator<Item = &str> {
        self.themes.iter().map(|t| t.nom.as_str())
    }

    /// Nouvelle config avec un autre thème courant. `self` n’est pas modifié.
    pub fn avec_theme(&self, nom: &str) -> Result<Config, ErreurConfig> {
        let nouvelle = Config {
            theme: nom.to_string(),
            ..self.clone()
        };
        nouvelle.palette()?;
        Ok(nouvelle)
    }
}
