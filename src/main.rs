// src/main.rs
//
// Calculatrice Malia — point d’entrée NATIF + WEB (WASM)
// ------------------------------------------------------
// - NATIF (Linux/Windows/macOS) : options CLI, journal, config TOML, eframe::run_native
// - WEB  (wasm32)              : eframe::WebRunner + WebOptions + <canvas>, config par défaut
//
// Côté WEB (WASM) : index.html doit contenir un canvas :
//   <canvas id="the_canvas_id"></canvas>

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use eframe::egui;

mod app;
mod config;
mod noyau;

use app::AppCalc;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Calculatrice Malia";

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
mod natif {
    use std::path::PathBuf;

    use clap::Parser;
    use tracing::{info, warn};
    use tracing_subscriber::EnvFilter;

    use crate::config::Config;

    #[derive(Debug, Parser)]
    #[command(name = "calculatrice_malia", version, about = "Calculatrice de bureau")]
    pub struct Args {
        /// Fichier de configuration TOML (longueur_max, theme, themes)
        #[arg(long, value_name = "FICHIER")]
        pub config: Option<PathBuf>,

        /// Thème de départ (remplace celui du fichier)
        #[arg(long, value_name = "NOM")]
        pub theme: Option<String>,
    }

    /// RUST_LOG, puis CALC_LOG, sinon "info".
    pub fn installer_journal() {
        let filtre = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_from_env("CALC_LOG"))
            .unwrap_or_else(|_| EnvFilter::new("info"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filtre)
            .with_target(false)
            .try_init();
    }

    /// Une config illisible ne bloque pas le lancement : défauts + avertissement.
    pub fn charger_config(args: &Args) -> Config {
        let base = match &args.config {
            Some(chemin) => match Config::charger(chemin) {
                Ok(c) => {
                    info!(chemin = %chemin.display(), "configuration chargée");
                    c
                }
                Err(e) => {
                    warn!(erreur = %e, "configuration ignorée, valeurs par défaut");
                    Config::default()
                }
            },
            None => Config::default(),
        };

        match &args.theme {
            Some(nom) => base.avec_theme(nom).unwrap_or_else(|e| {
                warn!(erreur = %e, "thème demandé ignoré");
                base.clone()
            }),
            None => base,
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use clap::Parser;

    let args = natif::Args::parse();
    natif::installer_journal();
    let config = natif::charger_config(&args);
    tracing::info!(theme = %config.theme, longueur_max = config.longueur_max, "démarrage");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([760.0, 520.0])
            .with_min_inner_size([680.0, 415.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(move |_cc| Ok(Box::new(AppCalc::new(config)))),
    )
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppCalc, TITRE_APP};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;
        d.set_title(TITRE_APP);

        let canvas: HtmlCanvasElement = d
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l’élément trouvé n’est pas un <canvas>"))?;

        eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|_cc| Ok(Box::<AppCalc>::default())),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
