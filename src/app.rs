// src/app.rs
//
// Calculatrice Malia — module App (racine)
// ----------------------------------------
// Rôle:
// - Déclarer les sous-modules (clavier, saisie, etat, vue)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)

pub mod clavier;
pub mod etat;
pub mod saisie;
pub mod vue;

pub use etat::AppCalc;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.appliquer_visuels(ctx);
        self.lire_clavier(ctx);
        self.ui_menu(ctx);

        let fond = self.palette.fond;
        egui::CentralPanel::default()
            .frame(
                egui::Frame::central_panel(&ctx.style())
                    .fill(egui::Color32::from_rgb(fond.0, fond.1, fond.2)),
            )
            .show(ctx, |ui| {
                self.ui(ui);
            });
    }
}
