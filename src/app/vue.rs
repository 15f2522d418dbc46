// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Barre de menu : Configuration > Thème, Quitter
// - Afficheur : la saisie, alignée à droite
// - Pavé 6×8 construit depuis clavier::CLAVIER
// - Démarche repliable (jetons + arbre de la dernière évaluation)
//
// Note : pas de TextEdit, la saisie ne passe QUE par les actions du pavé
// (clic ou clavier physique), pour que les règles de Saisie s’appliquent partout.

use eframe::egui;

use super::clavier::{action_clavier, Action, StyleTouche, CLAVIER, COLONNES};
use super::etat::AppCalc;
use crate::config::Rgb;

const ESPACE: f32 = 6.0;
const HAUTEUR_TOUCHE: f32 = 40.0;
const LARGEUR_TOUCHE_MIN: f32 = 56.0;
const TAILLE_AFFICHEUR: f32 = 34.0;

fn couleur(c: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(c.0, c.1, c.2)
}

impl AppCalc {
    /// Clair/sombre egui selon la palette (une fois par changement de thème).
    pub fn appliquer_visuels(&mut self, ctx: &egui::Context) {
        if self.visuels_a_jour {
            return;
        }
        ctx.set_visuals(if self.palette.sombre {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });
        self.visuels_a_jour = true;
    }

    pub fn ui_menu(&mut self, ctx: &egui::Context) {
        let noms: Vec<String> = self.config.noms_themes().map(str::to_string).collect();
        let mut choisi: Option<String> = None;

        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.menu_button("Configuration", |ui| {
                    ui.menu_button("Thème", |ui| {
                        for nom in &noms {
                            let actif = *nom == self.config.theme;
                            if ui.selectable_label(actif, nom).clicked() {
                                choisi = Some(nom.clone());
                                ui.close();
                            }
                        }
                    });
                    ui.separator();
                    if ui.button("Quitter").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });

        if let Some(nom) = choisi {
            self.changer_theme(&nom);
        }
    }

    /// Clavier physique : chiffres/opérateurs tapés, Entrée, Retour arrière, Échap.
    pub fn lire_clavier(&mut self, ctx: &egui::Context) {
        let evenements = ctx.input(|i| i.events.clone());
        for ev in evenements {
            match ev {
                egui::Event::Text(texte) => {
                    for c in texte.chars() {
                        if let Some(a) = action_clavier(c) {
                            self.appliquer(a);
                        }
                    }
                }
                egui::Event::Key {
                    key, pressed: true, ..
                } => match key {
                    egui::Key::Enter => self.appliquer(Action::Egal),
                    egui::Key::Backspace => self.appliquer(Action::Retour),
                    egui::Key::Escape | egui::Key::Delete => self.appliquer(Action::Effacer),
                    _ => {}
                },
                _ => {}
            }
        }
    }

    /// UI principale : à appeler dans le panneau central.
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(ESPACE, ESPACE);

        self.ui_afficheur(ui);
        ui.add_space(8.0);
        self.ui_pave(ui);
        ui.add_space(8.0);
        self.ui_demarche(ui);
    }

    fn ui_afficheur(&self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(couleur(self.palette.cadre))
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(self.saisie.texte())
                            .monospace()
                            .size(TAILLE_AFFICHEUR)
                            .color(couleur(self.palette.texte)),
                    );
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        let colonnes = COLONNES as f32;
        let largeur = ((ui.available_width() - ESPACE * (colonnes - 1.0)) / colonnes)
            .max(LARGEUR_TOUCHE_MIN);
        let mut clic: Option<Action> = None;

        egui::Grid::new("pave_calculatrice")
            .num_columns(COLONNES)
            .spacing([ESPACE, ESPACE])
            .show(ui, |ui| {
                for ligne in CLAVIER.iter() {
                    for touche in ligne {
                        let fond = match touche.style {
                            StyleTouche::Nombre => self.palette.touche_nombre,
                            StyleTouche::Operateur => self.palette.touche_operateur,
                            StyleTouche::Defaut => self.palette.touche_defaut,
                            StyleTouche::Effacer => self.palette.touche_effacer,
                        };
                        let bouton = egui::Button::new(
                            egui::RichText::new(touche.libelle)
                                .size(18.0)
                                .color(couleur(self.palette.texte)),
                        )
                        .fill(couleur(fond));

                        let actif = touche.action != Action::Aucune;
                        let resp = ui.add_enabled_ui(actif, |ui| {
                            ui.add_sized([largeur, HAUTEUR_TOUCHE], bouton)
                        });
                        if resp.inner.clicked() {
                            clic = Some(touche.action);
                        }
                    }
                    ui.end_row();
                }
            });

        if let Some(a) = clic {
            self.appliquer(a);
        }
    }

    fn ui_demarche(&self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| match &self.demarche {
                Some(d) => {
                    ui.label("Jetons :");
                    ui.monospace(&d.jetons);
                    ui.add_space(4.0);
                    ui.label("Arbre :");
                    ui.monospace(&d.arbre);
                }
                None => {
                    ui.weak("aucune évaluation réussie");
                }
            });
    }
}
