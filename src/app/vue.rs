// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Écran : cadre monospace en lecture seule (miroir du tampon)
// - Pavé : grille de boutons, chacun porte une Touche (libellé = Touche::libelle)
//
//   C  ÷  ×  -
//   7  8  9  +
//   4  5  6
//   1  2  3  =
//   0  .

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::saisie::Phase;
use crate::noyau::touche::Operateur;
use crate::noyau::Touche;

/// Lignes du pavé (le libellé vient de `Touche::libelle`).
const PAVE: [&[Touche]; 5] = [
    &[
        Touche::Effacer,
        Touche::Operateur(Operateur::Divise),
        Touche::Operateur(Operateur::Fois),
        Touche::Operateur(Operateur::Moins),
    ],
    &[
        Touche::Chiffre(7),
        Touche::Chiffre(8),
        Touche::Chiffre(9),
        Touche::Operateur(Operateur::Plus),
    ],
    &[Touche::Chiffre(4), Touche::Chiffre(5), Touche::Chiffre(6)],
    &[
        Touche::Chiffre(1),
        Touche::Chiffre(2),
        Touche::Chiffre(3),
        Touche::Egal,
    ],
    &[Touche::Chiffre(0), Touche::Point],
];

const TAILLE_BOUTON: [f32; 2] = [64.0, 48.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.ui_ecran(ui);

        ui.add_space(8.0);

        self.ui_pave(ui);
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        let couleur = if self.en_erreur() {
            ui.visuals().error_fg_color
        } else if self.phase() == Phase::Resultat {
            ui.visuals().strong_text_color()
        } else {
            ui.visuals().text_color()
        };

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(4.0 * TAILLE_BOUTON[0] + 18.0);
                ui.set_min_height(ui.text_style_height(&egui::TextStyle::Heading) * 1.5);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(self.ecran())
                            .monospace()
                            .size(28.0)
                            .color(couleur),
                    );
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in PAVE {
                    for &touche in ligne {
                        self.bouton(ui, touche);
                    }
                    ui.end_row();
                }
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, touche: Touche) {
        // "." serait ignoré : on le grise
        let actif = !(touche == Touche::Point && self.point_pose());

        let resp = ui.add_enabled_ui(actif, |ui| {
            ui.add_sized(
                TAILLE_BOUTON,
                egui::Button::new(egui::RichText::new(touche.libelle()).size(22.0)),
            )
        });
        if resp.inner.clicked() {
            self.appuyer(touche);
        }
    }
}
