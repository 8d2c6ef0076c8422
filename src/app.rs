// src/app.rs
//
// Calculatrice écran — module App (racine)
// ----------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)

pub mod etat;
pub mod vue;

pub use etat::AppCalc;

use eframe::egui;

use crate::noyau::Touche;

/// Touches issues du clavier pendant cette frame.
/// - texte : chiffres, point, opérateurs (alias * / x −), "=", "c"/"C"
/// - Enter = "=", Escape = "C"
fn touches_clavier(ctx: &egui::Context) -> Vec<Touche> {
    // un champ texte focus garde ses frappes
    if ctx.wants_keyboard_input() {
        return Vec::new();
    }

    ctx.input(|i| {
        i.events
            .iter()
            .filter_map(|ev| match ev {
                egui::Event::Text(t) => Touche::depuis_clavier(t),
                egui::Event::Key {
                    key: egui::Key::Enter,
                    pressed: true,
                    ..
                } => Some(Touche::Egal),
                egui::Event::Key {
                    key: egui::Key::Escape,
                    pressed: true,
                    ..
                } => Some(Touche::Effacer),
                _ => None,
            })
            .collect()
    })
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let touches = touches_clavier(ctx);
        self.appuyer_tout(touches);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}
