// src/app.rs
//
// Grapheur de fonctions — module App (racine)
// -------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppGraphe (pour main.rs: use crate::app::AppGraphe;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Important:
// - Toute la mise en page vit dans vue.rs ; ici, seulement le raccourci
//   global et le panneau central.

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppGraphe;`
pub use etat::AppGraphe;

use eframe::egui;

impl eframe::App for AppGraphe {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Raccourci clavier global minimal (safe natif + web) :
        // ESC = coefficients par défaut de la famille courante.
        let esc = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if esc {
            self.reset_coeffs(); // méthode publique de etat.rs
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
