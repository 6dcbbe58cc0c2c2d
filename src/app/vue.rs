// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppGraphe (etat.rs) pour natif + wasm
// - Onglets par famille, curseurs a/b, équation avec vraies fractions
//   empilées, repère fixe [-10,10]² (ni zoom ni déplacement)
// - La courbe est coupée à chaque y indéfini : l’asymptote de a/x reste
//   une rupture, jamais un trait vertical interpolé
//
// Note :
// - Le tracé est peint directement (Painter) : la vue consomme la suite
//   d’échantillons du noyau telle quelle, point par point.

use eframe::egui;

use super::etat::{AppGraphe, A_MAX, A_MIN, B_MAX, B_MIN, PAS_A, PAS_B};
use crate::noyau::{generer_points, morceaux_equation, texte_equation, FamilleFonction, Morceau};

/* ------------------------ Constantes d’affichage ------------------------ */

/// Demi-fenêtre du repère : x et y visibles dans [-10, 10].
const FENETRE: f64 = 10.0;

/// Domaine échantillonné, un peu plus large que la fenêtre pour que les
/// droites sortent du cadre au lieu de s’arrêter au bord.
const DOMAINE_X: [f64; 2] = [-11.0, 11.0];

/// Pas d’échantillonnage du tracé (plus fin que le pas des curseurs).
const PAS_TRACE: f64 = 0.2;

/// Taille du texte de l’équation.
const TAILLE_EQUATION: f32 = 26.0;

/// Côté maximal du repère (pixels logiques).
const COTE_MAX: f32 = 480.0;

/// Bleu du tracé.
const COULEUR_COURBE: egui::Color32 = egui::Color32::from_rgb(37, 99, 235);

impl AppGraphe {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Grapheur de fonctions");
                ui.label("Déplace les curseurs et observe la courbe et l’équation.");
                ui.add_space(6.0);

                self.ui_onglets(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_equation(ui);

                ui.add_space(8.0);

                self.ui_curseurs(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_graphe(ui);
            });
    }

    fn ui_onglets(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            for famille in FamilleFonction::TOUTES {
                let actif = self.famille == famille;
                let etiquette = format!("{}\n{}", famille.libelle(), famille.formule());
                if ui.selectable_label(actif, etiquette).clicked() && !actif {
                    // Changement d’onglet : coefficients remis par défaut.
                    self.choisir_famille(famille);
                }
            }
        });

        ui.add_space(4.0);
        ui.label(
            egui::RichText::new(format!("Point : {}", self.famille.description())).italics(),
        );
    }

    fn ui_equation(&mut self, ui: &mut egui::Ui) {
        let cadre = egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.set_min_height(TAILLE_EQUATION * 2.2);

                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing.x = 3.0;
                    for morceau in morceaux_equation(self.famille, self.a, self.b) {
                        match morceau {
                            Morceau::Texte(t) => {
                                ui.label(
                                    egui::RichText::new(t).size(TAILLE_EQUATION).italics(),
                                );
                            }
                            Morceau::Fraction { num, den } => {
                                fraction_empilee(ui, &num, &den);
                            }
                        }
                    }
                });
            });

        // Version plate au survol (pratique à dicter / copier).
        cadre
            .response
            .on_hover_text(texte_equation(self.famille, self.a, self.b));
    }

    fn ui_curseurs(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.label("Paramètres :");

            ui.add(
                egui::Slider::new(&mut self.a, A_MIN..=A_MAX)
                    .step_by(PAS_A)
                    .text("a  (pente / coefficient)"),
            );

            if self.famille.utilise_b() {
                ui.add(
                    egui::Slider::new(&mut self.b, B_MIN..=B_MAX)
                        .step_by(PAS_B)
                        .text("b  (ordonnée à l’origine)"),
                );
            }

            ui.add_space(4.0);
            let reset = ui
                .button("Réinitialiser")
                .on_hover_text("Coefficients par défaut de la famille (Échap)");
            if reset.clicked() {
                self.reset_coeffs();
            }
        });
    }

    /* ------------------------ Repère + tracé ------------------------ */

    fn ui_graphe(&mut self, ui: &mut egui::Ui) {
        let cote = ui.available_width().min(COTE_MAX);
        let (rect, _resp) =
            ui.allocate_exact_size(egui::vec2(cote, cote), egui::Sense::hover());

        // Tout le dessin est borné au cadre : près de l’asymptote, |y|
        // dépasse largement la fenêtre.
        let p = ui.painter().with_clip_rect(rect);

        let fond = ui.visuals().extreme_bg_color;
        let coul_grille = ui.visuals().widgets.noninteractive.bg_stroke.color;
        let coul_axes = ui.visuals().text_color();
        let coul_faible = ui.visuals().weak_text_color();

        p.rect_filled(rect, egui::CornerRadius::ZERO, fond);

        // (x, y) mathématiques -> pixels (y écran vers le bas).
        let vers_ecran = |x: f64, y: f64| -> egui::Pos2 {
            let fx = ((x + FENETRE) / (2.0 * FENETRE)) as f32;
            let fy = ((y + FENETRE) / (2.0 * FENETRE)) as f32;
            egui::pos2(
                rect.left() + fx * rect.width(),
                rect.bottom() - fy * rect.height(),
            )
        };

        // Grille unité + graduations paires.
        for k in -10i32..=10 {
            let v = f64::from(k);
            p.line_segment(
                [vers_ecran(v, -FENETRE), vers_ecran(v, FENETRE)],
                egui::Stroke::new(0.5, coul_grille),
            );
            p.line_segment(
                [vers_ecran(-FENETRE, v), vers_ecran(FENETRE, v)],
                egui::Stroke::new(0.5, coul_grille),
            );

            if k != 0 && k % 2 == 0 {
                p.text(
                    vers_ecran(v, 0.0) + egui::vec2(0.0, 10.0),
                    egui::Align2::CENTER_CENTER,
                    k.to_string(),
                    egui::FontId::proportional(9.0),
                    coul_faible,
                );
                p.text(
                    vers_ecran(0.0, v) + egui::vec2(-10.0, 0.0),
                    egui::Align2::CENTER_CENTER,
                    k.to_string(),
                    egui::FontId::proportional(9.0),
                    coul_faible,
                );
            }
        }

        // Axes.
        p.line_segment(
            [vers_ecran(0.0, -FENETRE), vers_ecran(0.0, FENETRE)],
            egui::Stroke::new(1.8, coul_axes),
        );
        p.line_segment(
            [vers_ecran(-FENETRE, 0.0), vers_ecran(FENETRE, 0.0)],
            egui::Stroke::new(1.8, coul_axes),
        );
        p.text(
            egui::pos2(rect.center().x + 8.0, rect.top() + 8.0),
            egui::Align2::LEFT_CENTER,
            "y",
            egui::FontId::monospace(11.0),
            coul_faible,
        );
        p.text(
            egui::pos2(rect.right() - 8.0, rect.center().y - 8.0),
            egui::Align2::CENTER_CENTER,
            "x",
            egui::FontId::monospace(11.0),
            coul_faible,
        );

        // Courbe : un trait par tronçon, coupé à chaque y indéfini.
        let points = generer_points(self.famille, self.a, self.b, DOMAINE_X, PAS_TRACE);
        let mut troncon: Vec<egui::Pos2> = Vec::new();
        for e in &points {
            match e.y {
                Some(y) => troncon.push(vers_ecran(e.x, y)),
                None => dessine_troncon(&p, &mut troncon),
            }
        }
        dessine_troncon(&p, &mut troncon);
    }
}

/// Trace le tronçon accumulé (s’il contient au moins deux points) et le vide.
fn dessine_troncon(p: &egui::Painter, troncon: &mut Vec<egui::Pos2>) {
    if troncon.len() >= 2 {
        p.add(egui::Shape::line(
            std::mem::take(troncon),
            egui::Stroke::new(2.5, COULEUR_COURBE),
        ));
    } else {
        troncon.clear();
    }
}

/// Fraction empilée : numérateur, barre peinte, dénominateur.
fn fraction_empilee(ui: &mut egui::Ui, num: &str, den: &str) {
    let fonte = egui::FontId::proportional(TAILLE_EQUATION * 0.72);
    let couleur = ui.visuals().text_color();

    let g_num = ui
        .painter()
        .layout_no_wrap(num.to_owned(), fonte.clone(), couleur);
    let g_den = ui.painter().layout_no_wrap(den.to_owned(), fonte, couleur);

    let largeur = g_num.size().x.max(g_den.size().x) + 8.0;
    let hauteur = g_num.size().y + g_den.size().y + 6.0;
    let (rect, _resp) =
        ui.allocate_exact_size(egui::vec2(largeur, hauteur), egui::Sense::hover());

    let p = ui.painter();
    let y_barre = rect.top() + g_num.size().y + 3.0;

    p.galley(
        egui::pos2(rect.center().x - g_num.size().x / 2.0, rect.top()),
        g_num,
        couleur,
    );
    p.line_segment(
        [
            egui::pos2(rect.left(), y_barre),
            egui::pos2(rect.right(), y_barre),
        ],
        egui::Stroke::new(1.5, couleur),
    );
    p.galley(
        egui::pos2(rect.center().x - g_den.size().x / 2.0, y_barre + 3.0),
        g_den,
        couleur,
    );
}
