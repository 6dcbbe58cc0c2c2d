// src/main.rs
//
// Grapheur de fonctions — point d’entrée NATIF + WEB (WASM)
// ---------------------------------------------------------
// But:
// - NATIF (Linux/Windows/macOS) : eframe::run_native + NativeOptions
// - WEB  (wasm32)              : eframe::WebRunner + WebOptions + <canvas>
//
// Côté WEB (WASM) : ton index.html doit contenir un canvas :
//   <canvas id="the_canvas_id"></canvas>
//
// IMPORTANT (structure projet):
// - `impl eframe::App for AppGraphe` vit dans src/app.rs
// - Ici: point d’entrée seulement (natif + web)

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use eframe::egui;

mod app;
mod noyau;

use app::AppGraphe;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Grapheur de fonctions";

/* ------------------------ Styles (natif + web) ------------------------ */

fn configurer_style(ctx: &egui::Context) {
    use egui::{FontFamily, FontId, TextStyle};

    // Textes un peu plus grands que le défaut egui : l’app est projetée
    // au tableau, l’équation et les graduations doivent rester lisibles.
    let mut style = (*ctx.style()).clone();
    style
        .text_styles
        .insert(TextStyle::Heading, FontId::new(24.0, FontFamily::Proportional));
    style
        .text_styles
        .insert(TextStyle::Body, FontId::new(15.0, FontFamily::Proportional));
    style
        .text_styles
        .insert(TextStyle::Button, FontId::new(15.0, FontFamily::Proportional));
    ctx.set_style(style);
}

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([560.0, 860.0])
            .with_min_inner_size([440.0, 700.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(|cc| {
            // Contexte egui prêt => styles avant la première frame.
            configurer_style(&cc.egui_ctx);
            Ok(Box::<AppGraphe>::default())
        }),
    )
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
    // On laisse main() vide pour rester clair.
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{configurer_style, AppGraphe, TITRE_APP};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Point d’entrée automatique au chargement de la page.
    /// - Fixe le titre de l’onglet (document.title)
    /// - Récupère le <canvas id="the_canvas_id">
    /// - Démarre eframe WebRunner dessus
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        // 1) window/document
        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;

        // 1.5) Titre onglet
        d.set_title(TITRE_APP);

        // 2) element by id
        let el = d
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?;

        // 3) cast -> HtmlCanvasElement
        let canvas: HtmlCanvasElement = el
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l’élément trouvé n’est pas un <canvas>"))?;

        // 4) run web
        let web_options = eframe::WebOptions::default();

        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| {
                    configurer_style(&cc.egui_ctx);
                    Ok(Box::<AppGraphe>::default())
                }),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
