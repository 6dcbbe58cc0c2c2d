//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état du grapheur (famille sélectionnée, coefficients
//! a et b) et offrir des opérations simples (changement d’onglet, remise
//! aux valeurs par défaut) sans logique d’affichage.
//!
//! Contrats :
//! - Aucun échantillonnage ici (pas de noyau, pas de tracé).
//! - Actions déterministes, sans effet de bord caché.
//! - Les bornes des curseurs vivent ici : la vue les lit, le noyau n’a
//!   jamais à valider (entrées toujours bornées par les curseurs).

use crate::noyau::FamilleFonction;

/// Bornes et pas du coefficient a (pas de 0.5 : moitiés et entiers,
/// pour que la fraction affichée reste “propre”).
pub const A_MIN: f64 = -5.0;
pub const A_MAX: f64 = 5.0;
pub const PAS_A: f64 = 0.5;

/// Bornes et pas de l’ordonnée à l’origine b (entiers seulement).
pub const B_MIN: f64 = -10.0;
pub const B_MAX: f64 = 10.0;
pub const PAS_B: f64 = 1.0;

#[derive(Clone, Debug)]
pub struct AppGraphe {
    /// Onglet sélectionné.
    pub famille: FamilleFonction,

    // --- coefficients pilotés par les curseurs ---
    pub a: f64,
    pub b: f64,
}

impl Default for AppGraphe {
    fn default() -> Self {
        let famille = FamilleFonction::Proportionnelle;
        Self {
            famille,
            a: famille.a_defaut(),
            b: 0.0,
        }
    }
}

impl AppGraphe {
    /// Changement d’onglet : on repart des valeurs par défaut de la
    /// famille (moins déroutant pour l’élève que de conserver a/b).
    pub fn choisir_famille(&mut self, famille: FamilleFonction) {
        self.famille = famille;
        self.reset_coeffs();
    }

    /// Remise des coefficients aux valeurs par défaut de la famille.
    pub fn reset_coeffs(&mut self) {
        self.a = self.famille.a_defaut();
        self.b = 0.0;
    }
}
