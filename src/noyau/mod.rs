//! Noyau de calcul du grapheur
//!
//! Organisation interne :
//! - fraction.rs     : décimal -> fraction réduite (affichage empilé)
//! - echantillon.rs  : familles de fonctions + échantillonnage du tracé
//! - equation.rs     : morceaux d’équation prêts à afficher
//!
//! Tout le noyau est pur : pas d’état, pas d’E/S, pas d’erreur possible
//! (fonctions totales sur leurs domaines documentés). La vue consomme
//! les valeurs telles quelles.

pub mod echantillon;
pub mod equation;
pub mod fraction;

#[cfg(test)]
mod tests_noyau;


// API publique minimale
pub use echantillon::{generer_points, Echantillon, FamilleFonction};
pub use equation::{morceaux_equation, texte_equation, Morceau};
pub use fraction::{en_fraction, Fraction, EPSILON};
