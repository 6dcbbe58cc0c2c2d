// src/noyau/echantillon.rs
//
// Échantillonnage des familles de fonctions pour le tracé
// -------------------------------------------------------
// - FamilleFonction : énumération fermée (match exhaustif, pas de dispatch
//   dynamique — ajouter une famille force à traiter tous les cas).
// - generer_points : grille en x (pas fixe, arrondi au centième), points
//   supplémentaires près de 0 pour l’hyperbole, évaluation par famille.
//
// Contrats :
// - Sortie strictement croissante en x, sans doublon.
// - y = None exactement là où la fonction est indéfinie (a/x en x = 0) :
//   le tracé doit couper la ligne, jamais interpoler à travers l’asymptote.
// - Fonctions pures, déterministes, sans état.

use std::collections::BTreeSet;

use super::fraction::EPSILON;

/// Les quatre familles du programme (collège).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FamilleFonction {
    /// y = a·x
    Proportionnelle,
    /// y = a/x
    InverseProportionnelle,
    /// y = a·x + b
    Affine,
    /// y = a·x²
    Quadratique,
}

impl FamilleFonction {
    /// Ordre des onglets.
    pub const TOUTES: [FamilleFonction; 4] = [
        FamilleFonction::Proportionnelle,
        FamilleFonction::InverseProportionnelle,
        FamilleFonction::Affine,
        FamilleFonction::Quadratique,
    ];

    pub fn libelle(self) -> &'static str {
        match self {
            FamilleFonction::Proportionnelle => "Proportionnalité",
            FamilleFonction::InverseProportionnelle => "Proportionnalité inverse",
            FamilleFonction::Affine => "Fonction affine",
            FamilleFonction::Quadratique => "Fonction carré",
        }
    }

    pub fn formule(self) -> &'static str {
        match self {
            FamilleFonction::Proportionnelle => "y = ax",
            FamilleFonction::InverseProportionnelle => "y = a/x",
            FamilleFonction::Affine => "y = ax + b",
            FamilleFonction::Quadratique => "y = ax²",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            FamilleFonction::Proportionnelle => "droite passant par l’origine",
            FamilleFonction::InverseProportionnelle => "hyperbole",
            FamilleFonction::Affine => "droite",
            FamilleFonction::Quadratique => "parabole",
        }
    }

    /// La famille utilise-t-elle le second coefficient ?
    pub fn utilise_b(self) -> bool {
        matches!(self, FamilleFonction::Affine)
    }

    /// Valeur de `a` au changement d’onglet (4 pour l’hyperbole : avec
    /// a = 1 la courbe colle aux axes et se voit mal).
    pub fn a_defaut(self) -> f64 {
        match self {
            FamilleFonction::InverseProportionnelle => 4.0,
            _ => 1.0,
        }
    }

    /// Évalue la famille en `x`.
    ///
    /// `None` uniquement pour a/x quand |x| < EPSILON (singularité).
    /// Cas connu, conservé tel quel : pour a = 0 la famille inverse rend
    /// y = 0 partout sauf en x = 0 — une discontinuité pourtant effaçable
    /// est affichée comme une vraie singularité.
    pub fn evaluer(self, a: f64, b: f64, x: f64) -> Option<f64> {
        match self {
            FamilleFonction::Proportionnelle => Some(a * x),
            FamilleFonction::InverseProportionnelle => {
                if x.abs() < EPSILON {
                    None
                } else {
                    Some(a / x)
                }
            }
            FamilleFonction::Affine => Some(a * x + b),
            FamilleFonction::Quadratique => Some(a * x * x),
        }
    }
}

/// Un point du tracé. `y = None` = rupture de ligne.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Echantillon {
    pub x: f64,
    pub y: Option<f64>,
}

/// Grille et doublons : on travaille en centièmes entiers (clé i64),
/// ce qui donne l’arrondi à 2 décimales, l’égalité exacte des clés et
/// l’ordre croissant d’un coup — sans dérive d’accumulation flottante.
const CENTIEMES: f64 = 100.0;

/// Abscisses injectées près de 0 pour la famille inverse (en centièmes) :
/// même avec un petit `a`, au moins un de ces x pousse |y| jusqu’au bord
/// vertical de la fenêtre, et la courbe semble bien rejoindre l’asymptote.
const PRES_DE_ZERO: [i64; 7] = [1, 2, 4, 5, 8, 10, 15];

/// Échantillonne `famille` sur `domaine = [x_min, x_max]` au pas `pas`.
///
/// Garanties :
/// - x strictement croissant, sans doublon ;
/// - pour la famille inverse, exactement un x vaut 0 et son y est None ;
/// - pour les autres familles, tous les y sont définis.
pub fn generer_points(
    famille: FamilleFonction,
    a: f64,
    b: f64,
    domaine: [f64; 2],
    pas: f64,
) -> Vec<Echantillon> {
    let mut cles: BTreeSet<i64> = BTreeSet::new();

    // Grille de base, en centièmes.
    let fin = (domaine[1] * CENTIEMES).round() as i64;
    // Garde-fou : un pas sous le centième boucle sinon sans avancer.
    let pas_c = ((pas * CENTIEMES).round() as i64).max(1);
    let mut x_c = (domaine[0] * CENTIEMES).round() as i64;
    while x_c <= fin {
        cles.insert(x_c);
        x_c += pas_c;
    }

    // Hyperbole : points serrés de part et d’autre de 0, plus 0 lui-même
    // (0 force la rupture de ligne au niveau de l’asymptote).
    if famille == FamilleFonction::InverseProportionnelle {
        for c in PRES_DE_ZERO {
            cles.insert(c);
            cles.insert(-c);
        }
        cles.insert(0);
    }

    cles.into_iter()
        .map(|c| {
            let x = c as f64 / CENTIEMES;
            Echantillon {
                x,
                y: famille.evaluer(a, b, x),
            }
        })
        .collect()
}
