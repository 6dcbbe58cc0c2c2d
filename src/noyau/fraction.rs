// src/noyau/fraction.rs
//
// Conversion décimal -> fraction “propre à afficher”
// --------------------------------------------------
// But : rendre un coefficient de curseur (pas de 0.5 / 1) sous forme de
// fraction réduite à petits entiers, pour l’affichage empilé dans l’équation.
//
// Contrats :
// - Fonction totale : aucune erreur possible, résultat déterministe.
// - numerateur/denominateur toujours premiers entre eux (réduction via Ratio).
// - Avant réduction, le dénominateur est une puissance de 10 ≤ 1000 :
//   on ne cherche que des écritures décimales à 3 chiffres au plus.
//   Une valeur comme 1/3 n’est donc PAS retrouvée exactement : on renvoie
//   silencieusement la meilleure approximation décimale (333/1000).
//   C’est un compromis assumé lisibilité/précision, pas un bug à “corriger” :
//   les coefficients viennent de curseurs à pas fini.

use num_rational::Ratio;

/// Tolérance partagée “est-ce un entier / est-ce zéro”.
/// Utilisée aussi par l’échantillonneur (singularité de a/x).
/// La changer change les seuils de rendu visibles par l’utilisateur.
pub const EPSILON: f64 = 0.0001;

/// Garde-fou : dénominateur maximal exploré (10^3).
const DENOMINATEUR_MAX: u64 = 1000;

/// Descripteur de fraction normalisée.
///
/// Invariant : `signe * numerateur / denominateur` redonne la valeur
/// d’entrée à la tolérance près. Objet-valeur immuable, reconstruit à
/// chaque conversion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fraction {
    /// -1, 0 ou +1.
    pub signe: i8,
    pub numerateur: u64,
    /// Toujours > 0, premier avec `numerateur`.
    pub denominateur: u64,
    /// true ssi denominateur == 1 ou valeur == 0.
    pub est_entiere: bool,
}

impl Fraction {
    /// Reconstruction flottante (pour tests et vérifications).
    pub fn valeur(&self) -> f64 {
        f64::from(self.signe) * self.numerateur as f64 / self.denominateur as f64
    }
}

/// Convertit une valeur décimale en fraction réduite.
///
/// Étapes :
/// 1. zéro -> descripteur nul ;
/// 2. extraction du signe, travail sur |valeur| ;
/// 3. test “entier à EPSILON près” ;
/// 4. sinon, multiplication par 10 jusqu’à tomber sur un numérateur
///    quasi entier (ou dénominateur = 1000) ;
/// 5. arrondi puis réduction par le pgcd (Ratio::new réduit d’office).
pub fn en_fraction(valeur: f64) -> Fraction {
    if valeur == 0.0 {
        return Fraction {
            signe: 0,
            numerateur: 0,
            denominateur: 1,
            est_entiere: true,
        };
    }

    let signe: i8 = if valeur < 0.0 { -1 } else { 1 };
    let abs = valeur.abs();

    // Entier (ou assez proche) ?
    if (abs.round() - abs).abs() < EPSILON {
        return Fraction {
            signe,
            numerateur: abs.round() as u64,
            denominateur: 1,
            est_entiere: true,
        };
    }

    // Écriture décimale : puissances de 10 successives, bornées.
    let mut numerateur = abs;
    let mut denominateur: u64 = 1;
    while (numerateur.round() - numerateur).abs() > EPSILON && denominateur < DENOMINATEUR_MAX {
        numerateur *= 10.0;
        denominateur *= 10;
    }

    // Réduction : Ratio::new fait le pgcd (algorithme d’Euclide).
    let reduit = Ratio::new(numerateur.round() as u64, denominateur);

    Fraction {
        signe,
        numerateur: *reduit.numer(),
        denominateur: *reduit.denom(),
        est_entiere: false,
    }
}
