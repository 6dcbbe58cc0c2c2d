// src/noyau/equation.rs
//
// Équation “prête à afficher”
// ---------------------------
// Transforme (famille, a, b) en une suite de morceaux que la vue empile
// ou juxtapose : du texte, ou une fraction {numérateur, dénominateur}
// rendue avec une vraie barre. Toute la casuistique d’écriture vit ici
// (coefficient 1 omis, signes, forme a/x, terme + b), la vue ne fait
// que dessiner.

use super::echantillon::FamilleFonction;
use super::fraction::{en_fraction, Fraction};

/// Un fragment d’équation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Morceau {
    Texte(String),
    /// Fraction empilée : numérateur au-dessus de la barre, dénominateur
    /// en dessous (le dénominateur peut contenir “x”, cas a/x).
    Fraction { num: String, den: String },
}

fn texte(s: impl Into<String>) -> Morceau {
    Morceau::Texte(s.into())
}

/// Pousse un coefficient sous forme d’entier ou de fraction empilée.
///
/// `omettre_un` : en facteur d’un x, “1” et “-1” s’écrivent “” et “-”.
fn pousse_coeff(sortie: &mut Vec<Morceau>, f: &Fraction, omettre_un: bool) {
    if f.signe == 0 {
        sortie.push(texte("0"));
        return;
    }

    if f.est_entiere {
        if omettre_un && f.numerateur == 1 {
            if f.signe < 0 {
                sortie.push(texte("-"));
            }
            return;
        }
        let signe = if f.signe < 0 { "-" } else { "" };
        sortie.push(texte(format!("{signe}{}", f.numerateur)));
        return;
    }

    if f.signe < 0 {
        sortie.push(texte("-"));
    }
    sortie.push(Morceau::Fraction {
        num: f.numerateur.to_string(),
        den: f.denominateur.to_string(),
    });
}

/// Construit les morceaux de l’équation courante, “y = ” compris.
pub fn morceaux_equation(famille: FamilleFonction, a: f64, b: f64) -> Vec<Morceau> {
    let mut sortie = vec![texte("y = ")];

    match famille {
        FamilleFonction::Proportionnelle => {
            if a == 0.0 {
                sortie.push(texte("0"));
            } else {
                pousse_coeff(&mut sortie, &en_fraction(a), true);
                sortie.push(texte("x"));
            }
        }

        // a/x : une seule fraction, x au dénominateur (précédé du
        // dénominateur de a s’il n’est pas 1), signe devant la barre.
        FamilleFonction::InverseProportionnelle => {
            if a == 0.0 {
                sortie.push(texte("0"));
            } else {
                let f = en_fraction(a);
                if f.signe < 0 {
                    sortie.push(texte("-"));
                }
                let den = if f.denominateur != 1 {
                    format!("{}x", f.denominateur)
                } else {
                    "x".to_string()
                };
                sortie.push(Morceau::Fraction {
                    num: f.numerateur.to_string(),
                    den,
                });
            }
        }

        FamilleFonction::Affine => {
            if a == 0.0 {
                // Constante : on affiche b tel quel (y compris 0).
                sortie.push(texte(format!("{b}")));
            } else {
                pousse_coeff(&mut sortie, &en_fraction(a), true);
                sortie.push(texte("x"));
                if b != 0.0 {
                    let op = if b > 0.0 { " + " } else { " - " };
                    sortie.push(texte(op));
                    sortie.push(texte(format!("{}", b.abs())));
                }
            }
        }

        FamilleFonction::Quadratique => {
            if a == 0.0 {
                sortie.push(texte("0"));
            } else {
                pousse_coeff(&mut sortie, &en_fraction(a), true);
                sortie.push(texte("x²"));
            }
        }
    }

    sortie
}

/// Version plate (fractions rendues “n/d”) : tests, journal, titre.
pub fn texte_equation(famille: FamilleFonction, a: f64, b: f64) -> String {
    morceaux_equation(famille, a, b)
        .iter()
        .map(|m| match m {
            Morceau::Texte(t) => t.clone(),
            Morceau::Fraction { num, den } => format!("{num}/{den}"),
        })
        .collect()
}
