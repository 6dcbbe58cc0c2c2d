//! Tests du noyau (campagne) : invariants + scénarios de référence.
//!
//! Notes importantes (alignées avec l’état actuel du noyau) :
//! - en_fraction ne cherche que des écritures décimales (dénominateur
//!   puissance de 10 ≤ 1000) : 1/3 donne l’approximation 333/1000,
//!   c’est voulu (les coefficients viennent de curseurs à pas 0.5 / 1).
//! - Les x produits par generer_points sont des centièmes exacts : on
//!   peut les retrouver à 1e-9 près sans se soucier de dérive.
//! - Famille inverse avec a = 0 : y = 0 partout sauf en x = 0 (trou).
//!   Comportement conservé tel quel, le test le fige.

use super::echantillon::{generer_points, Echantillon, FamilleFonction};
use super::equation::{morceaux_equation, texte_equation, Morceau};
use super::fraction::{en_fraction, Fraction};

/// Domaine et pas du tracé tels que la vue les utilise.
const DOMAINE: [f64; 2] = [-11.0, 11.0];
const PAS: f64 = 0.2;

fn pgcd(a: u64, b: u64) -> u64 {
    if b == 0 {
        a
    } else {
        pgcd(b, a % b)
    }
}

/// Retrouve l’échantillon d’abscisse `x` (doit exister).
fn y_en(points: &[Echantillon], x: f64) -> Option<f64> {
    points
        .iter()
        .find(|e| (e.x - x).abs() < 1e-9)
        .unwrap_or_else(|| panic!("pas d’échantillon en x = {x}"))
        .y
}

fn assert_frac(valeur: f64, attendu: (i8, u64, u64, bool)) {
    let f = en_fraction(valeur);
    let (signe, num, den, entiere) = attendu;
    assert_eq!(
        f,
        Fraction {
            signe,
            numerateur: num,
            denominateur: den,
            est_entiere: entiere,
        },
        "valeur = {valeur}"
    );
}

/* ------------------------ Fractions : cas de base ------------------------ */

#[test]
fn fraction_zero() {
    assert_frac(0.0, (0, 0, 1, true));
}

#[test]
fn fraction_entiers() {
    assert_frac(1.0, (1, 1, 1, true));
    assert_frac(5.0, (1, 5, 1, true));
    assert_frac(-3.0, (-1, 3, 1, true));

    // tolérance : “presque entier” est lu comme entier
    assert_frac(2.00005, (1, 2, 1, true));
    assert_frac(-4.99998, (-1, 5, 1, true));
}

#[test]
fn fraction_moities_et_quarts() {
    assert_frac(0.5, (1, 1, 2, false));
    assert_frac(-0.25, (-1, 1, 4, false));
    assert_frac(1.5, (1, 3, 2, false));
    assert_frac(-2.5, (-1, 5, 2, false));
    assert_frac(0.75, (1, 3, 4, false));
    assert_frac(0.2, (1, 1, 5, false));
}

/* ------------------------ Fractions : invariants ------------------------ */

#[test]
fn fraction_reduite_et_denominateur_decimal() {
    for k in -20i64..=20 {
        let v = k as f64 * 0.25;
        let f = en_fraction(v);
        if f.signe != 0 {
            assert_eq!(
                pgcd(f.numerateur, f.denominateur),
                1,
                "non réduite pour {v}"
            );
        }
        // dénominateur réduit d’une puissance de 10 ≤ 1000 : divise 1000
        assert_eq!(1000 % f.denominateur, 0, "dénominateur pour {v}");
    }
}

#[test]
fn fraction_aller_retour_pas_de_curseur() {
    // Toutes les valeurs atteignables par le curseur a (pas 0.5)…
    for k in -10i64..=10 {
        let v = k as f64 * 0.5;
        let f = en_fraction(v);
        assert!((f.valeur() - v).abs() < 1e-3, "aller-retour pour {v}");
    }
    // …et par le curseur b (entiers).
    for k in -10i64..=10 {
        let v = k as f64;
        let f = en_fraction(v);
        assert!(f.est_entiere);
        assert!((f.valeur() - v).abs() < 1e-3, "aller-retour pour {v}");
    }
}

#[test]
fn fraction_cap_approximation_silencieuse() {
    // 1/3 n’a pas d’écriture décimale finie : meilleure approximation
    // au millième, sans erreur.
    let f = en_fraction(1.0 / 3.0);
    assert_eq!((f.signe, f.numerateur, f.denominateur), (1, 333, 1000));
    assert!(!f.est_entiere);
    assert!((f.valeur() - 1.0 / 3.0).abs() < 1e-3);
}

/* ------------------------ Échantillonnage : invariants ------------------------ */

#[test]
fn points_strictement_croissants_sans_doublon() {
    for famille in FamilleFonction::TOUTES {
        let points = generer_points(famille, 1.5, -2.0, DOMAINE, PAS);
        assert!(points.len() > 2);
        for paire in points.windows(2) {
            assert!(
                paire[0].x < paire[1].x,
                "{famille:?} : x non strictement croissant"
            );
        }
    }
}

#[test]
fn grille_au_centieme_sans_derive() {
    // 0.2 accumulé naïvement dériverait (0.2 n’est pas exact en binaire) ;
    // ici chaque x doit être un centième exact, et la grille est complète.
    let points = generer_points(FamilleFonction::Proportionnelle, 1.0, 0.0, DOMAINE, PAS);
    assert_eq!(points.len(), 111); // -11.0, -10.8, …, 11.0
    for e in &points {
        let centiemes = e.x * 100.0;
        assert!(
            (centiemes - centiemes.round()).abs() < 1e-9,
            "x = {} non exact",
            e.x
        );
    }
}

#[test]
fn familles_continues_toujours_definies() {
    for famille in [
        FamilleFonction::Proportionnelle,
        FamilleFonction::Affine,
        FamilleFonction::Quadratique,
    ] {
        let points = generer_points(famille, -0.5, 3.0, DOMAINE, PAS);
        assert!(
            points.iter().all(|e| e.y.is_some()),
            "{famille:?} : y indéfini inattendu"
        );
    }
}

#[test]
fn inverse_un_seul_trou_en_zero() {
    let points = generer_points(FamilleFonction::InverseProportionnelle, 4.0, 0.0, DOMAINE, PAS);

    let trous: Vec<&Echantillon> = points.iter().filter(|e| e.y.is_none()).collect();
    assert_eq!(trous.len(), 1);
    assert_eq!(trous[0].x, 0.0);
}

#[test]
fn inverse_rejoint_l_asymptote() {
    // Même avec un petit a, les x injectés poussent |y| jusqu’au bord
    // vertical de la fenêtre, et |y| croît quand |x| décroît.
    let points = generer_points(FamilleFonction::InverseProportionnelle, 0.5, 0.0, DOMAINE, PAS);

    let xs_injectes = [0.15, 0.1, 0.08, 0.05, 0.04, 0.02, 0.01];
    let mut precedent = 0.0_f64;
    for x in xs_injectes {
        let y = y_en(&points, x).expect("y défini hors de 0");
        assert!(y > precedent, "|y| doit croître en approchant 0");
        precedent = y;
    }
    assert!(precedent >= 10.0, "la branche doit atteindre le bord de la fenêtre");

    // symétrie côté négatif
    let y_neg = y_en(&points, -0.01).expect("y défini hors de 0");
    assert!(y_neg <= -10.0);
}

#[test]
fn inverse_a_nul_ligne_plate_avec_trou() {
    // Comportement conservé : 0/x = 0 partout, mais x = 0 reste un trou
    // (discontinuité pourtant effaçable, affichée comme une singularité).
    let points = generer_points(FamilleFonction::InverseProportionnelle, 0.0, 0.0, DOMAINE, PAS);
    for e in &points {
        if e.x == 0.0 {
            assert_eq!(e.y, None);
        } else {
            assert_eq!(e.y, Some(0.0), "x = {}", e.x);
        }
    }
}

/* ------------------------ Échantillonnage : scénarios ------------------------ */

#[test]
fn scenario_proportionnelle() {
    let points = generer_points(FamilleFonction::Proportionnelle, 2.0, 0.0, DOMAINE, PAS);
    assert_eq!(y_en(&points, 5.0), Some(10.0));
    assert_eq!(y_en(&points, -3.0), Some(-6.0));
}

#[test]
fn scenario_affine() {
    let points = generer_points(FamilleFonction::Affine, 1.0, 3.0, DOMAINE, PAS);
    assert_eq!(y_en(&points, 0.0), Some(3.0));
    assert_eq!(y_en(&points, -3.0), Some(0.0));
}

#[test]
fn scenario_carre() {
    let points = generer_points(FamilleFonction::Quadratique, 1.0, 0.0, DOMAINE, PAS);
    assert_eq!(y_en(&points, 3.0), Some(9.0));
    assert_eq!(y_en(&points, -3.0), Some(9.0));
}

#[test]
fn scenario_inverse() {
    let points = generer_points(FamilleFonction::InverseProportionnelle, 4.0, 0.0, DOMAINE, PAS);
    assert_eq!(y_en(&points, 0.0), None);
    assert_eq!(y_en(&points, 4.0), Some(1.0));
    assert_eq!(y_en(&points, -4.0), Some(-1.0));
}

#[test]
fn affine_a_nul_constante() {
    // a = 0 n’est pas une erreur : fonction constante y = b.
    let points = generer_points(FamilleFonction::Affine, 0.0, 7.0, DOMAINE, PAS);
    assert!(points.iter().all(|e| e.y == Some(7.0)));
}

/* ------------------------ Équation affichée ------------------------ */

#[test]
fn equation_proportionnelle() {
    use FamilleFonction::Proportionnelle;
    assert_eq!(texte_equation(Proportionnelle, 0.0, 0.0), "y = 0");
    assert_eq!(texte_equation(Proportionnelle, 1.0, 0.0), "y = x");
    assert_eq!(texte_equation(Proportionnelle, -1.0, 0.0), "y = -x");
    assert_eq!(texte_equation(Proportionnelle, 2.0, 0.0), "y = 2x");
    assert_eq!(texte_equation(Proportionnelle, 0.5, 0.0), "y = 1/2x");
}

#[test]
fn equation_inverse() {
    use FamilleFonction::InverseProportionnelle;
    assert_eq!(texte_equation(InverseProportionnelle, 0.0, 0.0), "y = 0");
    assert_eq!(texte_equation(InverseProportionnelle, 4.0, 0.0), "y = 4/x");
    assert_eq!(texte_equation(InverseProportionnelle, -4.0, 0.0), "y = -4/x");
    assert_eq!(texte_equation(InverseProportionnelle, 0.5, 0.0), "y = 1/2x");

    // structure : une seule fraction, x au dénominateur
    let morceaux = morceaux_equation(InverseProportionnelle, 1.5, 0.0);
    assert_eq!(
        morceaux,
        vec![
            Morceau::Texte("y = ".into()),
            Morceau::Fraction {
                num: "3".into(),
                den: "2x".into()
            },
        ]
    );
}

#[test]
fn equation_affine() {
    use FamilleFonction::Affine;
    assert_eq!(texte_equation(Affine, 1.0, 3.0), "y = x + 3");
    assert_eq!(texte_equation(Affine, 0.5, -3.0), "y = 1/2x - 3");
    assert_eq!(texte_equation(Affine, 2.0, 0.0), "y = 2x");
    assert_eq!(texte_equation(Affine, 0.0, 5.0), "y = 5");
    assert_eq!(texte_equation(Affine, 0.0, 0.0), "y = 0");
}

#[test]
fn equation_carre() {
    use FamilleFonction::Quadratique;
    assert_eq!(texte_equation(Quadratique, 0.0, 0.0), "y = 0");
    assert_eq!(texte_equation(Quadratique, 1.0, 0.0), "y = x²");
    assert_eq!(texte_equation(Quadratique, -0.5, 0.0), "y = -1/2x²");
}
