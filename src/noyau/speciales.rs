// src/noyau/speciales.rs
//
// Fonctions spéciales absentes de std (f64) : gamma, lgamma, erf, erfc, factorielle.
// - gamma  : Lanczos (g = 7, 9 coefficients) + réflexion pour x < 1/2
// - erf    : série de Taylor pour |x| < 3, fraction continue (erfc) au-delà
//
// Les domaines (pôles, négatifs) sont vérifiés dans fonctions.rs, pas ici :
// ces fonctions retournent simplement ±inf / NaN hors domaine.

use std::f64::consts::PI;

/// Au-delà, n! dépasse f64::MAX.
pub const FACTORIELLE_MAX: u32 = 170;

/// n! exact tant que les produits restent représentables (n <= 170).
pub fn factorielle(n: u32) -> f64 {
    if n > FACTORIELLE_MAX {
        return f64::INFINITY;
    }
    (2..=n).fold(1.0, |acc, k| acc * k as f64)
}

const LANCZOS_G: f64 = 7.0;
const LANCZOS_COEFFS: [f64; 9] = [
    0.999_999_999_999_809_9,
    676.520_368_121_885_1,
    -1_259.139_216_722_402_8,
    771.323_428_777_653_1,
    -176.615_029_162_140_6,
    12.507_343_278_686_905,
    -0.138_571_095_265_720_12,
    9.984_369_578_019_572e-6,
    1.505_632_735_149_311_6e-7,
];

/// Somme de Lanczos A_g(x) pour x déjà décalé (x - 1).
fn lanczos_somme(x: f64) -> f64 {
    let mut ag = LANCZOS_COEFFS[0];
    for (i, c) in LANCZOS_COEFFS.iter().enumerate().skip(1) {
        ag += c / (x + i as f64);
    }
    ag
}

/// Γ(x). Valeur exacte (factorielle) pour les entiers positifs raisonnables.
pub fn gamma(x: f64) -> f64 {
    if x <= 0.0 && x == x.floor() {
        return f64::NAN; // pôles
    }
    if x == x.floor() && x <= (FACTORIELLE_MAX + 1) as f64 {
        return factorielle(x as u32 - 1);
    }

    if x < 0.5 {
        // Réflexion : Γ(1-x)Γ(x) = π / sin(πx)
        PI / ((PI * x).sin() * gamma(1.0 - x))
    } else {
        let x = x - 1.0;
        let t = x + LANCZOS_G + 0.5;
        // t^(x+1/2) coupé en deux pour ne pas déborder avant e^-t
        let demi = t.powf((x + 0.5) / 2.0);
        (2.0 * PI).sqrt() * demi * (-t).exp() * demi * lanczos_somme(x)
    }
}

/// ln|Γ(x)|, stable pour les grands x.
pub fn lgamma(x: f64) -> f64 {
    if x <= 0.0 && x == x.floor() {
        return f64::INFINITY;
    }

    if x < 0.5 {
        // ln|Γ(x)| = ln(π / |sin(πx)|) - ln|Γ(1-x)|
        (PI / (PI * x).sin().abs()).ln() - lgamma(1.0 - x)
    } else {
        let x = x - 1.0;
        let t = x + LANCZOS_G + 0.5;
        0.5 * (2.0 * PI).ln() + (x + 0.5) * t.ln() - t + lanczos_somme(x).ln()
    }
}

/// Seuil de bascule série / fraction continue.
const ERF_SEUIL: f64 = 3.0;

/// erf(x) par série : 2/√π Σ (-1)^n x^(2n+1) / (n! (2n+1)).
fn erf_serie(x: f64) -> f64 {
    let x2 = x * x;
    let mut terme = x; // (-1)^n x^(2n+1) / n!
    let mut somme = x;
    for n in 1..200 {
        terme *= -x2 / n as f64;
        let contribution = terme / (2 * n + 1) as f64;
        somme += contribution;
        if contribution.abs() < 1e-17 * somme.abs() {
            break;
        }
    }
    2.0 / PI.sqrt() * somme
}

/// erfc(x) pour x >= ERF_SEUIL, fraction continue évaluée de l’intérieur.
fn erfc_fraction(x: f64) -> f64 {
    const TERMES: usize = 60;
    let mut f = x;
    for k in (1..=TERMES).rev() {
        f = x + (k as f64 / 2.0) / f;
    }
    (-x * x).exp() / PI.sqrt() / f
}

pub fn erf(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    if x < 0.0 {
        return -erf(-x);
    }
    if x < ERF_SEUIL {
        erf_serie(x)
    } else {
        1.0 - erfc_fraction(x)
    }
}

pub fn erfc(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    if x < 0.0 {
        return 2.0 - erfc(-x);
    }
    if x < ERF_SEUIL {
        1.0 - erf_serie(x)
    } else {
        erfc_fraction(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn proche(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol * b.abs().max(1.0)
    }

    #[test]
    fn factorielle_petits_entiers() {
        assert_eq!(factorielle(0), 1.0);
        assert_eq!(factorielle(5), 120.0);
        assert!(factorielle(170).is_finite());
        assert!(factorielle(171).is_infinite());
    }

    #[test]
    fn gamma_entiers_et_demi() {
        assert_eq!(gamma(1.0), 1.0);
        assert_eq!(gamma(5.0), 24.0);
        assert!(proche(gamma(0.5), PI.sqrt(), 1e-12));
        assert!(proche(gamma(2.5), 1.329_340_388_179_137, 1e-12));
        // réflexion
        assert!(proche(gamma(-0.5), -2.0 * PI.sqrt(), 1e-12));
        assert!(gamma(0.0).is_nan());
        assert!(gamma(-3.0).is_nan());
    }

    #[test]
    fn gamma_grand_argument_sans_debordement_precoce() {
        assert!(proche(gamma(150.5), lgamma(150.5).exp(), 1e-9));
        assert!(gamma(172.5).is_infinite());
    }

    #[test]
    fn lgamma_valeurs() {
        assert!(proche(lgamma(1.0), 0.0, 1e-12));
        assert!(proche(lgamma(10.0), 362_880.0_f64.ln(), 1e-12));
        assert!(proche(lgamma(-0.5), (2.0 * PI.sqrt()).ln(), 1e-12));
        assert!(lgamma(-2.0).is_infinite());
    }

    #[test]
    fn erf_et_erfc() {
        assert_eq!(erf(0.0), 0.0);
        assert!(proche(erf(0.5), 0.520_499_877_813_046_5, 1e-13));
        assert!(proche(erf(1.0), 0.842_700_792_949_714_9, 1e-13));
        assert!(proche(erf(-1.0), -0.842_700_792_949_714_9, 1e-13));
        assert!(proche(erfc(3.5), 7.430_983_723_414_128e-7, 1e-10));
        assert!(proche(erfc(1.0) + erf(1.0), 1.0, 1e-15));
        assert!(proche(erfc(-1.0), 1.842_700_792_949_715, 1e-13));
        assert_eq!(erf(40.0), 1.0);
    }
}
