//! Propriétés : valeur correcte, aller-retour d’affichage, sécurité.
//!
//! Chaque expression générée porte aussi sa valeur calculée directement en f64
//! (mêmes opérations, même ordre) : le pipeline doit retrouver cette valeur
//! à la précision de l’affichage près, ou échouer avec le genre attendu.

use super::erreurs::ErrorKind;
use super::evaluate;
use super::format::{decimal_brut, format_resultat, LARGEUR_AFFICHAGE};
use super::tests_fuzz_safe::Rng;

/// Expression texte + valeur directe (None si le calcul direct échoue : division par zéro).
struct Cas {
    texte: String,
    valeur: Option<f64>,
}

fn gen_cas(rng: &mut Rng, depth: usize) -> Cas {
    if depth == 0 || rng.pick(4) == 0 {
        let (texte, v) = match rng.pick(6) {
            0 => ("0", 0.0),
            1 => ("1", 1.0),
            2 => ("2.5", 2.5),
            3 => ("4", 4.0),
            4 => ("0.1", 0.1),
            _ => ("12", 12.0),
        };
        return Cas {
            texte: texte.to_string(),
            valeur: Some(v),
        };
    }

    let a = gen_cas(rng, depth - 1);
    let b = gen_cas(rng, depth - 1);
    let op = ["+", "-", "*", "/", "-"][rng.pick(5) as usize];

    let valeur = match (a.valeur, b.valeur) {
        (Some(x), Some(y)) => match op {
            "+" => Some(x + y),
            "-" => Some(x - y),
            "*" => Some(x * y),
            _ => {
                if y == 0.0 {
                    None
                } else {
                    Some(x / y)
                }
            }
        },
        _ => None,
    };
    Cas {
        texte: format!("({}{op}{})", a.texte, b.texte),
        valeur,
    }
}

fn proche(affichage: &str, attendu: f64) -> bool {
    let relu: f64 = match affichage.parse() {
        Ok(v) => v,
        Err(_) => return false,
    };
    if attendu == 0.0 {
        return relu == 0.0;
    }
    ((relu - attendu) / attendu).abs() <= 1e-5
}

/* ------------------------ Tests ------------------------ */

#[test]
fn valeurs_conformes_au_calcul_direct() {
    let mut rng = Rng::new(0x5EED_u64);
    let mut vus = 0usize;

    for _ in 0..400 {
        let cas = gen_cas(&mut rng, 4);
        match (evaluate(&cas.texte), cas.valeur) {
            (Ok(affichage), Some(v)) => {
                assert!(
                    proche(&affichage, v),
                    "expr={:?} affichage={affichage:?} attendu={v}",
                    cas.texte
                );
                vus += 1;
            }
            (Err(e), None) => assert_eq!(e.kind(), ErrorKind::DivisionByZero, "{:?}", cas.texte),
            (r, v) => panic!("désaccord: expr={:?} pipeline={r:?} direct={v:?}", cas.texte),
        }
    }

    assert!(vus > 100, "trop peu de cas calculables: {vus}");
}

#[test]
fn idempotence_affichage_court() {
    for s in ["14", "0.5", "-3", "1024", "99999999999999", "0.0001"] {
        let v: f64 = s.parse().unwrap();
        assert!(decimal_brut(v).chars().count() < LARGEUR_AFFICHAGE);
        assert_eq!(format_resultat(v), decimal_brut(v));
        // et le pipeline rend le même texte
        assert_eq!(evaluate(s).as_deref(), Ok(s));
    }
}

#[test]
fn aller_retour_scientifique_par_le_pipeline() {
    for expr in ["123456789012345+1", "10**20/3", "1/3", "2**-40", "factorial(25)"] {
        let affichage = evaluate(expr).unwrap_or_else(|e| panic!("{expr:?}: {e}"));
        assert!(affichage.contains('E'), "{expr:?} -> {affichage:?}");

        // relu par le même pipeline
        let relu = evaluate(&format!("{affichage}*1")).unwrap();
        let a: f64 = affichage.parse().unwrap();
        let b: f64 = relu.parse().unwrap();
        assert!(((a - b) / a).abs() <= 1e-5, "{affichage} vs {relu}");
    }
}

#[test]
fn securite_aucune_syntaxe_hors_grammaire() {
    let tentatives = [
        "__import__('os').system('ls')",
        "os.system('rm -rf /')",
        "exec('1')",
        "eval(\"1+1\")",
        "open('/etc/passwd')",
        "pi.__class__",
        "(1).real",
        "[x for x in ()]",
        "lambda: 1",
        "1; 2",
        "a = 1",
        "sin.__call__(1)",
        "1 if 1 else 2",
        "$(whoami)",
        "`id`",
        "x",
        "sinpi",
        "PI.e",
        "0x10",
        "1_000",
    ];

    for s in tentatives {
        match evaluate(s) {
            Ok(v) => panic!("{s:?} accepté ({v:?})"),
            Err(e) => assert_eq!(e.kind(), ErrorKind::LexError, "{s:?} => {e}"),
        }
    }
}

#[test]
fn securite_identifiants_hors_table() {
    // Toute lettre seule hors table est refusée dès les jetons.
    for c in 'a'..='z' {
        let s = c.to_string();
        let r = evaluate(&s);
        if c == 'e' {
            assert!(r.is_ok());
        } else {
            assert_eq!(r.map_err(|e| e.kind()), Err(ErrorKind::LexError), "{s:?}");
        }
    }
}
