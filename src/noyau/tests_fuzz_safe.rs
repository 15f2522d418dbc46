//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - on accepte seulement les erreurs de calcul attendues (division par zéro, domaine, dépassement)
//! - invariant clé : un affichage réussi tient dans la largeur ou est en notation scientifique

use std::time::{Duration, Instant};

use super::erreurs::ErrorKind;
use super::evaluate;
use super::format::LARGEUR_AFFICHAGE;
use super::jetons::LONGUEUR_MAX_ENTREE;

/* ------------------------ RNG déterministe minimal ------------------------ */

/// Partagé avec les autres campagnes (`tests_proprietes`).
#[derive(Clone)]
pub(super) struct Rng {
    state: u64,
}
impl Rng {
    pub(super) fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    pub(super) fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Helpers fuzz ------------------------ */

fn is_erreur_attendue(kind: ErrorKind) -> bool {
    // Liste blanche : erreurs *normales* pour des expressions bien formées.
    matches!(
        kind,
        ErrorKind::DivisionByZero | ErrorKind::DomainError | ErrorKind::Overflow
    )
}

fn check_affichage(expr: &str, affichage: &str) {
    let court = affichage.chars().count() < LARGEUR_AFFICHAGE;
    let scientifique = affichage.contains('E');
    assert!(
        court || scientifique,
        "affichage trop long: expr={expr:?} affichage={affichage:?}"
    );
    let relu: f64 = affichage
        .parse()
        .unwrap_or_else(|e| panic!("affichage illisible {affichage:?}: {e}"));
    assert!(relu.is_finite());
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    // inclut 0 (utile pour provoquer des divisions par zéro)
    match rng.pick(8) {
        0 => "0".to_string(),
        1 => "1".to_string(),
        2 => "2".to_string(),
        3 => "3.5".to_string(),
        4 => "10".to_string(),
        5 => ".25".to_string(),
        6 => "7".to_string(),
        _ => "123".to_string(),
    }
}

fn gen_atom(rng: &mut Rng) -> String {
    match rng.pick(6) {
        0 | 1 | 2 => gen_nombre(rng),
        3 => "pi".to_string(),
        4 => "e".to_string(),
        _ => format!("(-{})", gen_nombre(rng)),
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_atom(rng);
    }

    let a = gen_expr(rng, depth - 1);
    match rng.pick(12) {
        0 => gen_atom(rng),
        1 => format!("({a}+{})", gen_expr(rng, depth - 1)),
        2 => format!("({a}-{})", gen_expr(rng, depth - 1)),
        3 => format!("({a}*{})", gen_expr(rng, depth - 1)),
        4 => format!("({a}/{})", gen_expr(rng, depth - 1)),
        5 => format!("({a}%{})", gen_expr(rng, depth - 1)),
        6 => format!("({a}**{})", gen_atom(rng)),
        7 => format!("sqrt({a})"),
        8 => format!("log({a})"),
        9 => format!("sin({a})"),
        10 => format!("asin({a})"),
        _ => format!("exp({a})"),
    }
}

/* ------------------------ Helper somme balancée anti pile ------------------------ */

fn somme_balancee(terme: &str, n: usize) -> String {
    let mut items: Vec<String> = (0..n).map(|_| terme.to_string()).collect();
    while items.len() > 1 {
        let mut next = Vec::new();
        let mut i = 0;
        while i < items.len() {
            if i + 1 < items.len() {
                next.push(format!("({}+{})", items[i], items[i + 1]));
                i += 2;
            } else {
                next.push(items[i].clone());
                i += 1;
            }
        }
        items = next;
    }
    items.pop().unwrap_or_else(|| "0".to_string())
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_determinisme_et_erreurs_attendues() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);
    let mut rng_bis = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);
        let expr_bis = gen_expr(&mut rng_bis, 4);
        assert_eq!(expr, expr_bis);

        let r = evaluate(&expr);
        // Même entrée => même sortie (aucun état caché)
        assert_eq!(r, evaluate(&expr), "non déterministe: {expr:?}");

        match r {
            Ok(affichage) => {
                check_affichage(&expr, &affichage);
                seen_ok += 1;
            }
            Err(e) => {
                assert!(
                    is_erreur_attendue(e.kind()),
                    "erreur non attendue: expr={expr:?} err={e}"
                );
                seen_err += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 30, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_caracteres_aleatoires_sans_panique() {
    // Chaînes quelconques sur l’alphabet du clavier (+ quelques intrus) :
    // le pipeline doit toujours rendre Ok ou Err, jamais paniquer.
    const ALPHABET: &[char] = &[
        '0', '1', '2', '9', '.', '+', '-', '*', '/', '%', '^', '(', ')', ' ', 'p', 'i', 's',
        'q', 'r', 't', 'l', 'o', 'g', 'e', 'E', 'π', '√', '_', '[', '\'',
    ];

    let t0 = Instant::now();
    let max = Duration::from_millis(500);
    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..2000 {
        budget(t0, max);

        let n = 1 + rng.pick(24) as usize;
        let s: String = (0..n)
            .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
            .collect();

        if let Ok(affichage) = evaluate(&s) {
            check_affichage(&s, &affichage);
        }
    }
}

#[test]
fn fuzz_safe_somme_balancee_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    // 512 termes : ~3000 caractères, sous la borne d’entrée ; arbre de profondeur ~11
    let expr = somme_balancee("1/2", 512);
    assert!(expr.chars().count() <= LONGUEUR_MAX_ENTREE, "{}", expr.len());
    budget(t0, max);

    let affichage = evaluate(&expr).unwrap_or_else(|e| panic!("err: {e}"));

    // 512*(1/2) = 256
    assert_eq!(affichage, "256");
}

#[test]
fn fuzz_safe_longue_chaine_gauche() {
    // 1+1+...+1 : lu en boucle, mais l’arbre a autant de niveaux que de termes
    let expr = vec!["1"; 200].join("+");
    assert_eq!(evaluate(&expr).as_deref(), Ok("200"));
}

#[test]
fn fuzz_safe_chaines_a_la_borne_de_longueur() {
    // Entrées les plus longues acceptées par les jetons : refus propre, jamais de débordement de pile.
    let termes = (LONGUEUR_MAX_ENTREE + 1) / 2;
    for op in ["+", "-", "*", "/", "%", "**"] {
        let mut expr = vec!["1"; termes].join(op);
        while expr.chars().count() > LONGUEUR_MAX_ENTREE {
            expr.truncate(expr.len() - 1 - op.len());
        }
        let r = evaluate(&expr);
        assert_eq!(r.map_err(|e| e.kind()), Err(ErrorKind::ParseError), "chaîne {op:?}");
    }

    let moins = format!("{}1", "-".repeat(LONGUEUR_MAX_ENTREE - 1));
    assert_eq!(evaluate(&moins).map_err(|e| e.kind()), Err(ErrorKind::ParseError));

    let racines = format!("{}1", "sqrt ".repeat((LONGUEUR_MAX_ENTREE - 1) / 5));
    assert_eq!(evaluate(&racines).map_err(|e| e.kind()), Err(ErrorKind::ParseError));
}
