//! src/app/clavier.rs
//!
//! Pavé de touches en DONNÉES (aucun widget ici) : libellé, action, style.
//! La vue se contente de parcourir la grille ; la saisie applique les actions.
//!
//!   C  (  )  <  π     sin    cos    tan
//!   7  8  9  *  2π    cosh   tanh   sinh
//!   4  5  6  -  log   inv    mod    e
//!   1  2  3  +  rad   gamma  erf    erfc
//!   .  0  =  /  log2  deg    acosh  asinh
//!         ^  √  log10 log1p  expm1  lgamma

pub const LIGNES: usize = 6;
pub const COLONNES: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StyleTouche {
    Nombre,
    Operateur,
    Defaut,
    Effacer,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Chiffre(char),
    Point,
    Operateur(&'static str),
    Ouvrir,
    Fermer,
    /// insère `nom(`
    Fonction(&'static str),
    /// insère `nom`
    Constante(&'static str),
    /// insère un fragment déjà écrit avec des opérateurs explicites
    Inserer(&'static str),
    Effacer,
    Retour,
    Egal,
    Aucune,
}

#[derive(Clone, Copy, Debug)]
pub struct Touche {
    pub libelle: &'static str,
    pub action: Action,
    pub style: StyleTouche,
}

const fn t(libelle: &'static str, action: Action, style: StyleTouche) -> Touche {
    Touche {
        libelle,
        action,
        style,
    }
}

const fn chiffre(c: char, libelle: &'static str) -> Touche {
    t(libelle, Action::Chiffre(c), StyleTouche::Nombre)
}

const fn op(libelle: &'static str, symbole: &'static str) -> Touche {
    t(libelle, Action::Operateur(symbole), StyleTouche::Operateur)
}

const fn fct(libelle: &'static str, nom: &'static str) -> Touche {
    t(libelle, Action::Fonction(nom), StyleTouche::Operateur)
}

const fn cst(libelle: &'static str, nom: &'static str) -> Touche {
    t(libelle, Action::Constante(nom), StyleTouche::Operateur)
}

const VIDE: Touche = t("", Action::Aucune, StyleTouche::Operateur);

pub static CLAVIER: [[Touche; COLONNES]; LIGNES] = [
    [
        t("C", Action::Effacer, StyleTouche::Defaut),
        t("(", Action::Ouvrir, StyleTouche::Defaut),
        t(")", Action::Fermer, StyleTouche::Defaut),
        t("<", Action::Retour, StyleTouche::Effacer),
        cst("π", "pi"),
        fct("sin", "sin"),
        fct("cos", "cos"),
        fct("tan", "tan"),
    ],
    [
        chiffre('7', "7"),
        chiffre('8', "8"),
        chiffre('9', "9"),
        op("*", "*"),
        t("2π", Action::Inserer("2*pi"), StyleTouche::Operateur),
        fct("cosh", "cosh"),
        fct("tanh", "tanh"),
        fct("sinh", "sinh"),
    ],
    [
        chiffre('4', "4"),
        chiffre('5', "5"),
        chiffre('6', "6"),
        op("-", "-"),
        fct("log", "log"),
        t("inv", Action::Inserer("1/"), StyleTouche::Operateur),
        op("mod", "%"),
        cst("e", "e"),
    ],
    [
        chiffre('1', "1"),
        chiffre('2', "2"),
        chiffre('3', "3"),
        op("+", "+"),
        fct("rad", "radians"),
        fct("gamma", "gamma"),
        fct("erf", "erf"),
        fct("erfc", "erfc"),
    ],
    [
        t(".", Action::Point, StyleTouche::Defaut),
        chiffre('0', "0"),
        t("=", Action::Egal, StyleTouche::Operateur),
        op("/", "/"),
        fct("log2", "log2"),
        fct("deg", "degrees"),
        fct("acosh", "acosh"),
        fct("asinh", "asinh"),
    ],
    [
        VIDE,
        VIDE,
        op("^", "**"),
        fct("√", "sqrt"),
        fct("log10", "log10"),
        fct("log1p", "log1p"),
        fct("expm1", "expm1"),
        fct("lgamma", "lgamma"),
    ],
];

/// Clavier physique : caractère tapé -> action (les lettres passent par les touches).
pub fn action_clavier(c: char) -> Option<Action> {
    match c {
        '0'..='9' => Some(Action::Chiffre(c)),
        '.' | ',' => Some(Action::Point),
        '+' => Some(Action::Operateur("+")),
        '-' => Some(Action::Operateur("-")),
        '*' => Some(Action::Operateur("*")),
        '/' => Some(Action::Operateur("/")),
        '%' => Some(Action::Operateur("%")),
        '^' => Some(Action::Operateur("**")),
        '(' => Some(Action::Ouvrir),
        ')' => Some(Action::Fermer),
        '=' => Some(Action::Egal),
        _ => None,
    }
}
