// src/noyau/jetons.rs
//
// Tokenisation stricte : l’ensemble des jetons est FERMÉ.
// - nombres décimaux (un seul point), exposant E±dd optionnel
// - opérateurs + - * / % ** (et ^ comme synonyme de **)
// - parenthèses ( )
// - identifiants : uniquement des noms de la table (π -> pi, √ -> sqrt)
//
// Pas de multiplication implicite : "2pi" est refusé ici, pas transformé en "2*pi".

use super::erreurs::LexError;
use super::fonctions;

/// Garde-fou : au-delà, on refuse (la saisie UI est bornée bien plus bas).
pub const LONGUEUR_MAX_ENTREE: usize = 4096;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Associativite {
    Gauche,
    Droite,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Plus,
    Moins,
    Fois,
    Div,
    Mod,
    Puiss, // **
}

impl Op {
    pub fn symbole(self) -> &'static str {
        match self {
            Op::Plus => "+",
            Op::Moins => "-",
            Op::Fois => "*",
            Op::Div => "/",
            Op::Mod => "%",
            Op::Puiss => "**",
        }
    }

    pub fn precedence(self) -> u8 {
        match self {
            Op::Plus | Op::Moins => 1,
            Op::Fois | Op::Div | Op::Mod => 2,
            Op::Puiss => 3,
        }
    }

    pub fn associativite(self) -> Associativite {
        match self {
            Op::Puiss => Associativite::Droite,
            _ => Associativite::Gauche,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),
    Op(Op),
    LPar,
    RPar,
    // Toujours un nom de la table (jamais un texte libre).
    Ident(&'static str),
}

/// Tokenize une chaîne en jetons.
pub fn tokenize(s: &str) -> Result<Vec<Tok>, LexError> {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() > LONGUEUR_MAX_ENTREE {
        return Err(LexError::EntreeTropLongue {
            longueur: chars.len(),
        });
    }

    let mut out = Vec::new();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        match c {
            '(' => {
                out.push(Tok::LPar);
                i += 1;
                continue;
            }
            ')' => {
                out.push(Tok::RPar);
                i += 1;
                continue;
            }
            '+' => {
                out.push(Tok::Op(Op::Plus));
                i += 1;
                continue;
            }
            '-' => {
                out.push(Tok::Op(Op::Moins));
                i += 1;
                continue;
            }
            '*' => {
                // ** avant *
                if chars.get(i + 1) == Some(&'*') {
                    out.push(Tok::Op(Op::Puiss));
                    i += 2;
                } else {
                    out.push(Tok::Op(Op::Fois));
                    i += 1;
                }
                continue;
            }
            '^' => {
                out.push(Tok::Op(Op::Puiss));
                i += 1;
                continue;
            }
            '/' => {
                out.push(Tok::Op(Op::Div));
                i += 1;
                continue;
            }
            '%' => {
                out.push(Tok::Op(Op::Mod));
                i += 1;
                continue;
            }
            'π' => {
                out.push(Tok::Ident("pi"));
                i += 1;
                continue;
            }
            '√' => {
                out.push(Tok::Ident("sqrt"));
                i += 1;
                continue;
            }
            _ => {}
        }

        // Nombre : chiffre, ou point suivi d’un chiffre
        let debut_nombre = c.is_ascii_digit()
            || (c == '.' && chars.get(i + 1).is_some_and(|d| d.is_ascii_digit()));
        if debut_nombre {
            let (valeur, fin) = lire_nombre(&chars, i)?;
            out.push(Tok::Num(valeur));
            i = fin;
            continue;
        }

        // Identifiant : [a-zA-Z][a-zA-Z0-9]* (normalisé en minuscules)
        if c.is_ascii_alphabetic() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_alphanumeric() {
                i += 1;
            }
            let mot: String = chars[start..i].iter().collect::<String>().to_lowercase();

            // Le plus long nom de la table doit couvrir TOUT le mot.
            match fonctions::plus_long_prefixe(&mot) {
                Some(f) if f.nom.len() == mot.len() => out.push(Tok::Ident(f.nom)),
                _ => return Err(LexError::IdentifiantInconnu { nom: mot }),
            }
            continue;
        }

        return Err(LexError::CaractereInattendu {
            caractere: c,
            position: i,
        });
    }

    Ok(out)
}

/// Lit un littéral décimal à partir de `start`. Retourne (valeur, index de fin).
fn lire_nombre(chars: &[char], start: usize) -> Result<(f64, usize), LexError> {
    let mut i = start;
    let mut point_vu = false;

    while i < chars.len() {
        let c = chars[i];
        if c.is_ascii_digit() {
            i += 1;
        } else if c == '.' {
            if point_vu {
                return Err(LexError::DeuxPoints { position: i });
            }
            point_vu = true;
            i += 1;
        } else {
            break;
        }
    }

    // Exposant : E, signe optionnel, AU MOINS un chiffre (sinon ce n’est pas un exposant)
    if i < chars.len() && (chars[i] == 'e' || chars[i] == 'E') {
        let mut j = i + 1;
        if j < chars.len() && (chars[j] == '+' || chars[j] == '-') {
            j += 1;
        }
        if j < chars.len() && chars[j].is_ascii_digit() {
            while j < chars.len() && chars[j].is_ascii_digit() {
                j += 1;
            }
            i = j;
        }
    }

    // Collé à une lettre : multiplication implicite interdite ("2pi", "3sin(1)")
    if let Some(&c) = chars.get(i) {
        if c.is_alphabetic() || c == '_' || c == '√' {
            return Err(LexError::MultiplicationImplicite { position: i });
        }
        if c == '.' {
            return Err(LexError::DeuxPoints { position: i });
        }
    }

    let texte: String = chars[start..i].iter().collect();
    let valeur: f64 = texte
        .parse()
        .map_err(|_| LexError::NombreInvalide {
            texte: texte.clone(),
        })?;
    if !valeur.is_finite() {
        return Err(LexError::NombreInvalide { texte });
    }

    Ok((valeur, i))
}

/// Format utilitaire (debug/“démarche”) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(v) => format!("{v}"),
            Tok::Op(op) => op.symbole().to_string(),
            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
            Tok::Ident(nom) => nom.to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
