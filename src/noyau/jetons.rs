// src/noyau/jetons.rs

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::One;

use super::eval::ErreurEval;

/// Garde-fou : |exposant| maximal d’un littéral scientifique (anti-gel BigInt).
const EXPOSANT_MAX: u32 = 400;

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(BigRational),

    Plus,
    Minus,
    Star,
    Slash,

    LPar,
    RPar,
}

/// Tokenize une expression arithmétique (glyphes déjà traduits).
/// Supporte:
/// - décimaux : 12, 1.5, 5., .5
/// - notation scientifique : 1.5e+20, 2e-3, 4E2
/// - opérateurs + - * /
/// - parenthèses ( )
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurEval> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        let simple = match c {
            '(' => Some(Tok::LPar),
            ')' => Some(Tok::RPar),
            '+' => Some(Tok::Plus),
            '-' => Some(Tok::Minus),
            '*' => Some(Tok::Star),
            '/' => Some(Tok::Slash),
            _ => None,
        };
        if let Some(t) = simple {
            out.push(t);
            i += 1;
            continue;
        }

        if c.is_ascii_digit() || c == '.' {
            let (rat, fin) = lire_nombre(&chars, i)?;
            out.push(Tok::Num(rat));
            i = fin;
            continue;
        }

        return Err(ErreurEval::CaractereInattendu(c));
    }

    Ok(out)
}

/// Lit un littéral décimal à partir de `debut`; renvoie (valeur exacte, index suivant).
fn lire_nombre(chars: &[char], debut: usize) -> Result<(BigRational, usize), ErreurEval> {
    let mut i = debut;
    let mut mantisse = String::new();
    let mut decimales: u32 = 0;

    while i < chars.len() && chars[i].is_ascii_digit() {
        mantisse.push(chars[i]);
        i += 1;
    }

    if i < chars.len() && chars[i] == '.' {
        i += 1;
        while i < chars.len() && chars[i].is_ascii_digit() {
            mantisse.push(chars[i]);
            decimales += 1;
            i += 1;
        }
    }

    let brut = |fin: usize| chars[debut..fin].iter().collect::<String>();

    // "." seul
    if mantisse.is_empty() {
        return Err(ErreurEval::NombreInvalide(brut(i)));
    }

    let mut exposant: i64 = 0;
    if i < chars.len() && (chars[i] == 'e' || chars[i] == 'E') {
        i += 1;
        let mut negatif = false;
        if i < chars.len() && (chars[i] == '+' || chars[i] == '-') {
            negatif = chars[i] == '-';
            i += 1;
        }

        let debut_exp = i;
        while i < chars.len() && chars[i].is_ascii_digit() {
            i += 1;
        }
        if debut_exp == i {
            return Err(ErreurEval::NombreInvalide(brut(i)));
        }

        let texte: String = chars[debut_exp..i].iter().collect();
        let e = texte
            .parse::<u32>()
            .ok()
            .filter(|e| *e <= EXPOSANT_MAX)
            .ok_or_else(|| ErreurEval::ExposantHorsLimites(brut(i)))?;
        exposant = if negatif { -i64::from(e) } else { i64::from(e) };
    }

    let n = BigInt::parse_bytes(mantisse.as_bytes(), 10)
        .ok_or_else(|| ErreurEval::NombreInvalide(brut(i)))?;

    // mantisse × 10^(exposant - decimales)
    let puissance = exposant - i64::from(decimales);
    let dix = BigInt::from(10);
    let rat = if puissance >= 0 {
        BigRational::from_integer(n * dix.pow(puissance.unsigned_abs() as u32))
    } else {
        BigRational::new(n, dix.pow(puissance.unsigned_abs() as u32))
    };

    Ok((rat, i))
}

/// Format utilitaire (logs) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    fn format_rat(r: &BigRational) -> String {
        let n = r.numer();
        let d = r.denom();
        if d.is_one() {
            format!("{n}")
        } else {
            format!("{n}/{d}")
        }
    }

    tokens
        .iter()
        .map(|t| match t {
            Tok::Num(r) => format_rat(r),
            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
