// src/noyau/format.rs
//
// Affichage d’un résultat numérique
// ---------------------------------
// - grands / tout petits nombres : notation exponentielle, 10 décimales max,
//   zéros de queue retirés ("1.5000000000e+20" -> "1.5e+20")
// - sinon : arrondi à 10 décimales puis forme la plus courte ("3.0" -> "3")

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Signed;

use super::eval::Valeur;

/// Décimales maximales affichées.
pub const DECIMALES_MAX: usize = 10;

/// Au-delà (en valeur absolue) : notation exponentielle.
const SEUIL_HAUT: f64 = 1e10;

/// En deçà (valeur absolue, hors zéro) : notation exponentielle.
const SEUIL_BAS: f64 = 1e-10;

/// Texte écran d’un résultat. N’échoue jamais.
pub fn formater(v: &Valeur) -> String {
    match v {
        Valeur::Nombre(x) => formater_nombre(*x),
        Valeur::Autre(s) => s.clone(),
    }
}

pub fn formater_nombre(x: f64) -> String {
    if !x.is_finite() {
        return texte_non_fini(x);
    }

    let a = x.abs();
    if a >= SEUIL_HAUT || (a != 0.0 && a <= SEUIL_BAS) {
        let brut = format!("{:.*e}", DECIMALES_MAX, x);
        let (mantisse, exposant) = scinder_exposant(&brut);
        let mantisse = if mantisse.contains('.') {
            mantisse.trim_end_matches('0').trim_end_matches('.')
        } else {
            mantisse
        };
        return format!("{mantisse}{}", exposant_signe(exposant));
    }

    texte_court(arrondi_fixe(x))
}

/// Arrondi à DECIMALES_MAX décimales, demi-cas loin de zéro, puis relecture
/// (retire les zéros de queue). Calcul exact : 1/2048 -> 0.0004882813.
fn arrondi_fixe(x: f64) -> f64 {
    let Some(r) = BigRational::from_float(x) else {
        return x;
    };

    let echelle = BigInt::from(10).pow(DECIMALES_MAX as u32);
    let n = (r * BigRational::from_integer(echelle.clone()))
        .round()
        .to_integer();

    scaled_to_decimal(&n, &echelle)
        .parse::<f64>()
        .unwrap_or(x)
}

/* ------------------------ Helpers ------------------------ */

fn texte_non_fini(x: f64) -> String {
    if x.is_nan() {
        "NaN".to_string()
    } else if x > 0.0 {
        "Infinity".to_string()
    } else {
        "-Infinity".to_string()
    }
}

/// Entier “scalé” (×échelle) -> texte décimal : 4882813 -> "0.0004882813".
fn scaled_to_decimal(scaled: &BigInt, echelle: &BigInt) -> String {
    let signe = if scaled.is_negative() { "-" } else { "" };
    let abs = scaled.abs();

    let mut frac = (&abs % echelle).to_str_radix(10);
    while frac.len() < DECIMALES_MAX {
        frac.insert(0, '0');
    }

    format!("{signe}{}.{frac}", &abs / echelle)
}

/// "1.5e20" -> ("1.5", "20")
fn scinder_exposant(s: &str) -> (&str, &str) {
    s.split_once('e').unwrap_or((s, "0"))
}

/// Exposant avec signe explicite : "20" -> "e+20", "-11" -> "e-11".
fn exposant_signe(exposant: &str) -> String {
    if exposant.starts_with('-') {
        format!("e{exposant}")
    } else {
        format!("e+{exposant}")
    }
}

/// Forme la plus courte qui relit la même valeur.
/// Sous 1e-6 (ou à partir de 1e21) on passe en exponentielle, comme un navigateur.
fn texte_court(x: f64) -> String {
    if x == 0.0 {
        // -0 s’affiche "0"
        return "0".to_string();
    }

    let a = x.abs();
    if a < 1e-6 || a >= 1e21 {
        let brut = format!("{x:e}");
        let (mantisse, exposant) = scinder_exposant(&brut);
        return format!("{mantisse}{}", exposant_signe(exposant));
    }

    format!("{x}")
}
