//! Évaluateur — collaborateur “externe” de la saisie
//!
//! tokenize -> RPN -> repli exact (BigRational) -> f64
//!
//! La saisie ne connaît que le trait [`Evaluateur`] : on peut lui brancher
//! un autre moteur (ou un double de test) sans toucher aux règles d’édition.

use num_rational::BigRational;
use num_traits::{One, ToPrimitive};
use thiserror::Error;

use super::jetons::{format_tokens, tokenize};
use super::rpn::{evaluer_rpn, to_rpn};

/// Échec d’évaluation. Côté écran, toutes les variantes deviennent "Error".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurEval {
    #[error("expression vide")]
    Vide,

    #[error("caractère inattendu: '{0}'")]
    CaractereInattendu(char),

    #[error("nombre invalide: {0:?}")]
    NombreInvalide(String),

    #[error("exposant hors limites: {0:?}")]
    ExposantHorsLimites(String),

    #[error("parenthèses non fermées")]
    ParenthesesNonFermees,

    #[error("parenthèse fermante inattendue")]
    ParentheseInattendue,

    #[error("expression invalide")]
    ExpressionInvalide,

    #[error("division par zéro")]
    DivisionParZero,
}

/// Résultat d’évaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum Valeur {
    /// Valeur numérique ordinaire.
    Nombre(f64),
    /// Valeur représentable autrement (ex: rationnel hors de portée de f64).
    Autre(String),
}

pub trait Evaluateur {
    fn evaluer(&self, expression: &str) -> Result<Valeur, ErreurEval>;
}

/// Évaluateur par défaut : arithmétique exacte, conversion f64 à la fin.
#[derive(Clone, Copy, Debug, Default)]
pub struct EvaluateurRationnel;

impl Evaluateur for EvaluateurRationnel {
    fn evaluer(&self, expression: &str) -> Result<Valeur, ErreurEval> {
        let s = expression.trim();
        if s.is_empty() {
            return Err(ErreurEval::Vide);
        }

        let jetons = tokenize(s)?;
        tracing::trace!(jetons = %format_tokens(&jetons), "jetons");

        let rpn = to_rpn(&jetons)?;
        let exact = evaluer_rpn(&rpn)?;

        Ok(vers_valeur(&exact))
    }
}

fn vers_valeur(r: &BigRational) -> Valeur {
    match r.to_f64() {
        Some(x) if x.is_finite() => Valeur::Nombre(x),
        _ => Valeur::Autre(format_rat(r)),
    }
}

fn format_rat(r: &BigRational) -> String {
    if r.denom().is_one() {
        format!("{}", r.numer())
    } else {
        format!("{}/{}", r.numer(), r.denom())
    }
}
