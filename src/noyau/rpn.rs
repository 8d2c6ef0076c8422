// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur exacte
// Objectif:
// - Convertir une suite de Tok en RPN (postfix)
// - Puis replier la RPN en BigRational
//
// Règles:
// - Moins unaire : '-' qui arrive quand on n’attend PAS une valeur => Tok::Neg (préfixe)
// - Plus unaire : ignoré
// - Neg lie plus fort que * et /, et se dépile devant tout opérateur binaire

use num_rational::BigRational;
use num_traits::Zero;

use super::eval::ErreurEval;
use super::jetons::Tok;

/// Élément de RPN : jeton de lecture ou moins unaire.
#[derive(Clone, Debug, PartialEq)]
pub enum Rpn {
    Tok(Tok),
    Neg,
}

fn precedence(r: &Rpn) -> i32 {
    match r {
        Rpn::Tok(Tok::Plus | Tok::Minus) => 1,
        Rpn::Tok(Tok::Star | Tok::Slash) => 2,
        Rpn::Neg => 3,
        _ => 0,
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Minus, Num(2), Star, LPar, Num(3), Plus, Num(4), RPar]
///   rpn:    [2, Neg, 3, 4, +, *]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Rpn>, ErreurEval> {
    let mut out: Vec<Rpn> = Vec::new();
    let mut ops: Vec<Rpn> = Vec::new();

    // “valeur” = un nombre ou une parenthèse fermée.
    // Sert à détecter les signes unaires.
    let mut prev_was_value = false;

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) => {
                out.push(Rpn::Tok(tok));
                prev_was_value = true;
            }

            Tok::LPar => {
                ops.push(Rpn::Tok(tok));
                prev_was_value = false;
            }

            Tok::RPar => {
                let mut ouverte = false;
                while let Some(top) = ops.pop() {
                    if matches!(top, Rpn::Tok(Tok::LPar)) {
                        ouverte = true;
                        break;
                    }
                    out.push(top);
                }
                if !ouverte {
                    return Err(ErreurEval::ParentheseInattendue);
                }
                prev_was_value = true;
            }

            Tok::Minus if !prev_was_value => {
                // préfixe : rien à dépiler
                ops.push(Rpn::Neg);
            }

            Tok::Plus if !prev_was_value => {}

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                let courant = Rpn::Tok(tok);

                // gauche-associatif : on sort tout ce qui lie au moins aussi fort
                while let Some(top) = ops.last() {
                    if matches!(top, Rpn::Tok(Tok::LPar)) {
                        break;
                    }
                    if precedence(top) < precedence(&courant) {
                        break;
                    }
                    if let Some(top) = ops.pop() {
                        out.push(top);
                    }
                }

                ops.push(courant);
                prev_was_value = false;
            }
        }
    }

    while let Some(op) = ops.pop() {
        if matches!(op, Rpn::Tok(Tok::LPar)) {
            return Err(ErreurEval::ParenthesesNonFermees);
        }
        out.push(op);
    }

    Ok(out)
}

/// Replie une RPN en valeur exacte.
pub fn evaluer_rpn(rpn: &[Rpn]) -> Result<BigRational, ErreurEval> {
    let mut st: Vec<BigRational> = Vec::new();

    for r in rpn {
        match r {
            Rpn::Tok(Tok::Num(v)) => st.push(v.clone()),

            Rpn::Neg => {
                let x = st.pop().ok_or(ErreurEval::ExpressionInvalide)?;
                st.push(-x);
            }

            Rpn::Tok(op @ (Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash)) => {
                let b = st.pop().ok_or(ErreurEval::ExpressionInvalide)?;
                let a = st.pop().ok_or(ErreurEval::ExpressionInvalide)?;

                let v = match op {
                    Tok::Plus => a + b,
                    Tok::Minus => a - b,
                    Tok::Star => a * b,
                    _ => {
                        if b.is_zero() {
                            return Err(ErreurEval::DivisionParZero);
                        }
                        a / b
                    }
                };
                st.push(v);
            }

            Rpn::Tok(Tok::LPar | Tok::RPar) => return Err(ErreurEval::ParentheseInattendue),
        }
    }

    match (st.pop(), st.is_empty()) {
        (Some(v), true) => Ok(v),
        _ => Err(ErreurEval::ExpressionInvalide),
    }
}
