//! Noyau de la calculatrice
//!
//! Organisation interne :
//! - touche.rs   : touches du pavé (chiffres, point, opérateurs, C, =)
//! - saisie.rs   : tampon d’expression + règles d’édition
//! - jetons.rs   : tokenisation (décimaux, notation scientifique)
//! - rpn.rs      : shunting-yard + repli exact
//! - eval.rs     : évaluateur (trait + implémentation rationnelle)
//! - format.rs   : affichage du résultat (fixe / exponentiel)

pub mod eval;
pub mod format;
pub mod jetons;
pub mod rpn;
pub mod saisie;
pub mod touche;

#[cfg(test)]
mod tests_saisie;

// API publique minimale
pub use saisie::Saisie;
pub use touche::Touche;
