//! src/noyau/saisie.rs
//!
//! Saisie : tampon d’expression + drapeau “point décimal déjà posé”.
//!
//! Règles d’édition (une touche à la fois) :
//! - C       : tout vider.
//! - "."     : un seul point par opérande.
//! - chiffre : toujours ajouté ; le drapeau est recalculé sur l’opérande courant.
//! - op      : ajouté après un opérande ; "-" accepté en tête ; remplace un op final.
//! - "="     : glyphes × ÷ traduits, op/point final retiré, évaluation, formatage.
//!
//! Contrats :
//! - Hors erreur, l’écran est exactement le tampon.
//! - Après une erreur, l’écran affiche "Error" et le tampon repart de vide.

use tracing::{debug, trace, warn};

use super::eval::{Evaluateur, EvaluateurRationnel};
use super::format::formater;
use super::touche::{est_operateur, Operateur, Touche};

/// Texte affiché quand l’évaluation échoue.
pub const TEXTE_ERREUR: &str = "Error";

/// Classement de l’état courant (lecture seule, pour l’UI et les tests).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Vide,
    Operande,
    ApresOperateur,
    Resultat,
    Erreur,
}

#[derive(Clone, Debug, Default)]
pub struct Saisie<E = EvaluateurRationnel> {
    tampon: String,
    point_pose: bool,
    erreur: bool,
    vient_d_evaluer: bool,
    evaluateur: E,
}

impl Saisie {
    pub fn new() -> Self {
        Self::avec_evaluateur(EvaluateurRationnel)
    }
}

impl<E: Evaluateur> Saisie<E> {
    pub fn avec_evaluateur(evaluateur: E) -> Self {
        Self {
            tampon: String::new(),
            point_pose: false,
            erreur: false,
            vient_d_evaluer: false,
            evaluateur,
        }
    }

    /* ------------------------ Lecture ------------------------ */

    /// Texte de l’écran.
    pub fn ecran(&self) -> &str {
        if self.erreur {
            TEXTE_ERREUR
        } else {
            &self.tampon
        }
    }

    #[cfg(test)]
    pub fn tampon(&self) -> &str {
        &self.tampon
    }

    pub fn point_pose(&self) -> bool {
        self.point_pose
    }

    pub fn en_erreur(&self) -> bool {
        self.erreur
    }

    pub fn phase(&self) -> Phase {
        if self.erreur {
            return Phase::Erreur;
        }
        if self.vient_d_evaluer {
            return Phase::Resultat;
        }
        match self.tampon.chars().last() {
            None => Phase::Vide,
            Some(c) if est_operateur(c) => Phase::ApresOperateur,
            Some(_) => Phase::Operande,
        }
    }

    /* ------------------------ Point d’entrée unique ------------------------ */

    /// Applique une touche et renvoie le nouveau texte d’écran.
    pub fn appliquer(&mut self, touche: Touche) -> &str {
        // l’écran "Error" ne survit qu’une touche
        self.erreur = false;
        self.vient_d_evaluer = false;

        match touche {
            Touche::Effacer => self.effacer(),
            Touche::Point => self.point(),
            Touche::Chiffre(d) => self.chiffre(d),
            Touche::Operateur(op) => self.operateur(op),
            Touche::Egal => self.egal(),
        }

        self.ecran()
    }

    /* ------------------------ Règles ------------------------ */

    fn effacer(&mut self) {
        self.tampon.clear();
        self.point_pose = false;
    }

    fn point(&mut self) {
        if self.point_pose {
            trace!(tampon = %self.tampon, "point ignoré (déjà posé)");
            return;
        }
        self.tampon.push('.');
        self.point_pose = true;
    }

    fn chiffre(&mut self, d: u8) {
        let Some(c) = char::from_digit(u32::from(d), 10) else {
            trace!(d, "chiffre hors 0..=9 ignoré");
            return;
        };
        self.tampon.push(c);
        self.point_pose = self.operande_courant().contains('.');
    }

    fn operateur(&mut self, op: Operateur) {
        match self.tampon.chars().last() {
            Some(c) if !est_operateur(c) => self.tampon.push(op.glyphe()),
            None if op == Operateur::Moins => self.tampon.push(op.glyphe()),
            Some(_) => {
                // dernier op gagne
                self.tampon.pop();
                self.tampon.push(op.glyphe());
            }
            None => trace!(?op, "opérateur ignoré (tampon vide)"),
        }

        // nouvel opérande
        self.point_pose = false;
    }

    fn egal(&mut self) {
        let expression = self.expression();

        match self.evaluateur.evaluer(&expression) {
            Ok(valeur) => {
                let texte = formater(&valeur);
                debug!(%expression, resultat = %texte, "évaluation");
                self.tampon = texte;
                self.vient_d_evaluer = true;
            }
            Err(e) => {
                warn!(%expression, erreur = %e, "évaluation impossible");
                self.tampon.clear();
                self.erreur = true;
            }
        }

        self.point_pose = false;
    }

    /* ------------------------ Helpers ------------------------ */

    /// Opérande en cours de frappe (après le dernier opérateur).
    fn operande_courant(&self) -> &str {
        self.tampon.rsplit(est_operateur).next().unwrap_or("")
    }

    /// Expression transmise à l’évaluateur : × ÷ traduits, op/point final retiré.
    fn expression(&self) -> String {
        let mut expr: String = self
            .tampon
            .chars()
            .map(|c| Operateur::depuis_glyphe(c).map_or(c, Operateur::ascii))
            .collect();

        if matches!(self.tampon.chars().last(), Some(c) if est_operateur(c) || c == '.') {
            expr.pop();
        }
        expr
    }
}
