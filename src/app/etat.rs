//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder la saisie (tampon + drapeau décimal) et router les touches
//! venues des boutons ou du clavier. Aucune règle d’édition ici : tout passe
//! par `Saisie::appliquer`.

use crate::noyau::saisie::Phase;
use crate::noyau::{Saisie, Touche};

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    saisie: Saisie,
}

impl AppCalc {
    /// Une touche (bouton ou clavier) => saisie.
    pub fn appuyer(&mut self, touche: Touche) {
        self.saisie.appliquer(touche);
    }

    /// Plusieurs touches dans l’ordre d’arrivée.
    pub fn appuyer_tout(&mut self, touches: impl IntoIterator<Item = Touche>) {
        for t in touches {
            self.appuyer(t);
        }
    }

    pub fn ecran(&self) -> &str {
        self.saisie.ecran()
    }

    pub fn phase(&self) -> Phase {
        self.saisie.phase()
    }

    pub fn en_erreur(&self) -> bool {
        self.saisie.en_erreur()
    }

    /// Vrai si "." serait ignoré (point déjà posé dans l’opérande).
    pub fn point_pose(&self) -> bool {
        self.saisie.point_pose()
    }
}
