//! Tests de saisie (campagne) : règles d’édition + évaluation + fuzz borné.
//!
//! - Scénarios “boutons” : mêmes libellés que le pavé
//! - Évaluateur espion : vérifie l’expression réellement transmise
//! - Fuzz : RNG déterministe (seed fixe), invariants du tampon à chaque touche

use std::cell::RefCell;

use super::eval::{ErreurEval, Evaluateur, Valeur};
use super::saisie::{Saisie, TEXTE_ERREUR};
use super::touche::{est_operateur, Operateur, Touche};

fn taper<E: Evaluateur>(s: &mut Saisie<E>, touches: &str) -> String {
    for c in touches.chars() {
        let t = Touche::depuis_libelle(&c.to_string())
            .unwrap_or_else(|| panic!("touche inconnue {c:?}"));
        s.appliquer(t);
    }
    s.ecran().to_string()
}

fn ecran_apres(touches: &str) -> String {
    let mut s = Saisie::new();
    taper(&mut s, touches)
}

/* ------------------------ Évaluateur espion ------------------------ */

#[derive(Default)]
struct Espion {
    vus: RefCell<Vec<String>>,
    reponse: Option<Valeur>,
}

impl Evaluateur for Espion {
    fn evaluer(&self, expression: &str) -> Result<Valeur, ErreurEval> {
        self.vus.borrow_mut().push(expression.to_string());
        self.reponse.clone().ok_or(ErreurEval::ExpressionInvalide)
    }
}

/* ------------------------ Chiffres / point ------------------------ */

#[test]
fn chiffres_concatenes() {
    assert_eq!(ecran_apres("0123456789"), "0123456789");
    assert_eq!(ecran_apres("007"), "007");
}

#[test]
fn un_seul_point_par_operande() {
    assert_eq!(ecran_apres("1..5"), "1.5");
    assert_eq!(ecran_apres("1.5.2"), "1.52");
    // nouvel opérande => nouveau point autorisé
    assert_eq!(ecran_apres("1.5+2.5"), "1.5+2.5");
    assert_eq!(ecran_apres("1.5+.."), "1.5+.");
}

#[test]
fn drapeau_recalcule_sur_chiffre() {
    let mut s = Saisie::new();
    taper(&mut s, "3.");
    assert!(s.point_pose());
    taper(&mut s, "×");
    assert!(!s.point_pose());
    taper(&mut s, "4");
    assert!(!s.point_pose());
    taper(&mut s, ".");
    assert!(s.point_pose());
}

/* ------------------------ Opérateurs ------------------------ */

#[test]
fn dernier_operateur_gagne() {
    assert_eq!(ecran_apres("3+-"), "3-");
    assert_eq!(ecran_apres("3×÷+"), "3+");
}

#[test]
fn moins_en_tete_seulement() {
    assert_eq!(ecran_apres("-"), "-");
    assert_eq!(ecran_apres("+"), "");
    assert_eq!(ecran_apres("×"), "");
    assert_eq!(ecran_apres("÷"), "");
    assert_eq!(ecran_apres("-5×2"), "-5×2");
}

#[test]
fn moins_initial_remplacable() {
    // "-" puis "+" : le dernier caractère est un opérateur => remplacé
    assert_eq!(ecran_apres("-+"), "+");
}

/* ------------------------ Égal ------------------------ */

#[test]
fn evaluation_simple() {
    assert_eq!(ecran_apres("3+4="), "7");
    assert_eq!(ecran_apres("6×7="), "42");
    assert_eq!(ecran_apres("1÷4="), "0.25");
    assert_eq!(ecran_apres("-5×2="), "-10");
    assert_eq!(ecran_apres("2+3×4="), "14");
}

#[test]
fn operateur_ou_point_final_retire() {
    assert_eq!(ecran_apres("3+="), "3");
    assert_eq!(ecran_apres("3.="), "3");
    assert_eq!(ecran_apres("1+2.="), "3");
}

#[test]
fn formatage_du_resultat() {
    assert_eq!(ecran_apres("1÷3="), "0.3333333333");
    assert_eq!(ecran_apres("0.1+0.2="), "0.3");
    assert_eq!(ecran_apres("123456789012="), "1.2345678901e+11");
    assert_eq!(ecran_apres("1÷100000000000="), "1e-11");
    // demi-cas exact : arrondi loin de zéro
    assert_eq!(ecran_apres("1÷2048="), "0.0004882813");
    assert_eq!(ecran_apres("-1÷2048="), "-0.0004882813");
}

#[test]
fn division_par_zero_puis_c() {
    let mut s = Saisie::new();
    assert_eq!(taper(&mut s, "10÷0="), TEXTE_ERREUR);
    assert!(s.en_erreur());
    assert_eq!(taper(&mut s, "C"), "");
    assert!(!s.en_erreur());
}

#[test]
fn egal_sur_vide_ou_moins_seul() {
    assert_eq!(ecran_apres("="), TEXTE_ERREUR);
    assert_eq!(ecran_apres("-="), TEXTE_ERREUR);
}

#[test]
fn apres_erreur_on_repart_de_vide() {
    let mut s = Saisie::new();
    taper(&mut s, "1÷0=");
    assert_eq!(s.tampon(), "");
    assert_eq!(taper(&mut s, "5"), "5");

    let mut s = Saisie::new();
    taper(&mut s, "1÷0=");
    // tampon vide : "+" est ignoré, l’écran se vide
    assert_eq!(taper(&mut s, "+"), "");
}

#[test]
fn resultat_reutilisable() {
    let mut s = Saisie::new();
    assert_eq!(taper(&mut s, "3+4="), "7");
    assert!(!s.point_pose());
    assert_eq!(taper(&mut s, "×2="), "14");
    // chiffre après résultat : concaténé (comportement d’origine)
    assert_eq!(taper(&mut s, "5"), "145");
}

#[test]
fn resultat_scientifique_reutilisable() {
    let mut s = Saisie::new();
    assert_eq!(taper(&mut s, "20000000000×2="), "4e+10");
    // le résultat "4e+10" est relu par l’évaluateur
    assert_eq!(taper(&mut s, "÷8="), "5000000000");
}

#[test]
fn point_apres_resultat_decimal() {
    // drapeau remis à faux après "=" : un point peut suivre "3.5"
    let mut s = Saisie::new();
    assert_eq!(taper(&mut s, "7÷2="), "3.5");
    assert_eq!(taper(&mut s, "."), "3.5.");
    assert_eq!(taper(&mut s, "="), "3.5");
}

#[test]
fn expression_transmise() {
    let espion = Espion {
        reponse: Some(Valeur::Nombre(3.0)),
        ..Default::default()
    };
    let mut s = Saisie::avec_evaluateur(&espion);

    assert_eq!(taper(&mut s, "1×2÷3-="), "3");
    assert_eq!(taper(&mut s, "C4.="), "3");
    assert_eq!(
        *espion.vus.borrow(),
        vec!["1*2/3".to_string(), "4".to_string()]
    );
}

#[test]
fn valeur_autre_affichee_telle_quelle() {
    let espion = Espion {
        reponse: Some(Valeur::Autre("1/3".into())),
        ..Default::default()
    };
    let mut s = Saisie::avec_evaluateur(&espion);
    assert_eq!(taper(&mut s, "1÷3="), "1/3");
}

#[test]
fn echec_evaluateur() {
    let espion = Espion::default();
    let mut s = Saisie::avec_evaluateur(&espion);
    assert_eq!(taper(&mut s, "9="), TEXTE_ERREUR);
    assert!(!s.point_pose());
}

impl<E: Evaluateur + ?Sized> Evaluateur for &E {
    fn evaluer(&self, expression: &str) -> Result<Valeur, ErreurEval> {
        (**self).evaluer(expression)
    }
}

/* ------------------------ Fuzz (invariants) ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        self.next_u32() % n
    }
}

fn touche_aleatoire(rng: &mut Rng, avec_egal: bool) -> Touche {
    match rng.pick(if avec_egal { 20 } else { 18 }) {
        0..=9 => Touche::Chiffre(rng.pick(10) as u8),
        10 | 11 => Touche::Point,
        12..=15 => Touche::Operateur(Operateur::TOUS[rng.pick(4) as usize]),
        16 | 17 => Touche::Effacer,
        _ => Touche::Egal,
    }
}

fn verifier_tampon(t: &str) {
    let chars: Vec<char> = t.chars().collect();

    // jamais deux opérateurs consécutifs
    for w in chars.windows(2) {
        assert!(
            !(est_operateur(w[0]) && est_operateur(w[1])),
            "opérateurs consécutifs dans {t:?}"
        );
    }

    // au plus un point par opérande
    for seg in t.split(est_operateur) {
        assert!(seg.matches('.').count() <= 1, "deux points dans {seg:?} ({t:?})");
    }

    // seulement chiffres, point, opérateurs
    assert!(
        chars
            .iter()
            .all(|c| c.is_ascii_digit() || *c == '.' || est_operateur(*c)),
        "caractère inattendu dans {t:?}"
    );
}

#[test]
fn fuzz_ecran_miroir_du_tampon() {
    let mut rng = Rng::new(0x5EED_CA1C);

    for _ in 0..300 {
        let mut s = Saisie::new();
        for _ in 0..40 {
            let t = touche_aleatoire(&mut rng, false);
            let ecran = s.appliquer(t).to_string();
            assert_eq!(ecran, s.tampon());
            verifier_tampon(s.tampon());
        }
    }
}

#[test]
fn fuzz_egal_ne_panique_jamais() {
    let mut rng = Rng::new(42);

    for _ in 0..200 {
        let mut s = Saisie::new();
        for _ in 0..30 {
            let t = touche_aleatoire(&mut rng, true);
            let ecran = s.appliquer(t).to_string();
            if s.en_erreur() {
                assert_eq!(ecran, TEXTE_ERREUR);
                assert!(s.tampon().is_empty());
            } else {
                assert_eq!(ecran, s.tampon());
            }
            assert!(!s.point_pose() || s.tampon().contains('.'));
        }
    }
}
