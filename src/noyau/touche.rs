// src/noyau/touche.rs
//
// Touches de la calculatrice (un clic = une touche)
// -------------------------------------------------
// - Libellés des boutons : "0".."9", ".", "+", "-", "×", "÷", "C", "="
// - Clavier : mêmes libellés + alias ASCII (*, /, x, −)

/// Opérateur binaire tel qu’affiché à l’écran.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operateur {
    pub const TOUS: [Operateur; 4] = [
        Operateur::Plus,
        Operateur::Moins,
        Operateur::Fois,
        Operateur::Divise,
    ];

    /// Glyphe écran (le moins est le tiret ASCII).
    pub fn glyphe(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => '×',
            Operateur::Divise => '÷',
        }
    }

    /// Glyphe compris par l’évaluateur.
    pub fn ascii(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => '*',
            Operateur::Divise => '/',
        }
    }

    pub fn depuis_glyphe(c: char) -> Option<Operateur> {
        Self::TOUS.into_iter().find(|op| op.glyphe() == c)
    }
}

/// Vrai si `c` est un glyphe d’opérateur écran (+ - × ÷).
pub fn est_operateur(c: char) -> bool {
    Operateur::depuis_glyphe(c).is_some()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    Chiffre(u8),
    Point,
    Operateur(Operateur),
    Effacer,
    Egal,
}

impl Touche {
    /// Libellé du bouton.
    pub fn libelle(self) -> String {
        match self {
            Touche::Chiffre(d) => d.to_string(),
            Touche::Point => ".".to_string(),
            Touche::Operateur(op) => op.glyphe().to_string(),
            Touche::Effacer => "C".to_string(),
            Touche::Egal => "=".to_string(),
        }
    }

    /// Touche portée par un libellé de bouton (strict).
    pub fn depuis_libelle(s: &str) -> Option<Touche> {
        let mut it = s.chars();
        let c = it.next()?;
        if it.next().is_some() {
            return None;
        }

        match c {
            '0'..='9' => Some(Touche::Chiffre(c as u8 - b'0')),
            '.' => Some(Touche::Point),
            'C' => Some(Touche::Effacer),
            '=' => Some(Touche::Egal),
            _ => Operateur::depuis_glyphe(c).map(Touche::Operateur),
        }
    }

    /// Touche correspondant à un texte tapé au clavier (alias tolérés).
    pub fn depuis_clavier(s: &str) -> Option<Touche> {
        match s {
            "*" | "x" | "X" => Some(Touche::Operateur(Operateur::Fois)),
            "/" | ":" => Some(Touche::Operateur(Operateur::Divise)),
            "−" => Some(Touche::Operateur(Operateur::Moins)),
            "," => Some(Touche::Point),
            "c" => Some(Touche::Effacer),
            _ => Self::depuis_libelle(s),
        }
    }
}
