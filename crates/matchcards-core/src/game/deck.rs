//! Card tokens and deck construction.

use std::fmt;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::game::GameRules;

/// Face names used when no catalog is configured.
pub const DEFAULT_CATALOG: [&str; 10] = [
    "darkness",
    "double",
    "fairy",
    "fighting",
    "fire",
    "grass",
    "lightning",
    "metal",
    "psychic",
    "water",
];

pub const DEFAULT_BACK: &str = "back";

/// Symbolic identity of a card face.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Token(String);

impl Token {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Token {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Token {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Face names to deal from and the back shown on every hidden card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub faces: Vec<Token>,
    pub back: Token,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            faces: DEFAULT_CATALOG.iter().copied().map(Token::from).collect(),
            back: Token::from(DEFAULT_BACK),
        }
    }
}

impl Catalog {
    pub fn new<I, T>(faces: I, back: impl Into<Token>) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Token>,
    {
        Self {
            faces: faces.into_iter().map(Into::into).collect(),
            back: back.into(),
        }
    }
}

/// A shuffled layout for one grid plus the shared back token.
#[derive(Debug, Clone)]
pub struct Deck {
    tokens: Vec<Token>,
    back: Token,
}

impl Deck {
    /// Build and shuffle a deck for `rules`.
    pub fn new<R: Rng + ?Sized>(
        rules: &GameRules,
        catalog: &Catalog,
        rng: &mut R,
    ) -> Result<Self> {
        let tokens = Self::build(rules.rows, rules.columns, &catalog.faces)?;
        Ok(Self {
            tokens: Self::shuffle(tokens, rng),
            back: catalog.back.clone(),
        })
    }

    /// Use `tokens` exactly as given, e.g. to replay a known layout.
    pub fn arranged(tokens: Vec<Token>, back: impl Into<Token>) -> Self {
        Self {
            tokens,
            back: back.into(),
        }
    }

    /// Lay out `rows * columns / 2` faces in catalog order, each twice.
    ///
    /// The catalog is cycled when it is shorter than the number of pairs,
    /// so a short catalog yields faces that occur four (or more) times.
    pub fn build(rows: usize, columns: usize, catalog: &[Token]) -> Result<Vec<Token>> {
        let cells = rows * columns;
        if cells == 0 || cells % 2 != 0 {
            return Err(Error::InvalidGrid { rows, columns });
        }
        if catalog.is_empty() {
            return Err(Error::EmptyCatalog);
        }

        let pairs = cells / 2;
        if pairs > catalog.len() {
            debug!(
                "Catalog has {} faces for {} pairs, cycling",
                catalog.len(),
                pairs
            );
        }

        let mut tokens = Vec::with_capacity(cells);
        for face in catalog.iter().cycle().take(pairs) {
            tokens.push(face.clone());
            tokens.push(face.clone());
        }
        Ok(tokens)
    }

    /// Uniform permutation (Fisher–Yates).
    pub fn shuffle<R: Rng + ?Sized>(mut tokens: Vec<Token>, rng: &mut R) -> Vec<Token> {
        tokens.shuffle(rng);
        tokens
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn back(&self) -> &Token {
        &self.back
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn into_parts(self) -> (Vec<Token>, Token) {
        (self.tokens, self.back)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Difficulty;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashMap;

    fn counts(tokens: &[Token]) -> HashMap<&Token, usize> {
        let mut map = HashMap::new();
        for token in tokens {
            *map.entry(token).or_insert(0) += 1;
        }
        map
    }

    #[test]
    fn test_build_pairs_every_face() {
        let catalog = Catalog::default().faces;
        for (rows, columns) in [(1, 2), (2, 2), (3, 4), (4, 4), (4, 5), (2, 3)] {
            let tokens = Deck::build(rows, columns, &catalog).unwrap();
            assert_eq!(tokens.len(), rows * columns);
            let counts = counts(&tokens);
            assert_eq!(counts.len(), rows * columns / 2);
            assert!(counts.values().all(|&n| n == 2), "{rows}x{columns}");
        }
    }

    #[test]
    fn test_build_uses_catalog_order() {
        let catalog = Catalog::default().faces;
        let tokens = Deck::build(2, 2, &catalog).unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::from("darkness"),
                Token::from("darkness"),
                Token::from("double"),
                Token::from("double"),
            ]
        );
    }

    #[test]
    fn test_build_rejects_odd_grid() {
        let catalog = Catalog::default().faces;
        let err = Deck::build(3, 3, &catalog).unwrap_err();
        assert!(matches!(err, Error::InvalidGrid { rows: 3, columns: 3 }));
        assert!(matches!(
            Deck::build(1, 5, &catalog),
            Err(Error::InvalidGrid { .. })
        ));
    }

    #[test]
    fn test_build_rejects_empty_grid() {
        let catalog = Catalog::default().faces;
        assert!(matches!(
            Deck::build(0, 4, &catalog),
            Err(Error::InvalidGrid { rows: 0, columns: 4 })
        ));
    }

    #[test]
    fn test_build_rejects_empty_catalog() {
        assert!(matches!(Deck::build(2, 2, &[]), Err(Error::EmptyCatalog)));
    }

    #[test]
    fn test_build_cycles_short_catalog() {
        let catalog = vec![Token::from("fire"), Token::from("water")];
        let tokens = Deck::build(2, 4, &catalog).unwrap();
        let counts = counts(&tokens);
        assert_eq!(counts[&Token::from("fire")], 4);
        assert_eq!(counts[&Token::from("water")], 4);
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let catalog = Catalog::default().faces;
        let mut rng = StdRng::seed_from_u64(7);
        let tokens = Deck::build(4, 5, &catalog).unwrap();
        for _ in 0..20 {
            let shuffled = Deck::shuffle(tokens.clone(), &mut rng);
            let mut a = tokens.clone();
            let mut b = shuffled;
            a.sort();
            b.sort();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_shuffle_is_deterministic_for_seed() {
        let tokens = Deck::build(4, 4, &Catalog::default().faces).unwrap();
        let a = Deck::shuffle(tokens.clone(), &mut StdRng::seed_from_u64(42));
        let b = Deck::shuffle(tokens, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_shuffle_spreads_first_card() {
        // Each of the 4 positions should receive the first card at least once.
        let tokens: Vec<Token> = ["a", "b", "c", "d"].into_iter().map(Token::from).collect();
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = [0usize; 4];
        for _ in 0..400 {
            let shuffled = Deck::shuffle(tokens.clone(), &mut rng);
            let pos = shuffled.iter().position(|t| t.as_str() == "a").unwrap();
            seen[pos] += 1;
        }
        assert!(seen.iter().all(|&n| n > 50), "{seen:?}");
    }

    #[test]
    fn test_catalog_new() {
        let catalog = Catalog::new(["fire", "water"], "card-back");
        assert_eq!(catalog.faces, vec![Token::from("fire"), Token::from("water")]);
        assert_eq!(catalog.back.as_str(), "card-back");
        assert_eq!(Catalog::default().faces.len(), DEFAULT_CATALOG.len());
    }

    #[test]
    fn test_new_deck_for_difficulty() {
        let rules = Difficulty::Hard.rules();
        let mut rng = StdRng::seed_from_u64(3);
        let deck = Deck::new(&rules, &Catalog::default(), &mut rng).unwrap();
        assert_eq!(deck.len(), 20);
        assert_eq!(deck.back().as_str(), "back");
        assert!(counts(deck.tokens()).values().all(|&n| n == 2));
    }
}
