//! tile_bag.rs — weighted random tile draws
//!
//! Models the bag of letter tiles a player draws from. The supply is the
//! standard English Scrabble distribution (98 letter tiles; blanks are out of
//! scope since the dictionary does no scoring). A draw shuffles a copy of the
//! full bag uniformly and takes the first `n` tiles, so repeated letters show
//! up with their real bag frequency. Scrabble legality is not enforced — the
//! dictionary accepts any tile string.

use once_cell::sync::Lazy;
use rand::seq::SliceRandom;
use rand::Rng;

/// Letter supply for the English edition: (letter, tile count).
const ENGLISH_SUPPLY: &[(char, usize)] = &[
    ('e', 12),
    ('a', 9),
    ('i', 9),
    ('o', 8),
    ('n', 6),
    ('r', 6),
    ('t', 6),
    ('l', 4),
    ('s', 4),
    ('u', 4),
    ('d', 4),
    ('g', 3),
    ('b', 2),
    ('c', 2),
    ('m', 2),
    ('p', 2),
    ('f', 2),
    ('h', 2),
    ('v', 2),
    ('w', 2),
    ('y', 2),
    ('k', 1),
    ('j', 1),
    ('x', 1),
    ('q', 1),
    ('z', 1),
];

/// The supply flattened into one tile per element.
static ENGLISH_TILES: Lazy<Vec<char>> = Lazy::new(|| {
    ENGLISH_SUPPLY
        .iter()
        .flat_map(|&(letter, count)| std::iter::repeat(letter).take(count))
        .collect()
});

/// A bag of letter tiles to draw racks from.
#[derive(Debug, Clone)]
pub struct TileBag {
    tiles: Vec<char>,
}

impl Default for TileBag {
    /// The standard English 98-tile bag.
    fn default() -> Self {
        Self {
            tiles: ENGLISH_TILES.clone(),
        }
    }
}

impl TileBag {
    /// Build a bag from an arbitrary tile supply.
    #[must_use]
    pub fn from_tiles(tiles: Vec<char>) -> Self {
        Self { tiles }
    }

    /// Number of tiles in the bag.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// True if the bag holds no tiles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Draw `n` tiles (capped at the bag size) as a string.
    ///
    /// Shuffles a copy of the whole bag with a uniform Fisher–Yates and takes
    /// the first `n`, so a full-size draw is an unbiased permutation of the
    /// bag. The bag itself is unchanged; each draw starts from the full
    /// supply.
    pub fn draw<R: Rng>(&self, n: usize, rng: &mut R) -> String {
        let mut tiles = self.tiles.clone();
        tiles.shuffle(rng);
        tiles.truncate(n);
        tiles.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn standard_bag_has_98_tiles() {
        assert_eq!(98, TileBag::default().len());
    }

    #[test]
    fn draw_has_requested_length_and_comes_from_the_supply() {
        let bag = TileBag::default();
        let mut rng = StdRng::seed_from_u64(7);
        let rack = bag.draw(7, &mut rng);
        assert_eq!(7, rack.chars().count());
        assert!(rack.chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn full_draw_is_a_permutation_of_the_bag() {
        let bag = TileBag::default();
        let mut rng = StdRng::seed_from_u64(42);
        let mut drawn: Vec<char> = bag.draw(bag.len(), &mut rng).chars().collect();
        drawn.sort_unstable();
        let mut supply = ENGLISH_TILES.clone();
        supply.sort_unstable();
        assert_eq!(supply, drawn);
    }

    #[test]
    fn oversized_draw_is_capped_at_bag_size() {
        let bag = TileBag::from_tiles(vec!['a', 'b', 'c']);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(3, bag.draw(10, &mut rng).chars().count());
    }

    #[test]
    fn zero_draw_is_empty() {
        let bag = TileBag::default();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!("", bag.draw(0, &mut rng));
    }

    #[test]
    fn draw_does_not_consume_the_bag() {
        let bag = TileBag::from_tiles(vec!['a', 'b']);
        let mut rng = StdRng::seed_from_u64(3);
        let _ = bag.draw(2, &mut rng);
        assert_eq!(2, bag.len());
    }

    #[test]
    fn seeded_draws_are_reproducible() {
        let bag = TileBag::default();
        let a = bag.draw(7, &mut StdRng::seed_from_u64(99));
        let b = bag.draw(7, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }
}
