//! RNG module - uniform random piece generation
//!
//! Every draw picks one of the seven shapes uniformly and independently of
//! history. There is no bag, so immediate repeats are possible.
//!
//! The RNG is a small seeded LCG so that sessions are reproducible in tests.
//! [`ScriptedPieces`] replays a fixed sequence for staged scenarios.

use crate::pieces::Piece;
use crate::types::ShapeKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high half of the state; the low bits of a power-of-two LCG
    /// have short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        (self.next_u32() >> 16) % max.max(1)
    }

    /// Current RNG state (for restarting with the same sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Source of shape kinds for newly spawned pieces
pub trait PieceSource: Send {
    /// Next shape kind to spawn
    fn next_kind(&mut self) -> ShapeKind;
}

/// Uniform, history-independent random shapes
#[derive(Debug, Clone)]
pub struct RandomPieces {
    rng: SimpleRng,
}

impl RandomPieces {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    pub fn seed(&self) -> u32 {
        self.rng.state()
    }
}

impl Default for RandomPieces {
    fn default() -> Self {
        Self::new(1)
    }
}

impl PieceSource for RandomPieces {
    fn next_kind(&mut self) -> ShapeKind {
        let idx = self.rng.next_range(ShapeKind::ALL.len() as u32) as usize;
        ShapeKind::ALL[idx]
    }
}

/// Replays a fixed sequence of shapes, cycling when exhausted
#[derive(Debug, Clone)]
pub struct ScriptedPieces {
    kinds: Vec<ShapeKind>,
    index: usize,
}

impl ScriptedPieces {
    /// An empty script falls back to `I` pieces.
    pub fn new(kinds: impl IntoIterator<Item = ShapeKind>) -> Self {
        Self {
            kinds: kinds.into_iter().collect(),
            index: 0,
        }
    }
}

impl PieceSource for ScriptedPieces {
    fn next_kind(&mut self) -> ShapeKind {
        if self.kinds.is_empty() {
            return ShapeKind::I;
        }
        let kind = self.kinds[self.index % self.kinds.len()];
        self.index = self.index.wrapping_add(1);
        kind
    }
}

/// Produces spawn-ready pieces from a [`PieceSource`]
pub struct PieceGenerator {
    source: Box<dyn PieceSource>,
}

impl PieceGenerator {
    pub fn new(source: impl PieceSource + 'static) -> Self {
        Self {
            source: Box::new(source),
        }
    }

    /// Next piece in base orientation, centered on row 0
    pub fn next(&mut self) -> Piece {
        Piece::spawn(self.source.next_kind())
    }
}

impl std::fmt::Debug for PieceGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PieceGenerator").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_zero_seed_is_usable() {
        let mut rng = SimpleRng::new(0);
        assert_ne!(rng.next_u32(), 0);
    }

    #[test]
    fn test_random_pieces_cover_all_kinds() {
        let mut source = RandomPieces::new(7);
        let mut seen = [false; 7];
        for _ in 0..500 {
            let kind = source.next_kind();
            let idx = ShapeKind::ALL.iter().position(|&k| k == kind).unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|&s| s), "kinds seen: {:?}", seen);
    }

    #[test]
    fn test_random_pieces_roughly_uniform() {
        let mut source = RandomPieces::new(42);
        let mut counts = [0u32; 7];
        for _ in 0..7000 {
            let kind = source.next_kind();
            counts[ShapeKind::ALL.iter().position(|&k| k == kind).unwrap()] += 1;
        }
        for (i, &n) in counts.iter().enumerate() {
            assert!((700..1300).contains(&n), "kind {} drawn {} times", i, n);
        }
    }

    #[test]
    fn test_random_pieces_allow_repeats() {
        let mut source = RandomPieces::new(3);
        let draws: Vec<ShapeKind> = (0..200).map(|_| source.next_kind()).collect();
        assert!(draws.windows(2).any(|w| w[0] == w[1]));
    }

    #[test]
    fn test_scripted_pieces_cycle() {
        let mut source = ScriptedPieces::new([ShapeKind::O, ShapeKind::T]);
        assert_eq!(source.next_kind(), ShapeKind::O);
        assert_eq!(source.next_kind(), ShapeKind::T);
        assert_eq!(source.next_kind(), ShapeKind::O);
    }

    #[test]
    fn test_generator_spawns_base_orientation() {
        let mut generator = PieceGenerator::new(ScriptedPieces::new([ShapeKind::J]));
        let piece = generator.next();
        assert_eq!(piece.kind, ShapeKind::J);
        assert_eq!(piece.y, 0);
        assert_eq!(piece.x, 4);
        assert_eq!(piece.shape.to_rows(), vec![vec![1, 0, 0], vec![1, 1, 1]]);
    }
}
