use std::{fmt, str::FromStr};

use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
};
use rand_pcg::Pcg32;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Seed for a reproducible game.
///
/// A 128-bit (16-byte) seed initializing the single random number generator
/// a [`GameSession`](crate::GameSession) draws from for board generation, rack
/// refills and opponent moves. Using the same seed and the same sequence of
/// player actions replays the same game, which enables:
///
/// - Deterministic testing
/// - Sharing an interesting board by its seed
///
/// Seeds are written as 32 hexadecimal digits.
///
/// # Example
///
/// ```
/// use arrowword_engine::GameSeed;
///
/// let seed: GameSeed = "000000000000000000000000000000ff".parse().unwrap();
/// assert_eq!(seed.to_string(), "000000000000000000000000000000ff");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSeed([u8; 16]);

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid seed {input:?}: expected 32 hex digits")]
pub struct ParseSeedError {
    input: String,
}

impl GameSeed {
    /// Draws a seed from the thread-local generator.
    #[must_use]
    pub fn random() -> Self {
        rand::rng().random()
    }

    #[must_use]
    pub const fn from_u128(value: u128) -> Self {
        Self(value.to_be_bytes())
    }

    /// Creates the generator this seed stands for.
    #[must_use]
    pub fn rng(self) -> Pcg32 {
        Pcg32::from_seed(self.0)
    }
}

impl fmt::Display for GameSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", u128::from_be_bytes(self.0))
    }
}

impl FromStr for GameSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let error = || ParseSeedError { input: s.to_owned() };
        if s.len() != 32 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(error());
        }
        let num = u128::from_str_radix(s, 16).map_err(|_| error())?;
        Ok(Self::from_u128(num))
    }
}

impl Serialize for GameSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for GameSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        hex_str.parse().map_err(serde::de::Error::custom)
    }
}

/// Allows generating random `GameSeed` values with `rng.random()`.
impl Distribution<GameSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> GameSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        GameSeed(seed)
    }
}

#[cfg(test)]
mod tests {
    use rand::RngCore as _;

    use super::*;

    #[test]
    fn test_parse_and_display() {
        let seed: GameSeed = "0123456789abcdef0123456789ABCDEF".parse().unwrap();
        assert_eq!(seed.to_string(), "0123456789abcdef0123456789abcdef");
        assert!("123".parse::<GameSeed>().is_err());
        assert!("zz23456789abcdef0123456789abcdef".parse::<GameSeed>().is_err());
        assert!("+123456789abcdef0123456789abcdef".parse::<GameSeed>().is_err());
    }

    #[test]
    fn test_serde_as_hex_string() {
        let seed = GameSeed::from_u128(0xdead_beef);
        let json = serde_json::to_string(&seed).unwrap();
        assert_eq!(json, "\"000000000000000000000000deadbeef\"");
        let back: GameSeed = serde_json::from_str(&json).unwrap();
        assert_eq!(back, seed);
        assert!(serde_json::from_str::<GameSeed>("\"beef\"").is_err());
    }

    #[test]
    fn test_same_seed_same_stream() {
        let seed = GameSeed::from_u128(99);
        let mut a = seed.rng();
        let mut b = seed.rng();
        for _ in 0..8 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }
}
