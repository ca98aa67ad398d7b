use rand::Rng;

use crate::error::DungeonError;

/// Inclusive `[min, max]` count.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CountRange {
    pub min: u32,
    pub max: u32,
}

impl CountRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub const fn exactly(n: u32) -> Self {
        Self { min: n, max: n }
    }

    pub fn sample(&self, rng: &mut impl Rng) -> u32 {
        if self.min >= self.max {
            return self.min;
        }
        rng.gen_range(self.min..=self.max)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationConfig {
    pub room_count: u32,
    pub blocks: CountRange,
    pub doors: CountRange,
    /// Largest ring distance tried when siting a room, and so the longest
    /// corridor that can be carved.
    pub max_intersection_radius: u32,
    /// Ceiling on regrowing a room that came out with holes.
    pub max_hole_retries: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            room_count: 10,
            blocks: CountRange::new(4, 8),
            doors: CountRange::new(2, 4),
            max_intersection_radius: 12,
            max_hole_retries: 1000,
        }
    }
}

impl GenerationConfig {
    pub fn validate(&self) -> Result<(), DungeonError> {
        if self.room_count == 0 {
            return Err(DungeonError::InvalidConfig("room_count must be positive"));
        }
        if self.blocks.min == 0 {
            return Err(DungeonError::InvalidConfig("rooms need at least one block"));
        }
        if self.blocks.min > self.blocks.max {
            return Err(DungeonError::InvalidConfig("blocks.min exceeds blocks.max"));
        }
        if self.doors.min == 0 {
            return Err(DungeonError::InvalidConfig("rooms need at least one door"));
        }
        if self.doors.min > self.doors.max {
            return Err(DungeonError::InvalidConfig("doors.min exceeds doors.max"));
        }
        if self.max_hole_retries == 0 {
            return Err(DungeonError::InvalidConfig("max_hole_retries must be positive"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn default_is_valid() {
        assert_eq!(GenerationConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_inverted_ranges() {
        let cfg = GenerationConfig {
            blocks: CountRange::new(5, 3),
            ..GenerationConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(DungeonError::InvalidConfig(_))));
        let cfg = GenerationConfig {
            doors: CountRange::new(0, 3),
            ..GenerationConfig::default()
        };
        assert!(cfg.validate().is_err());
        let cfg = GenerationConfig {
            room_count: 0,
            ..GenerationConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn sample_stays_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let range = CountRange::new(2, 5);
        for _ in 0..200 {
            let n = range.sample(&mut rng);
            assert!((2..=5).contains(&n));
        }
        assert_eq!(CountRange::exactly(3).sample(&mut rng), 3);
    }
}
