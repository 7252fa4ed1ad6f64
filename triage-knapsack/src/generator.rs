use crate::{Instance, Item};
use anyhow::{anyhow, Result};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Parameters for random instances. All ranges are inclusive.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Track {
    pub n_items: usize,
    pub min_cost: u32,
    pub max_cost: u32,
    pub min_value: u32,
    pub max_value: u32,
    pub min_capacity: u32,
    pub max_capacity: u32,
}

impl Default for Track {
    fn default() -> Self {
        Self {
            n_items: 8,
            min_cost: 10,
            max_cost: 100,
            min_value: 5,
            max_value: 80,
            min_capacity: 100,
            max_capacity: 300,
        }
    }
}

impl Track {
    pub fn validate(&self) -> Result<()> {
        if self.min_cost == 0 {
            return Err(anyhow!("Track min_cost must be at least 1"));
        }
        for (name, min, max) in [
            ("cost", self.min_cost, self.max_cost),
            ("value", self.min_value, self.max_value),
            ("capacity", self.min_capacity, self.max_capacity),
        ] {
            if min > max {
                return Err(anyhow!(
                    "Track min_{} ({}) is greater than max_{} ({})",
                    name,
                    min,
                    name,
                    max
                ));
            }
        }
        Ok(())
    }
}

impl Instance {
    /// Draws an instance from a caller-owned random source.
    ///
    /// Each item draws its cost then its value; the capacity is drawn last.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, track: &Track) -> Result<Self> {
        track.validate()?;
        let items: Vec<Item> = (0..track.n_items)
            .map(|_| {
                let cost = rng.gen_range(track.min_cost..=track.max_cost);
                let value = rng.gen_range(track.min_value..=track.max_value);
                Item::new(cost, value)
            })
            .collect();
        let capacity = rng.gen_range(track.min_capacity..=track.max_capacity);
        Instance::new(items, capacity)
    }

    pub fn generate_instance(seed: &[u8; 32], track: &Track) -> Result<Self> {
        let mut rng = SmallRng::from_seed(seed.clone());
        Self::generate(&mut rng, track)
    }
}
