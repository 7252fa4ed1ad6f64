use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A candidate sample: `cost` minutes of analysis time for `value` clinical priority.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Item {
    pub cost: u32,
    pub value: u32,
}

impl Item {
    pub fn new(cost: u32, value: u32) -> Self {
        Self { cost, value }
    }
}

/// Unvalidated item as supplied by callers.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemData {
    pub cost: i64,
    pub value: i64,
}

/// Unvalidated instance as supplied by callers. Convert with `Instance::try_from`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct InstanceData {
    pub items: Vec<ItemData>,
    pub capacity: i64,
}

/// A validated problem instance: an ordered list of items and a capacity.
///
/// Every cost is positive, values and the capacity are non-negative, and the
/// values of all items summed together fit in a `u32`, so no evaluator can
/// overflow.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(try_from = "InstanceData")]
pub struct Instance {
    items: Vec<Item>,
    capacity: u32,
}

impl Instance {
    pub fn new(items: Vec<Item>, capacity: u32) -> Result<Self> {
        if let Some(index) = items.iter().position(|item| item.cost == 0) {
            return Err(anyhow!(
                "Item ({}): Cost must be at least 1, since an exhausted budget ends the \
                 search and a free item would then be counted by the table but not the cache",
                index
            ));
        }
        let total_value = items.iter().map(|item| item.value as u64).sum::<u64>();
        if total_value > u32::MAX as u64 {
            return Err(anyhow!(
                "Total value of all items ({}) exceeds {}",
                total_value,
                u32::MAX
            ));
        }
        Ok(Self { items, capacity })
    }

    /// Builds an instance from signed `(cost, value)` pairs, rejecting negatives.
    pub fn from_pairs(pairs: &[(i64, i64)], capacity: i64) -> Result<Self> {
        Self::try_from(InstanceData {
            items: pairs
                .iter()
                .map(|&(cost, value)| ItemData { cost, value })
                .collect(),
            capacity,
        })
    }

    /// The five sample reference day. Optimal value is 100 (items 2 and 4).
    pub fn example() -> Self {
        Self {
            items: vec![
                Item::new(30, 10),
                Item::new(40, 20),
                Item::new(60, 30),
                Item::new(90, 50),
                Item::new(120, 70),
            ],
            capacity: 180,
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn num_items(&self) -> usize {
        self.items.len()
    }

    /// Checks a selection against this instance and returns its total value.
    pub fn verify_selection(&self, selection: &[usize]) -> Result<u32> {
        let selected_items: HashSet<usize> = selection.iter().cloned().collect();
        if selected_items.len() != selection.len() {
            return Err(anyhow!("Duplicate items selected."));
        }

        let (total_cost, total_value) = selection
            .iter()
            .map(|&index| {
                self.items
                    .get(index)
                    .ok_or_else(|| anyhow!("Item ({}) is out of bounds", index))
            })
            .collect::<Result<Vec<_>>>()?
            .iter()
            .fold((0u64, 0u64), |(cost, value), item| {
                (cost + item.cost as u64, value + item.value as u64)
            });

        if total_cost > self.capacity as u64 {
            return Err(anyhow!(
                "Total cost ({}) exceeded capacity ({})",
                total_cost,
                self.capacity
            ));
        }
        Ok(total_value as u32)
    }
}

impl TryFrom<ItemData> for Item {
    type Error = anyhow::Error;

    fn try_from(data: ItemData) -> Result<Self> {
        let cost = u32::try_from(data.cost)
            .map_err(|_| anyhow!("Cost ({}) must be between 0 and {}", data.cost, u32::MAX))?;
        let value = u32::try_from(data.value)
            .map_err(|_| anyhow!("Value ({}) must be between 0 and {}", data.value, u32::MAX))?;
        Ok(Item { cost, value })
    }
}

impl TryFrom<InstanceData> for Instance {
    type Error = anyhow::Error;

    fn try_from(data: InstanceData) -> Result<Self> {
        let capacity = u32::try_from(data.capacity).map_err(|_| {
            anyhow!(
                "Capacity ({}) must be between 0 and {}",
                data.capacity,
                u32::MAX
            )
        })?;
        let items = data
            .items
            .into_iter()
            .enumerate()
            .map(|(i, item)| Item::try_from(item).map_err(|e| anyhow!("Item ({}): {}", i, e)))
            .collect::<Result<Vec<_>>>()?;
        Instance::new(items, capacity)
    }
}
