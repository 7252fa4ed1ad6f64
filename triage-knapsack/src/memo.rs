use crate::{Instance, Item};
use ahash::RandomState;
use anyhow::{anyhow, Result};
use log::debug;
use std::collections::HashMap;

/// Sparse record of the states visited by [`evaluate_memo`].
///
/// Keyed by `(index, remaining)`. Base states (`index == N` or `remaining == 0`)
/// are never stored and read back as 0.
#[derive(Debug, Clone)]
pub struct Cache {
    num_items: usize,
    capacity: u32,
    entries: HashMap<(usize, u32), u32, RandomState>,
}

impl Cache {
    fn new(num_items: usize, capacity: u32) -> Self {
        Self {
            num_items,
            capacity,
            entries: HashMap::default(),
        }
    }

    pub fn get(&self, index: usize, remaining: u32) -> u32 {
        self.entries
            .get(&(index, remaining))
            .copied()
            .unwrap_or(0)
    }

    pub fn contains(&self, index: usize, remaining: u32) -> bool {
        self.entries.contains_key(&(index, remaining))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn num_items(&self) -> usize {
        self.num_items
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }
}

/// Top-down evaluation. Returns the optimal value and the populated cache.
pub fn evaluate_memo(instance: &Instance) -> (u32, Cache) {
    let mut cache = Cache::new(instance.num_items(), instance.capacity());
    let optimal_value = visit(instance.items(), 0, instance.capacity(), &mut cache);
    debug!(
        "memoized evaluation: {} items, capacity {}, {} states cached",
        instance.num_items(),
        instance.capacity(),
        cache.len()
    );
    (optimal_value, cache)
}

fn is_base(items: &[Item], index: usize, remaining: u32) -> bool {
    index >= items.len() || remaining == 0
}

/// Resolves `(index, remaining)` depth first on an explicit stack of frames.
///
/// A frame stays on the stack until its skip state and then its take state are
/// resolved.
fn visit(items: &[Item], index: usize, remaining: u32, cache: &mut Cache) -> u32 {
    let mut stack = vec![(index, remaining)];
    while let Some(&(index, remaining)) = stack.last() {
        if is_base(items, index, remaining) || cache.contains(index, remaining) {
            stack.pop();
            continue;
        }

        let item = items[index];
        let skip = (index + 1, remaining);
        let take = (item.cost <= remaining).then(|| (index + 1, remaining - item.cost));
        let pending = [Some(skip), take]
            .into_iter()
            .flatten()
            .find(|&(i, t)| !is_base(items, i, t) && !cache.contains(i, t));
        if let Some(state) = pending {
            stack.push(state);
            continue;
        }

        let mut best = cache.get(skip.0, skip.1);
        if let Some((i, t)) = take {
            best = best.max(item.value + cache.get(i, t));
        }
        cache.entries.insert((index, remaining), best);
        stack.pop();
    }
    cache.get(index, remaining)
}

/// Recovers an optimal selection from a cache built by [`evaluate_memo`].
///
/// Walks forward from `(0, capacity)`. An item is taken only when the state
/// value differs from the value of skipping it, so ties resolve to "skip".
/// Indices come out in ascending order.
pub fn reconstruct_from_cache(instance: &Instance, cache: &Cache) -> Result<Vec<usize>> {
    if cache.num_items != instance.num_items() || cache.capacity != instance.capacity() {
        return Err(anyhow!(
            "Cache was built for {} items with capacity {}, but instance has {} items with capacity {}",
            cache.num_items,
            cache.capacity,
            instance.num_items(),
            instance.capacity()
        ));
    }

    let items = instance.items();
    let mut selection = Vec::new();
    let mut remaining = instance.capacity();
    let mut index = 0;
    while index < items.len() && remaining > 0 {
        if cache.get(index, remaining) != cache.get(index + 1, remaining) {
            selection.push(index);
            remaining = remaining.checked_sub(items[index].cost).ok_or_else(|| {
                anyhow!(
                    "Cache selects item ({}) with cost {} but only {} capacity remains",
                    index,
                    items[index].cost,
                    remaining
                )
            })?;
        }
        index += 1;
    }
    Ok(selection)
}
