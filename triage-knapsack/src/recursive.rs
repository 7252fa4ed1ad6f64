use crate::{Instance, Item};

/// Best value obtainable from `items[index..]` with `remaining` capacity left.
///
/// Plain recursion over the recurrence with no caching. Overlapping states are
/// recomputed, so running time is exponential in the number of items. Kept as
/// the ground truth the other evaluators are checked against.
pub fn evaluate(items: &[Item], index: usize, remaining: u32) -> u32 {
    if index >= items.len() || remaining == 0 {
        return 0;
    }
    let item = items[index];
    let skip = evaluate(items, index + 1, remaining);
    if item.cost <= remaining {
        let take = item.value + evaluate(items, index + 1, remaining - item.cost);
        skip.max(take)
    } else {
        skip
    }
}

/// Recovers an optimal selection by re-deriving every state it visits.
///
/// Walks forward like the cache based reconstruction, preferring to skip an
/// item whenever skipping is as good as taking it.
pub fn reconstruct_recursive(instance: &Instance) -> Vec<usize> {
    let items = instance.items();
    let mut selection = Vec::new();
    let mut remaining = instance.capacity();
    let mut index = 0;
    while index < items.len() && remaining > 0 {
        if evaluate(items, index, remaining) != evaluate(items, index + 1, remaining) {
            selection.push(index);
            remaining -= items[index].cost;
        }
        index += 1;
    }
    selection
}
