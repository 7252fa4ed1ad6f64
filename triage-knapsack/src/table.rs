use crate::Instance;
use anyhow::{anyhow, Result};
use log::debug;
use ndarray::{Array2, ArrayView1};

/// Dense `(N + 1) x (capacity + 1)` record built by [`evaluate_table`].
///
/// Row `i` holds the best values using the first `i` items, so row 0 is all zeros.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    cells: Array2<u32>,
}

impl Table {
    /// Wraps an existing array. It must have at least one row and one column.
    pub fn from_cells(cells: Array2<u32>) -> Result<Self> {
        if cells.nrows() == 0 || cells.ncols() == 0 {
            return Err(anyhow!(
                "Table must have at least one row and one column, got {:?}",
                cells.dim()
            ));
        }
        Ok(Self { cells })
    }

    /// Value of `(row, remaining)`, or `None` outside the table.
    pub fn get(&self, row: usize, remaining: u32) -> Option<u32> {
        self.cells.get([row, remaining as usize]).copied()
    }

    /// Panics if `row > N`.
    pub fn row(&self, row: usize) -> ArrayView1<'_, u32> {
        self.cells.row(row)
    }

    pub fn cells(&self) -> &Array2<u32> {
        &self.cells
    }

    pub fn num_items(&self) -> usize {
        self.cells.nrows() - 1
    }

    pub fn capacity(&self) -> u32 {
        (self.cells.ncols() - 1) as u32
    }
}

/// Bottom-up evaluation. Returns the optimal value and the full table.
///
/// Rows are filled in increasing item order since row `i` reads only row `i - 1`.
pub fn evaluate_table(instance: &Instance) -> (u32, Table) {
    let items = instance.items();
    let num_items = items.len();
    let capacity = instance.capacity() as usize;

    let mut cells = Array2::<u32>::zeros((num_items + 1, capacity + 1));
    for i in 1..=num_items {
        let item = items[i - 1];
        let cost = item.cost as usize;
        for t in 0..=capacity {
            let mut best = cells[[i - 1, t]];
            if cost <= t {
                best = best.max(item.value + cells[[i - 1, t - cost]]);
            }
            cells[[i, t]] = best;
        }
    }

    let optimal_value = cells[[num_items, capacity]];
    debug!(
        "tabulated evaluation: {} items, capacity {}, {} cells",
        num_items,
        capacity,
        cells.len()
    );
    (optimal_value, Table { cells })
}

/// Recovers an optimal selection from a table built by [`evaluate_table`].
///
/// Walks backward from `(N, capacity)`, taking item `i - 1` whenever row `i`
/// differs from row `i - 1`. Indices are returned in ascending order.
pub fn reconstruct_from_table(instance: &Instance, table: &Table) -> Result<Vec<usize>> {
    if table.num_items() != instance.num_items() || table.capacity() != instance.capacity() {
        return Err(anyhow!(
            "Table was built for {} items with capacity {}, but instance has {} items with capacity {}",
            table.num_items(),
            table.capacity(),
            instance.num_items(),
            instance.capacity()
        ));
    }

    let items = instance.items();
    let cells = table.cells();
    let mut selection = Vec::new();
    let mut i = items.len();
    let mut t = instance.capacity();
    while i > 0 && t > 0 {
        if cells[[i, t as usize]] != cells[[i - 1, t as usize]] {
            let index = i - 1;
            selection.push(index);
            t = t.checked_sub(items[index].cost).ok_or_else(|| {
                anyhow!(
                    "Table selects item ({}) with cost {} but only {} capacity remains",
                    index,
                    items[index].cost,
                    t
                )
            })?;
        }
        i -= 1;
    }
    selection.reverse();
    Ok(selection)
}
