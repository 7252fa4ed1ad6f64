use crate::{
    evaluate, evaluate_memo, evaluate_table, reconstruct_from_cache, reconstruct_from_table,
    reconstruct_recursive, Instance,
};
use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Exponential; only suitable for small instances.
    Recursive,
    Memoized,
    Tabulated,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Recursive, Strategy::Memoized, Strategy::Tabulated];

    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Recursive => "recursive",
            Strategy::Memoized => "memoized",
            Strategy::Tabulated => "tabulated",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.as_str() == s)
            .ok_or_else(|| {
                anyhow!(
                    "Unknown strategy '{}'. Expected one of: recursive, memoized, tabulated",
                    s
                )
            })
    }
}

/// An optimal value together with one subset of item indices achieving it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub optimal_value: u32,
    pub items: Vec<usize>,
}

/// Evaluates `instance` with `strategy` and reconstructs from that strategy's own record.
pub fn solve(instance: &Instance, strategy: Strategy) -> Result<Selection> {
    let (optimal_value, items) = match strategy {
        Strategy::Recursive => (
            evaluate(instance.items(), 0, instance.capacity()),
            reconstruct_recursive(instance),
        ),
        Strategy::Memoized => {
            let (value, cache) = evaluate_memo(instance);
            (value, reconstruct_from_cache(instance, &cache)?)
        }
        Strategy::Tabulated => {
            let (value, table) = evaluate_table(instance);
            (value, reconstruct_from_table(instance, &table)?)
        }
    };
    Ok(Selection {
        optimal_value,
        items,
    })
}
