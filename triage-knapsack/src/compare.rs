use crate::{evaluate_memo, evaluate_table, reconstruct_from_cache, reconstruct_from_table, Instance};
use anyhow::{anyhow, Result};
use log::{debug, error};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Consistent,
    /// Memoized and tabulated evaluators disagree on the optimal value.
    ValueMismatch,
    /// A reconstructed selection is infeasible or not worth the optimal value.
    InvalidSelection,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Consistent => write!(f, "consistent"),
            Status::ValueMismatch => write!(f, "value mismatch"),
            Status::InvalidSelection => write!(f, "invalid selection"),
        }
    }
}

/// Outcome of cross-validating the memoized and tabulated evaluators.
///
/// The two selections may differ when several optimal subsets exist; only
/// their total values have to agree.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Value reported by the tabulated evaluator.
    pub optimal_value: u32,
    pub memo_value: u32,
    pub table_value: u32,
    pub memo_selection: Vec<usize>,
    pub table_selection: Vec<usize>,
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl Report {
    pub fn is_consistent(&self) -> bool {
        self.status == Status::Consistent
    }

    pub fn ensure_consistent(&self) -> Result<()> {
        match self.status {
            Status::Consistent => Ok(()),
            status => Err(anyhow!(
                "Evaluators are inconsistent ({}): {}",
                status,
                self.details.as_deref().unwrap_or("no details")
            )),
        }
    }
}

/// Runs both pseudo-polynomial evaluators and both reconstructions on `instance`.
///
/// Errors only when a reconstruction rejects its own record; disagreements are
/// reported through [`Report::status`].
pub fn compare(instance: &Instance) -> Result<Report> {
    let (memo_value, cache) = evaluate_memo(instance);
    let (table_value, table) = evaluate_table(instance);
    let memo_selection = reconstruct_from_cache(instance, &cache)?;
    let table_selection = reconstruct_from_table(instance, &table)?;

    let problem = if memo_value != table_value {
        Some((
            Status::ValueMismatch,
            format!(
                "memoized value {} differs from tabulated value {}",
                memo_value, table_value
            ),
        ))
    } else {
        [("memoized", &memo_selection), ("tabulated", &table_selection)]
            .into_iter()
            .find_map(|(name, selection)| {
                match instance.verify_selection(selection) {
                    Ok(value) if value == table_value => None,
                    Ok(value) => Some(format!(
                        "{} selection {:?} is worth {}, expected {}",
                        name, selection, value, table_value
                    )),
                    Err(e) => Some(format!("{} selection {:?}: {}", name, selection, e)),
                }
            })
            .map(|details| (Status::InvalidSelection, details))
    };

    let (status, details) = match problem {
        Some((status, details)) => {
            error!("{}: {}", status, details);
            (status, Some(details))
        }
        None => {
            debug!(
                "evaluators agree on {} (memoized {:?}, tabulated {:?})",
                table_value, memo_selection, table_selection
            );
            (Status::Consistent, None)
        }
    };

    Ok(Report {
        optimal_value: table_value,
        memo_value,
        table_value,
        memo_selection,
        table_selection,
        status,
        details,
    })
}
