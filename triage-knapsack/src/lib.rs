//! 0/1 knapsack engine for choosing which samples to analyse within a time budget.
//!
//! Three interchangeable evaluators share one recurrence over states
//! `(index, remaining)`: [`evaluate`] recurses without caching, [`evaluate_memo`]
//! caches visited states, and [`evaluate_table`] fills a dense table bottom-up.
//! Each record feeds its own reconstructor, and [`compare`] cross-validates the
//! two pseudo-polynomial evaluators.

mod compare;
pub use compare::*;
mod generator;
pub use generator::*;
mod item;
pub use item::*;
mod memo;
pub use memo::*;
mod recursive;
pub use recursive::*;
mod strategy;
pub use strategy::*;
mod table;
pub use table::*;
