//! Top movers by absolute percentage change.

use serde::{Deserialize, Serialize};

use crate::core::AssetClass;
use crate::quote::Quote;

/// Default number of movers in a digest.
pub const DEFAULT_MOVER_COUNT: usize = 5;

/// Projection of a [`Quote`] for the movers table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoverEntry {
    pub symbol: String,
    pub name: String,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub asset_class: AssetClass,
}

impl From<&Quote> for MoverEntry {
    fn from(q: &Quote) -> Self {
        Self {
            symbol: q.symbol.clone(),
            name: q.name.clone(),
            price: q.price,
            change: q.change,
            change_percent: q.change_percent,
            asset_class: q.asset_class,
        }
    }
}

/// Rank quotes by `|change_percent|`, largest first, and keep the top `count`.
///
/// Quotes with zero (or non-finite) change carry no mover signal and are
/// excluded outright. Ties keep their input order.
pub fn rank_movers(quotes: &[Quote], count: usize) -> Vec<MoverEntry> {
    let mut moving: Vec<&Quote> = quotes
        .iter()
        .filter(|q| q.change_percent.is_finite() && q.change_percent != 0.0)
        .collect();
    moving.sort_by(|a, b| b.change_percent.abs().total_cmp(&a.change_percent.abs()));
    moving.into_iter().take(count).map(MoverEntry::from).collect()
}
