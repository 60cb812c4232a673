use market_digest::{AssetClass, rank_movers};

use crate::common::quote;

#[test]
fn ranks_by_absolute_change_and_excludes_flat() {
    let quotes = vec![
        quote("A", AssetClass::Equity, 2.0),
        quote("B", AssetClass::Equity, -8.0),
        quote("C", AssetClass::Equity, 0.0),
        quote("D", AssetClass::Crypto, 5.0),
        quote("E", AssetClass::Etf, -1.0),
        quote("F", AssetClass::Equity, 3.0),
        quote("G", AssetClass::Commodity, -9.0),
    ];

    let movers = rank_movers(&quotes, 5);
    let changes: Vec<f64> = movers.iter().map(|m| m.change_percent).collect();
    assert_eq!(changes, [-9.0, -8.0, 5.0, 3.0, 2.0]);
    assert_eq!(movers[0].symbol, "G");
    assert_eq!(movers[0].asset_class, AssetClass::Commodity);
    assert!(movers.iter().all(|m| m.symbol != "C"));
}

#[test]
fn ties_keep_input_order() {
    let quotes = vec![
        quote("UP", AssetClass::Equity, 4.0),
        quote("DOWN", AssetClass::Equity, -4.0),
        quote("SMALL", AssetClass::Equity, 1.0),
    ];
    let movers = rank_movers(&quotes, 2);
    let symbols: Vec<&str> = movers.iter().map(|m| m.symbol.as_str()).collect();
    assert_eq!(symbols, ["UP", "DOWN"]);
}

#[test]
fn fewer_movers_than_requested() {
    let quotes = vec![
        quote("A", AssetClass::Equity, 0.0),
        quote("B", AssetClass::Equity, 1.5),
        quote("C", AssetClass::Equity, f64::NAN),
    ];
    let movers = rank_movers(&quotes, 5);
    assert_eq!(movers.len(), 1);
    assert_eq!(movers[0].symbol, "B");

    assert!(rank_movers(&[], 5).is_empty());
}
