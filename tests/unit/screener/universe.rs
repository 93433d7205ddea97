//! Unit tests for the sector universe and scan scope

use stocksense::error::ConfigError;
use stocksense::screener::{parse_ticker_list, ScanScope, SectorUniverse, MANUAL_SECTOR};

fn universe() -> SectorUniverse {
    SectorUniverse::new()
        .with_sector("Banks", ["BBCA", "BBRI", "BMRI"])
        .with_sector("Energy", ["ADRO", "PTBA"])
        .with_sector("Conglomerates", ["ASII", "BBRI"])
}

#[test]
fn test_all_sectors_in_declaration_order() {
    let items = universe().resolve(&ScanScope::AllSectors).unwrap();
    let symbols: Vec<&str> = items.iter().map(|i| i.symbol.as_str()).collect();
    assert_eq!(symbols, vec!["BBCA", "BBRI", "BMRI", "ADRO", "PTBA", "ASII"]);
    let indexes: Vec<usize> = items.iter().map(|i| i.index).collect();
    assert_eq!(indexes, (0..6).collect::<Vec<_>>());
}

#[test]
fn test_duplicate_symbol_kept_under_first_sector() {
    let items = universe().resolve(&ScanScope::AllSectors).unwrap();
    let bbri: Vec<_> = items.iter().filter(|i| i.symbol == "BBRI").collect();
    assert_eq!(bbri.len(), 1);
    assert_eq!(bbri[0].sector, "Banks");
}

#[test]
fn test_selected_sectors_in_selection_order() {
    let scope = ScanScope::Sectors(vec!["Conglomerates".to_string(), "Banks".to_string()]);
    let items = universe().resolve(&scope).unwrap();
    let pairs: Vec<(&str, &str)> = items
        .iter()
        .map(|i| (i.symbol.as_str(), i.sector.as_str()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("ASII", "Conglomerates"),
            ("BBRI", "Conglomerates"),
            ("BBCA", "Banks"),
            ("BMRI", "Banks"),
        ]
    );
}

#[test]
fn test_unknown_sector() {
    let scope = ScanScope::Sectors(vec!["Crypto".to_string()]);
    assert_eq!(
        universe().resolve(&scope),
        Err(ConfigError::UnknownSector("Crypto".to_string()))
    );
}

#[test]
fn test_empty_universe() {
    assert_eq!(
        SectorUniverse::new().resolve(&ScanScope::AllSectors),
        Err(ConfigError::EmptyUniverse)
    );
}

#[test]
fn test_manual_scope_ignores_universe() {
    let scope = ScanScope::Manual(vec!["GOTO".to_string(), "GOTO".to_string(), "BBCA".to_string()]);
    let items = SectorUniverse::new().resolve(&scope).unwrap();
    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|i| i.sector == MANUAL_SECTOR));
}

#[test]
fn test_parse_ticker_list() {
    assert_eq!(
        parse_ticker_list(" bbca.jk , ,tlkm .jk,"),
        vec!["BBCA.JK".to_string(), "TLKM.JK".to_string()]
    );
    assert!(parse_ticker_list("  , ").is_empty());
}

#[test]
fn test_scope_from_inputs() {
    let sectors = vec!["Banks".to_string()];
    assert_eq!(
        ScanScope::from_inputs("adro", &sectors),
        ScanScope::Manual(vec!["ADRO".to_string()])
    );
    assert_eq!(ScanScope::from_inputs(" ", &sectors), ScanScope::Sectors(sectors.clone()));
    assert_eq!(ScanScope::from_inputs("", &[]), ScanScope::AllSectors);
}

#[test]
fn test_idx_default_universe() {
    let idx = SectorUniverse::idx_default();
    assert_eq!(idx.sectors().len(), 10);
    assert_eq!(idx.sector_names()[0], "Financials");
    assert!(idx.symbols("Financials").unwrap().contains(&"BBCA.JK".to_string()));

    // KLBF.JK is listed under both consumer staples and healthcare
    let items = idx.resolve(&ScanScope::AllSectors).unwrap();
    let klbf: Vec<_> = items.iter().filter(|i| i.symbol == "KLBF.JK").collect();
    assert_eq!(klbf.len(), 1);
    assert_eq!(klbf[0].sector, "Consumer Non-Cyclicals");
}
