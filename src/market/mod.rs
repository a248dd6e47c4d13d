pub mod universe;

use compact_str::CompactString;
use serde::Deserialize;

use crate::layout::{layout_with, Item, LayoutParams, PlacedItem, Rect};

/// One upstream quote/profile record, as delivered by the fetch job's cache.
#[derive(Debug, Clone, Deserialize)]
pub struct StockRecord {
    pub ticker: CompactString,
    /// Display name. The upstream feed calls this field `name_zh`.
    #[serde(alias = "name_zh")]
    pub name: String,
    pub sector: String,
    pub market_cap: f64,
    pub change_percent: f64,
}

/// Stocks of one sector, ordered by market cap descending.
#[derive(Debug, Clone)]
pub struct SectorGroup {
    pub name: String,
    pub stocks: Vec<StockRecord>,
    pub total_market_cap: f64,
}

/// Heatmap construction policy, owned by the caller of the layout engine.
#[derive(Debug, Clone, Copy)]
pub struct HeatmapConfig {
    /// Largest fraction of the view's total market cap any single stock may
    /// claim as layout weight. `None` disables capping.
    pub cap_ratio: Option<f64>,
    /// Title strip height reserved at the top of each sector rect.
    pub header_height: f64,
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        Self {
            cap_ratio: Some(0.22),
            header_height: 28.0,
        }
    }
}

/// Group records by sector. Records with a non-finite or non-positive market
/// cap are dropped here so they never reach the layout engine. Sectors come
/// back ordered by total market cap descending, stocks within each sector by
/// market cap descending.
pub fn group_by_sector(records: &[StockRecord]) -> Vec<SectorGroup> {
    let mut groups: Vec<SectorGroup> = Vec::new();
    let mut dropped = 0usize;

    for record in records {
        if !record.market_cap.is_finite() || record.market_cap <= 0.0 {
            dropped += 1;
            continue;
        }
        let idx = match groups.iter().position(|g| g.name == record.sector) {
            Some(i) => i,
            None => {
                groups.push(SectorGroup {
                    name: record.sector.clone(),
                    stocks: Vec::new(),
                    total_market_cap: 0.0,
                });
                groups.len() - 1
            }
        };
        groups[idx].stocks.push(record.clone());
        groups[idx].total_market_cap += record.market_cap;
    }

    if dropped > 0 {
        tracing::debug!("Dropped {dropped} record(s) with invalid market cap");
    }

    for group in &mut groups {
        group
            .stocks
            .sort_by(|a, b| b.market_cap.total_cmp(&a.market_cap));
    }
    groups.sort_by(|a, b| b.total_market_cap.total_cmp(&a.total_market_cap));
    groups
}

/// Turn sector groups into layout items, applying the weight cap.
///
/// Each stock's weight is `min(market_cap, total · cap_ratio)` against the
/// view-wide total, so one mega-cap cannot swallow the whole map. Sector
/// weights are the sums of their capped children.
pub fn build_items(groups: &[SectorGroup], cap_ratio: Option<f64>) -> Vec<Item> {
    let total: f64 = groups.iter().map(|g| g.total_market_cap).sum();
    let cap = match cap_ratio {
        Some(ratio) if total > 0.0 => total * ratio,
        _ => f64::INFINITY,
    };

    groups
        .iter()
        .map(|group| {
            let children = group
                .stocks
                .iter()
                .map(|s| Item::leaf(s.ticker.clone(), s.market_cap.min(cap)))
                .collect();
            Item::group(group.name.as_str(), children)
        })
        .collect()
}

/// Full pipeline from raw records to placed sector/stock rectangles.
pub fn build_heatmap(records: &[StockRecord], rect: Rect, config: &HeatmapConfig) -> Vec<PlacedItem> {
    let groups = group_by_sector(records);
    tracing::info!(
        "Building heatmap: {} stocks in {} sectors into {:.0}x{:.0}",
        groups.iter().map(|g| g.stocks.len()).sum::<usize>(),
        groups.len(),
        rect.w,
        rect.h
    );
    let items = build_items(&groups, config.cap_ratio);
    let params = LayoutParams {
        header_height: config.header_height,
    };
    layout_with(&items, rect, &params)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(ticker: &str, sector: &str, cap: f64) -> StockRecord {
        StockRecord {
            ticker: ticker.into(),
            name: ticker.to_string(),
            sector: sector.to_string(),
            market_cap: cap,
            change_percent: 0.0,
        }
    }

    #[test]
    fn grouping_sums_and_orders_sectors() {
        let records = vec![
            record("AAA", "Tech", 100.0),
            record("BBB", "Energy", 400.0),
            record("CCC", "Tech", 250.0),
        ];
        let groups = group_by_sector(&records);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].name, "Energy");
        assert_eq!(groups[1].name, "Tech");
        assert!((groups[1].total_market_cap - 350.0).abs() < 1e-9);
        // Stocks within a sector are ordered by cap descending.
        assert_eq!(groups[1].stocks[0].ticker, "CCC");
    }

    #[test]
    fn grouping_drops_invalid_market_caps() {
        let records = vec![
            record("AAA", "Tech", 100.0),
            record("BAD", "Tech", 0.0),
            record("NAN", "Tech", f64::NAN),
        ];
        let groups = group_by_sector(&records);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].stocks.len(), 1);
    }

    #[test]
    fn cap_ratio_clamps_dominant_stock() {
        let records = vec![
            record("HUGE", "Tech", 900.0),
            record("AAA", "Tech", 50.0),
            record("BBB", "Energy", 50.0),
        ];
        let groups = group_by_sector(&records);
        let items = build_items(&groups, Some(0.2));
        let tech = items.iter().find(|i| i.id == "Tech").unwrap();
        let huge = tech.children.iter().find(|c| c.id == "HUGE").unwrap();
        // Total is 1000, so the cap is 200.
        assert!((huge.weight - 200.0).abs() < 1e-9);
        assert!((tech.weight - 250.0).abs() < 1e-9);
    }

    #[test]
    fn no_cap_keeps_raw_weights() {
        let records = vec![record("HUGE", "Tech", 900.0), record("AAA", "Tech", 50.0)];
        let items = build_items(&group_by_sector(&records), None);
        let huge = items[0].children.iter().find(|c| c.id == "HUGE").unwrap();
        assert!((huge.weight - 900.0).abs() < 1e-9);
    }

    #[test]
    fn heatmap_top_level_tiles_viewport() {
        let rect = Rect::new(0.0, 0.0, 1280.0, 720.0);
        let placed = build_heatmap(&universe::sample_records(), rect, &HeatmapConfig::default());
        assert!(!placed.is_empty());
        let total: f64 = placed.iter().map(|p| p.rect.area()).sum();
        assert!((total - rect.area()).abs() < 1e-6 * rect.area());
        // Every sector with a tall enough rect gets stock placements.
        for sector in &placed {
            if sector.rect.h > 28.0 + 1.0 {
                assert!(!sector.children.is_empty(), "sector '{}' is empty", sector.id);
            }
        }
    }

    #[test]
    fn record_parses_upstream_json() {
        let json = r#"{
            "ticker": "AAPL",
            "name_zh": "Apple",
            "sector": "Information Technology",
            "market_cap": 2980.0,
            "change_percent": 1.25
        }"#;
        let rec: StockRecord = serde_json::from_str(json).unwrap();
        assert_eq!(rec.ticker, "AAPL");
        assert_eq!(rec.name, "Apple");
        assert!((rec.change_percent - 1.25).abs() < 1e-9);
    }
}
