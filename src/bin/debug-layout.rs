/// Diagnostic tool to verify records → grouping → layout pipeline
use std::collections::HashMap;

use marketmap::layout::{PlacedItem, Rect};
use marketmap::market::{self, universe, HeatmapConfig};
use marketmap::render::ColorClass;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("marketmap=debug".parse().unwrap()),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let width: f64 = args.next().map(|a| a.parse()).transpose()?.unwrap_or(1920.0);
    let height: f64 = args.next().map(|a| a.parse()).transpose()?.unwrap_or(1080.0);

    println!("=== DIAGNOSTIC: Records → Grouping → Layout Pipeline ===");
    println!("Viewport: {width:.0}x{height:.0}");

    let records = universe::sample_records();
    println!("\n[1] Universe loaded: {} records", records.len());

    let groups = market::group_by_sector(&records);
    println!("\n[2] Grouped into {} sectors:", groups.len());
    for (i, group) in groups.iter().enumerate() {
        println!(
            "    [{}] '{}' - {} stocks, {:.0}B total cap",
            i,
            group.name,
            group.stocks.len(),
            group.total_market_cap
        );
    }

    let config = HeatmapConfig::default();
    let placed = market::build_heatmap(&records, Rect::new(0.0, 0.0, width, height), &config);
    let stock_count: usize = placed.iter().map(|s| s.children.len()).sum();
    println!(
        "\n[3] Layout computed: {} sector rects, {} stock rects",
        placed.len(),
        stock_count
    );

    println!("\n[4] Top 10 largest stock rectangles by area:");
    let mut stock_rects: Vec<&PlacedItem> = placed.iter().flat_map(|s| s.children.iter()).collect();
    stock_rects.sort_by(|a, b| b.rect.area().total_cmp(&a.rect.area()));
    for (i, p) in stock_rects.iter().take(10).enumerate() {
        println!(
            "    [{}] '{}' - rect: {:.1}x{:.1} ({:.0}px²) at ({:.1}, {:.1})",
            i,
            p.id,
            p.rect.w,
            p.rect.h,
            p.rect.area(),
            p.rect.x,
            p.rect.y
        );
    }

    println!("\n[5] Checking area coverage:");
    let sector_area: f64 = placed.iter().map(|p| p.rect.area()).sum();
    let viewport_area = width * height;
    println!("    Total sector rect area: {sector_area:.0}px²");
    println!("    Viewport area:          {viewport_area:.0}px²");
    println!(
        "    Coverage: {:.2}%",
        (sector_area / viewport_area) * 100.0
    );

    println!("\n[6] Color class distribution:");
    let mut by_class: HashMap<&'static str, usize> = HashMap::new();
    for record in &records {
        *by_class
            .entry(ColorClass::from_change(record.change_percent).css_class())
            .or_default() += 1;
    }
    let mut classes: Vec<_> = by_class.into_iter().collect();
    classes.sort();
    for (class, count) in classes {
        println!("    {class:<12} {count}");
    }

    Ok(())
}
