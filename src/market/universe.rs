//! A fixed sample universe of large-cap tickers for tests and the
//! `debug-layout` diagnostic binary. Market caps are in billions of USD;
//! live views replace this with the fetch job's cached records.

use super::StockRecord;

const SAMPLE: &[(&str, &str, &str, f64, f64)] = &[
    // Information Technology
    ("AAPL", "Apple", "Information Technology", 2980.0, 1.25),
    ("MSFT", "Microsoft", "Information Technology", 2810.0, -0.45),
    ("NVDA", "Nvidia", "Information Technology", 2200.0, 3.10),
    ("AVGO", "Broadcom", "Information Technology", 610.0, -1.20),
    ("ORCL", "Oracle", "Information Technology", 340.0, 0.80),
    ("CRM", "Salesforce", "Information Technology", 290.0, -2.10),
    ("AMD", "AMD", "Information Technology", 285.0, 2.50),
    ("QCOM", "Qualcomm", "Information Technology", 180.0, 1.10),
    ("INTC", "Intel", "Information Technology", 175.0, -0.80),
    // Communication Services
    ("GOOGL", "Alphabet", "Communication Services", 1700.0, 0.05),
    ("META", "Meta", "Communication Services", 1200.0, 1.50),
    ("NFLX", "Netflix", "Communication Services", 260.0, -1.80),
    ("DIS", "Disney", "Communication Services", 210.0, 0.30),
    // Consumer Discretionary
    ("AMZN", "Amazon", "Consumer Discretionary", 1800.0, -2.50),
    ("TSLA", "Tesla", "Consumer Discretionary", 850.0, 4.20),
    ("HD", "Home Depot", "Consumer Discretionary", 350.0, 0.90),
    ("MCD", "McDonald's", "Consumer Discretionary", 210.0, -0.10),
    ("NKE", "Nike", "Consumer Discretionary", 160.0, 1.40),
    // Health Care
    ("LLY", "Eli Lilly", "Health Care", 740.0, 0.60),
    ("UNH", "UnitedHealth", "Health Care", 450.0, 1.30),
    ("JNJ", "Johnson & Johnson", "Health Care", 380.0, -0.20),
    ("MRK", "Merck", "Health Care", 310.0, 0.90),
    ("PFE", "Pfizer", "Health Care", 160.0, -1.10),
    // Financials
    ("JPM", "JPMorgan Chase", "Financials", 530.0, -1.90),
    ("V", "Visa", "Financials", 460.0, 0.88),
    ("MA", "Mastercard", "Financials", 430.0, 1.20),
    ("BAC", "Bank of America", "Financials", 280.0, -2.30),
    ("WFC", "Wells Fargo", "Financials", 200.0, -2.80),
    // Energy
    ("XOM", "Exxon Mobil", "Energy", 470.0, 2.50),
    ("CVX", "Chevron", "Energy", 290.0, 2.10),
    // Consumer Staples
    ("WMT", "Walmart", "Consumer Staples", 480.0, -0.30),
    ("PG", "Procter & Gamble", "Consumer Staples", 380.0, 0.20),
    ("COST", "Costco", "Consumer Staples", 320.0, 0.70),
    ("KO", "Coca-Cola", "Consumer Staples", 260.0, 0.10),
    // Industrials
    ("CAT", "Caterpillar", "Industrials", 180.0, -0.50),
    ("BA", "Boeing", "Industrials", 120.0, -3.20),
];

/// Materialize the sample universe as records.
pub fn sample_records() -> Vec<StockRecord> {
    SAMPLE
        .iter()
        .map(
            |&(ticker, name, sector, market_cap, change_percent)| StockRecord {
                ticker: ticker.into(),
                name: name.to_string(),
                sector: sector.to_string(),
                market_cap,
                change_percent,
            },
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_universe_is_layout_ready() {
        let records = sample_records();
        assert!(records.len() > 30);
        assert!(records
            .iter()
            .all(|r| r.market_cap.is_finite() && r.market_cap > 0.0));
    }
}
