use tracing::debug;

use crate::client::FmpClient;
use crate::report;

/// Coordinates symbol normalization, the request gateway, and report
/// rendering for the tool surface.
///
/// Always resolves to a display string — a report or error text — never an
/// `Err` toward the tool layer.
#[derive(Debug, Clone)]
pub struct FmpControlPlane {
    client: FmpClient,
}

impl FmpControlPlane {
    #[must_use]
    pub const fn new(client: FmpClient) -> Self {
        Self { client }
    }

    /// Fetches and renders the current stock quote for a ticker symbol.
    pub async fn stock_quote(&self, symbol: &str) -> String {
        let symbol = report::normalize_symbol(symbol);
        debug!(symbol = %symbol, "stock quote requested");
        let outcome = self.client.get(&format!("quote/{symbol}")).await;
        report::quote_report(&symbol, outcome)
    }

    /// Fetches and renders the company profile for a ticker symbol.
    pub async fn company_profile(&self, symbol: &str) -> String {
        let symbol = report::normalize_symbol(symbol);
        debug!(symbol = %symbol, "company profile requested");
        let outcome = self.client.get(&format!("profile/{symbol}")).await;
        report::profile_report(&symbol, outcome)
    }
}
