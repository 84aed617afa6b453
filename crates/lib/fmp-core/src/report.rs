//! Report rendering for the tool surface.
//!
//! Turns gateway outcomes into the fixed-layout text blocks returned to
//! tool callers. Every error condition is rendered into the text itself;
//! nothing here returns `Err`.

use serde_json::Value;

use crate::client::FmpError;
use crate::record::{Record, first_record};

const DESCRIPTION_LIMIT: usize = 500;

/// Normalizes a ticker symbol: surrounding whitespace stripped, uppercased.
/// Idempotent.
#[must_use]
pub fn normalize_symbol(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Renders the stock quote report for `symbol` from a gateway outcome.
#[must_use]
pub fn quote_report(symbol: &str, outcome: Result<Value, FmpError>) -> String {
    let body = match outcome {
        Ok(body) => body,
        Err(err) => return format!("Error: {err}"),
    };
    first_record(&body).map_or_else(
        || format!("No data found for symbol: {symbol}"),
        |quote| render_quote(symbol, &quote),
    )
}

/// Renders the company profile report for `symbol` from a gateway outcome.
#[must_use]
pub fn profile_report(symbol: &str, outcome: Result<Value, FmpError>) -> String {
    let body = match outcome {
        Ok(body) => body,
        Err(err) => return format!("Error: {err}"),
    };
    first_record(&body).map_or_else(
        || format!("No profile found for symbol: {symbol}"),
        |profile| render_profile(symbol, &profile),
    )
}

fn render_quote(symbol: &str, quote: &Record<'_>) -> String {
    format!(
        "Stock Quote: {name} ({symbol})\n\
         \n\
         Current Price: {price}\n\
         Change: {change} ({change_pct}%)\n\
         Volume: {volume}\n\
         Market Cap: ${market_cap}\n\
         P/E Ratio: {pe}\n\
         Previous Close: {previous_close}\n\
         Day Range: {day_low} - {day_high}\n",
        name = quote.text_or_na("name"),
        price = quote.currency("price"),
        change = quote.currency("change"),
        change_pct = quote.decimal("changesPercentage"),
        volume = quote.grouped("volume"),
        market_cap = quote.grouped("marketCap"),
        pe = quote.plain_or_na("pe"),
        previous_close = quote.currency("previousClose"),
        day_low = quote.currency("dayLow"),
        day_high = quote.currency("dayHigh"),
    )
}

fn render_profile(symbol: &str, profile: &Record<'_>) -> String {
    format!(
        "Company Profile: {name} ({symbol})\n\
         \n\
         Industry: {industry}\n\
         Sector: {sector}\n\
         Country: {country}\n\
         Market Cap: ${market_cap}\n\
         Employees: {employees}\n\
         Website: {website}\n\
         CEO: {ceo}\n\
         \n\
         Description:\n\
         {description}...\n\
         \n\
         Stock Info:\n\
         Exchange: {exchange}\n\
         Current Price: {price}\n\
         Beta: {beta}\n",
        name = profile.text_or_na("companyName"),
        industry = profile.text_or_na("industry"),
        sector = profile.text_or_na("sector"),
        country = profile.text_or_na("country"),
        market_cap = profile.grouped("mktCap"),
        employees = profile.count_or_na("fullTimeEmployees"),
        website = profile.text_or_na("website"),
        ceo = profile.text_or_na("ceo"),
        description = truncate_chars(
            profile.text("description").unwrap_or("No description available"),
            DESCRIPTION_LIMIT,
        ),
        exchange = profile.text_or_na("exchangeShortName"),
        price = profile.currency("price"),
        beta = profile.plain_or_na("beta"),
    )
}

// The ellipsis after the description is appended whether or not the text
// was actually cut.
fn truncate_chars(text: &str, limit: usize) -> &str {
    text.char_indices()
        .nth(limit)
        .map_or(text, |(index, _)| &text[..index])
}
