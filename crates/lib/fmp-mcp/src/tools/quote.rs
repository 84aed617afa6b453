use rmcp::{
    ErrorData,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    schemars,
    tool,
    tool_router,
};
use serde::{Deserialize, Serialize};

use crate::FmpMcp;

/// Parameters for fetching a stock quote.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct StockQuoteParams {
    pub symbol: String,
}

/// Parameters for fetching a company profile.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct CompanyProfileParams {
    pub symbol: String,
}

#[tool_router(router = tool_router_quotes, vis = "pub")]
impl FmpMcp {
    #[tool(
        description = "Get the current stock quote for a ticker symbol (e.g. AAPL, MSFT, GOOGL)."
    )]
    async fn get_stock_quote(
        &self,
        Parameters(params): Parameters<StockQuoteParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let report = self.control().stock_quote(&params.symbol).await;
        Ok(CallToolResult::success(vec![Content::text(report)]))
    }

    #[tool(
        description = "Get company profile information for a ticker symbol (e.g. AAPL, MSFT, GOOGL)."
    )]
    async fn get_company_profile(
        &self,
        Parameters(params): Parameters<CompanyProfileParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let report = self.control().company_profile(&params.symbol).await;
        Ok(CallToolResult::success(vec![Content::text(report)]))
    }
}
