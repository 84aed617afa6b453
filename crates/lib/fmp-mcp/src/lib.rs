//! MCP server implementation for fmp-mcp.
//!
//! This crate wires the FMP control plane into rmcp tool handlers and
//! exposes the MCP-facing tool surface for quotes and company profiles.

mod tools;
pub mod server;

use fmp_core::control::FmpControlPlane;
use rmcp::{
    ErrorData,
    ServerHandler,
    handler::server::tool::ToolRouter,
    tool,
    tool_handler,
    tool_router,
};
use rmcp::model::{CallToolResult, Content, ServerCapabilities, ServerInfo};

const SERVER_INSTRUCTIONS: &str = r"fmp-mcp provides MCP tools for stock market lookups backed by Financial Modeling Prep.

Workflow:
1. Call `get_stock_quote` with a ticker symbol (e.g. AAPL, MSFT, GOOGL) for the
   current price, change, volume, market cap, P/E ratio, and day range.
2. Call `get_company_profile` with a ticker symbol for company facts: industry,
   sector, country, market cap, employees, CEO, website, and a short description.

Notes:
- Symbols are case-insensitive; surrounding whitespace is ignored.
- Both tools return plain text reports. Failures are reported inside the text
  (prefixed `Error:`), not as protocol errors.
- The server needs the FMP_API_KEY environment variable; while it is unset,
  every lookup reports a configuration error.
- `help` lists the available commands. `health` returns `ok`.";

/// MCP server wrapper around the FMP control plane and tool routers.
#[derive(Clone)]
pub struct FmpMcp {
    tool_router: ToolRouter<Self>,
    control: FmpControlPlane,
}

impl FmpMcp {
    /// Creates a new server over a control plane.
    #[must_use]
    pub fn new(control: FmpControlPlane) -> Self {
        let tool_router =
            Self::tool_router_core() + Self::tool_router_quotes() + Self::tool_router_context();
        Self {
            tool_router,
            control,
        }
    }

    pub(crate) const fn control(&self) -> &FmpControlPlane {
        &self.control
    }
}

#[tool_router(router = tool_router_core, vis = "pub")]
impl FmpMcp {
    #[tool(description = "Health check. Returns 'ok'.")]
    async fn health(&self) -> Result<CallToolResult, ErrorData> {
        Ok(CallToolResult::success(vec![Content::text("ok")]))
    }
}

#[tool_handler]
impl ServerHandler for FmpMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(SERVER_INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .build(),
            ..Default::default()
        }
    }
}
