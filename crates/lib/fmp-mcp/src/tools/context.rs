use rmcp::{
    ErrorData,
    model::{CallToolResult, Content},
    schemars,
    tool,
    tool_router,
};
use serde::{Deserialize, Serialize};

use crate::FmpMcp;

/// Payload listing the MCP commands exposed by this server.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct HelpCommands {
    pub commands: Vec<String>,
}

impl Default for HelpCommands {
    fn default() -> Self {
        Self {
            commands: vec![
                "help - List the MCP commands exposed by this server.".to_string(),
                "get_stock_quote - Fetch the current quote for a ticker symbol.".to_string(),
                "get_company_profile - Fetch company profile information for a ticker symbol."
                    .to_string(),
                "health - Health check, returns 'ok'.".to_string(),
            ],
        }
    }
}

#[tool_router(router = tool_router_context, vis = "pub")]
impl FmpMcp {
    #[tool(description = "List the MCP commands exposed by this server.")]
    async fn help(&self) -> Result<CallToolResult, ErrorData> {
        Ok(CallToolResult::success(vec![Content::json(
            HelpCommands::default(),
        )?]))
    }
}
