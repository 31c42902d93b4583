//! Wire types for the `/mcp/query` and `/health` endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ConversationContext;
use crate::constants::QUERY_TEMPLATE_PREFIX;

/// Body of `POST /mcp/query`. Field order is the serialized order.
#[derive(Debug, Serialize)]
pub struct QueryRequest<'a> {
    pub context: &'a ConversationContext,
    pub query: String,
    pub parameters: QueryParameters<'a>,
}

#[derive(Debug, Serialize)]
pub struct QueryParameters<'a> {
    pub flight_iata: &'a str,
}

impl<'a> QueryRequest<'a> {
    /// Build the request for one search. The flight number is forwarded raw:
    /// no trimming, no case folding, empty input allowed.
    pub fn for_flight(flight_number: &'a str, context: &'a ConversationContext) -> Self {
        Self {
            context,
            query: format!("{}{}", QUERY_TEMPLATE_PREFIX, flight_number),
            parameters: QueryParameters {
                flight_iata: flight_number,
            },
        }
    }
}

/// Body of a successful `POST /mcp/query` reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    pub response: QueryAnswer,
    pub context: ConversationContext,
    pub status: String,
}

/// The `response` member. `flight_info` is display-only and unconstrained,
/// but the key itself must be present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryAnswer {
    pub flight_info: Value,
    pub query: String,
}

impl QueryResponse {
    /// `flight_info` as 2-space indented JSON.
    pub fn pretty_flight_info(&self) -> String {
        serde_json::to_string_pretty(&self.response.flight_info)
            .unwrap_or_else(|_| self.response.flight_info.to_string())
    }
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BackendHealth {
    pub status: String,
    #[serde(default)]
    pub api_key_configured: bool,
}
