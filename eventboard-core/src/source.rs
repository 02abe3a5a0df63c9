//! Where events come from and proposals go.

use async_trait::async_trait;

use crate::error::BoardResult;
use crate::form::Proposal;

/// The remote spreadsheet, seen as a black box.
#[async_trait]
pub trait EventSource: Send + Sync {
    /// Fetch every event row, whatever its status.
    async fn fetch_records(&self) -> BoardResult<Vec<serde_json::Value>>;

    /// Send a proposal without looking at the response.
    ///
    /// `Ok` only means no transport error occurred.
    async fn submit_proposal(&self, proposal: &Proposal) -> BoardResult<()>;
}
