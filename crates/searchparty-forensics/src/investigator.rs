//! Position oracle backed by the forensics location endpoint.

use async_trait::async_trait;
use searchparty_core::{Position, PositionOracle, PositionSubmissionError};
use tracing::error;

use crate::client::ForensicsClient;
use crate::response::{Classified, classify_location};

/// Submits positions to `<base_url>/<email>/location/<x>/<y>`
#[derive(Debug, Clone)]
pub struct ForensicsPositionInvestigator {
    client: ForensicsClient,
}

impl ForensicsPositionInvestigator {
    pub fn new(client: ForensicsClient) -> Self {
        Self { client }
    }

    async fn investigate(&self, position: Position) -> Result<String, PositionSubmissionError> {
        let x = position.x.to_string();
        let y = position.y.to_string();
        let body = self
            .client
            .get(&["location", x.as_str(), y.as_str()])
            .await
            .map_err(|e| PositionSubmissionError::new(format!("unexpected error: {e}")))?;

        match classify_location(body) {
            Classified::Success(message) => Ok(message),
            Classified::Failure(message) => Err(PositionSubmissionError::new(message)),
            Classified::Unrecognized(body) => Err(PositionSubmissionError::new(format!(
                "unexpected json response: {body}"
            ))),
        }
    }
}

#[async_trait]
impl PositionOracle for ForensicsPositionInvestigator {
    async fn investigate_position(
        &self,
        position: Position,
    ) -> Result<String, PositionSubmissionError> {
        self.investigate(position).await.inspect_err(|err| {
            error!(
                error = %err,
                position = %position,
                "Failed to investigate position"
            )
        })
    }
}
