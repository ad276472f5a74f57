//! Instruction source backed by the forensics directions endpoint.

use async_trait::async_trait;
use searchparty_core::{Instruction, InstructionFetchError, InstructionSource};
use tracing::error;

use crate::client::ForensicsClient;
use crate::response::{Classified, classify_directions};

/// Fetches the instruction sequence from `<base_url>/<email>/directions`
#[derive(Debug, Clone)]
pub struct ForensicsInstructionSource {
    client: ForensicsClient,
}

impl ForensicsInstructionSource {
    pub fn new(client: ForensicsClient) -> Self {
        Self { client }
    }

    async fn fetch(&self) -> Result<Vec<Instruction>, InstructionFetchError> {
        let body = self
            .client
            .get(&["directions"])
            .await
            .map_err(|e| InstructionFetchError::new(format!("unexpected error: {e}")))?;

        match classify_directions(body) {
            Classified::Success(instructions) => Ok(instructions),
            Classified::Failure(message) => Err(InstructionFetchError::new(message)),
            Classified::Unrecognized(body) => Err(InstructionFetchError::new(format!(
                "unexpected json response: {body}"
            ))),
        }
    }
}

#[async_trait]
impl InstructionSource for ForensicsInstructionSource {
    async fn get_instructions(&self) -> Result<Vec<Instruction>, InstructionFetchError> {
        self.fetch()
            .await
            .inspect_err(|err| error!(error = %err, "Failed to fetch instructions"))
    }
}
