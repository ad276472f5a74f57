//! Collaborator ports.
//!
//! The orchestrator talks to the outside world through two traits. Production
//! code backs both with the remote forensics API; tests use in-memory mocks.

use async_trait::async_trait;

use crate::error::{InstructionFetchError, PositionSubmissionError};
use crate::instruction::Instruction;
use crate::navigator::Position;

/// Supplies the ordered instruction sequence for a run.
#[async_trait]
pub trait InstructionSource: Send + Sync {
    /// Fetch the full, finite instruction sequence.
    ///
    /// Implementations capture every failure (transport, decoding, upstream
    /// error payloads) into an [`InstructionFetchError`] and must not panic.
    async fn get_instructions(&self) -> Result<Vec<Instruction>, InstructionFetchError>;
}

/// Evaluates a final position and reports a descriptive outcome.
#[async_trait]
pub trait PositionOracle: Send + Sync {
    /// Submit `position` and return the remote side's message.
    async fn investigate_position(
        &self,
        position: Position,
    ) -> Result<String, PositionSubmissionError>;
}
