//! # Mock Ports for Testing
//!
//! Scripted [`InstructionSource`] and [`PositionOracle`] implementations.
//! Clones share their call records, so a test can hand one clone to the
//! orchestrator and inspect another afterwards.

use async_trait::async_trait;
use searchparty_core::{
    Instruction, InstructionFetchError, InstructionSource, Position, PositionOracle,
    PositionSubmissionError,
};
use std::sync::{Arc, Mutex};

/// An instruction source that returns a predefined result
#[derive(Debug, Clone)]
pub struct MockInstructionSource {
    result: Result<Vec<Instruction>, InstructionFetchError>,
    call_count: Arc<Mutex<usize>>,
}

impl MockInstructionSource {
    /// Source yielding `instructions` on every call
    pub fn with_instructions(instructions: Vec<Instruction>) -> Self {
        Self::with_result(Ok(instructions))
    }

    /// Source failing with `message` on every call
    pub fn with_failure(message: impl Into<String>) -> Self {
        Self::with_result(Err(InstructionFetchError::new(message)))
    }

    pub fn with_result(result: Result<Vec<Instruction>, InstructionFetchError>) -> Self {
        Self {
            result,
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Get the number of times instructions were requested
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

#[async_trait]
impl InstructionSource for MockInstructionSource {
    async fn get_instructions(&self) -> Result<Vec<Instruction>, InstructionFetchError> {
        *self.call_count.lock().unwrap() += 1;
        self.result.clone()
    }
}

/// A position oracle that records submissions and returns a predefined result
#[derive(Debug, Clone)]
pub struct MockPositionOracle {
    result: Result<String, PositionSubmissionError>,
    call_history: Arc<Mutex<Vec<Position>>>,
}

impl MockPositionOracle {
    /// Oracle answering every submission with `message`
    pub fn with_message(message: impl Into<String>) -> Self {
        Self::with_result(Ok(message.into()))
    }

    /// Oracle failing every submission with `message`
    pub fn with_failure(message: impl Into<String>) -> Self {
        Self::with_result(Err(PositionSubmissionError::new(message)))
    }

    pub fn with_result(result: Result<String, PositionSubmissionError>) -> Self {
        Self {
            result,
            call_history: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get the number of submissions received
    pub fn call_count(&self) -> usize {
        self.call_history.lock().unwrap().len()
    }

    /// Positions submitted so far, in call order
    pub fn submitted_positions(&self) -> Vec<Position> {
        self.call_history.lock().unwrap().clone()
    }

    /// Check if the oracle was asked about a specific position
    pub fn was_called_with(&self, position: Position) -> bool {
        self.call_history.lock().unwrap().contains(&position)
    }
}

impl Default for MockPositionOracle {
    fn default() -> Self {
        Self::with_message("")
    }
}

#[async_trait]
impl PositionOracle for MockPositionOracle {
    async fn investigate_position(
        &self,
        position: Position,
    ) -> Result<String, PositionSubmissionError> {
        self.call_history.lock().unwrap().push(position);
        self.result.clone()
    }
}
