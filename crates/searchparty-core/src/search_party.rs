//! # Search Orchestration
//!
//! [`SearchParty`] runs a strict three-step pipeline:
//!
//! 1. fetch the instruction sequence from the [`InstructionSource`];
//! 2. replay it on a fresh [`Navigator`];
//! 3. submit the final [`Position`] to the [`PositionOracle`].
//!
//! Only one external call is in flight at a time. A failure from either
//! collaborator ends the run and is returned exactly as the collaborator
//! produced it. The orchestrator never retries and never logs failures itself;
//! that happens once, in the adapter that produced them.

use tracing::{debug, instrument};

use crate::error::SearchResult;
use crate::instruction::Instruction;
use crate::navigator::{Navigator, Position};
use crate::ports::{InstructionSource, PositionOracle};

/// Drives a single search from instructions to the oracle's verdict
#[derive(Debug, Clone)]
pub struct SearchParty<S, O> {
    instruction_source: S,
    position_oracle: O,
}

impl<S, O> SearchParty<S, O>
where
    S: InstructionSource,
    O: PositionOracle,
{
    pub fn new(instruction_source: S, position_oracle: O) -> Self {
        Self {
            instruction_source,
            position_oracle,
        }
    }

    /// Follow the remote instructions and report what was found at the end.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InstructionFetch`](crate::SearchError::InstructionFetch)
    /// when no instructions could be obtained (the oracle is then never
    /// called), or [`SearchError::PositionSubmission`](crate::SearchError::PositionSubmission)
    /// when the oracle rejects the final position.
    #[instrument(level = "debug", skip_all)]
    pub async fn locate_target(&self) -> SearchResult<String> {
        let instructions = self.instruction_source.get_instructions().await?;

        let position = replay(&instructions);
        debug!(
            instructions = instructions.len(),
            position = %position,
            "Instructions replayed"
        );

        let message = self.position_oracle.investigate_position(position).await?;
        Ok(message)
    }

    pub fn position_oracle(&self) -> &O {
        &self.position_oracle
    }
}

/// Final position reached by replaying `instructions` from the origin
pub fn replay<'a, I>(instructions: I) -> Position
where
    I: IntoIterator<Item = &'a Instruction>,
{
    let mut navigator = Navigator::new();
    navigator.apply_all(instructions.into_iter().copied());
    navigator.position()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{InstructionFetchError, PositionSubmissionError, SearchError};
    use crate::instruction::Instruction::{Forward, Left, Right};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct ScriptedSource(Result<Vec<Instruction>, InstructionFetchError>);

    #[async_trait]
    impl InstructionSource for ScriptedSource {
        async fn get_instructions(&self) -> Result<Vec<Instruction>, InstructionFetchError> {
            self.0.clone()
        }
    }

    #[derive(Default)]
    struct RecordingOracle {
        submitted: Mutex<Vec<Position>>,
        failure: Option<PositionSubmissionError>,
    }

    #[async_trait]
    impl PositionOracle for RecordingOracle {
        async fn investigate_position(
            &self,
            position: Position,
        ) -> Result<String, PositionSubmissionError> {
            self.submitted.lock().unwrap().push(position);
            match &self.failure {
                Some(err) => Err(err.clone()),
                None => Ok(format!("investigated {position}")),
            }
        }
    }

    #[test]
    fn test_replay_empty_sequence_stays_at_origin() {
        assert_eq!(replay(&Vec::<Instruction>::new()), Position::ORIGIN);
    }

    #[test]
    fn test_replay_reference_route() {
        let route = [
            Forward, Right, Forward, Forward, Forward, Left, Forward, Forward, Left, Right,
            Forward, Right, Forward, Forward, Right, Forward, Forward, Left,
        ];
        assert_eq!(replay(&route), Position::new(5, 2));
    }

    #[tokio::test]
    async fn test_locate_target_submits_final_position() {
        let party = SearchParty::new(
            ScriptedSource(Ok(vec![Right, Forward, Forward])),
            RecordingOracle::default(),
        );

        let message = party.locate_target().await.unwrap();

        assert_eq!(message, "investigated (2, 0)");
        assert_eq!(
            *party.position_oracle().submitted.lock().unwrap(),
            vec![Position::new(2, 0)]
        );
    }

    #[tokio::test]
    async fn test_fetch_failure_skips_oracle() {
        let failure = InstructionFetchError::new("unexpected error: timed out");
        let party = SearchParty::new(
            ScriptedSource(Err(failure.clone())),
            RecordingOracle::default(),
        );

        let err = party.locate_target().await.unwrap_err();

        assert_eq!(err, SearchError::InstructionFetch(failure));
        assert!(party.position_oracle().submitted.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_oracle_failure_is_returned_unchanged() {
        let failure = PositionSubmissionError::new("invalid coordinates");
        let party = SearchParty::new(
            ScriptedSource(Ok(vec![])),
            RecordingOracle {
                failure: Some(failure.clone()),
                ..Default::default()
            },
        );

        let err = party.locate_target().await.unwrap_err();

        assert_eq!(err, SearchError::PositionSubmission(failure));
    }
}
