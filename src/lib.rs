//! # Searchparty
//!
//! Fetches movement instructions from the remote forensics service, replays
//! them on a grid navigator and submits the final position back to learn what
//! was found there.
//!
//! The navigator, collaborator ports and the [`SearchParty`] workflow come
//! from `searchparty-core`; the HTTP adapters for the remote API live in
//! [`forensics`].

pub use searchparty_forensics as forensics;

pub use searchparty_core::{
    Bearing, Instruction, InstructionFetchError, InstructionSource, Navigator, Position,
    PositionOracle, PositionSubmissionError, SearchError, SearchParty, SearchResult,
};
pub use searchparty_forensics::{ForensicsConfig, ForensicsSearchParty, search_party};
