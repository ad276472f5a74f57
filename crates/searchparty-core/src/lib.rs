//! # Searchparty Core
//!
//! Navigation state machine and the search workflow built on top of it.
//!
//! ## Overview
//!
//! 1. An [`InstructionSource`] supplies an ordered list of [`Instruction`]s
//! 2. A fresh [`Navigator`] replays them from the origin, facing north
//! 3. The final [`Position`] is submitted to a [`PositionOracle`]
//!
//! Either collaborator may fail; the failure is returned by value as a
//! [`SearchError`] and ends the run.
//!
//! ## Example: Replaying Instructions
//!
//! ```rust
//! use searchparty_core::{Bearing, Instruction, Navigator, Position};
//!
//! let mut navigator = Navigator::new();
//! navigator.apply_all([Instruction::Forward, Instruction::Right, Instruction::Forward]);
//!
//! assert_eq!(navigator.position(), Position::new(1, 1));
//! assert_eq!(navigator.bearing(), Bearing::East);
//! ```
//!
//! ## Example: Running a Search
//!
//! ```rust,ignore
//! let party = SearchParty::new(instruction_source, position_oracle);
//!
//! match party.locate_target().await {
//!     Ok(message) => println!("{message}"),
//!     Err(err) => eprintln!("error: {err}"),
//! }
//! ```

pub mod error;
pub mod instruction;
pub mod navigator;
pub mod ports;
pub mod search_party;

pub use error::{InstructionFetchError, PositionSubmissionError, SearchError, SearchResult};
pub use instruction::Instruction;
pub use navigator::{Bearing, Navigator, Position};
pub use ports::{InstructionSource, PositionOracle};
pub use search_party::{SearchParty, replay};
