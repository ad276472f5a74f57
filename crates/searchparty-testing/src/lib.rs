//! # Searchparty Testing
//!
//! Mock implementations of the two collaborator ports. They return scripted
//! results and record every call, so tests can assert on what the
//! orchestrator submitted without touching the network.
//!
//! ```rust
//! use searchparty_core::{Instruction, SearchParty};
//! use searchparty_testing::{MockInstructionSource, MockPositionOracle};
//!
//! # block_on(async {
//! let source = MockInstructionSource::with_instructions(vec![Instruction::Forward]);
//! let oracle = MockPositionOracle::with_message("found");
//! let party = SearchParty::new(source, oracle.clone());
//!
//! assert_eq!(party.locate_target().await.unwrap(), "found");
//! assert_eq!(oracle.submitted_positions()[0].y, 1);
//! # });
//! # fn block_on<F: std::future::Future>(f: F) -> F::Output {
//! #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
//! # }
//! ```

pub mod mock_ports;

pub use mock_ports::{MockInstructionSource, MockPositionOracle};
