//! # Searchparty Forensics
//!
//! HTTP adapters that back the [`searchparty_core`] ports with the remote
//! forensics API.
//!
//! - [`ForensicsInstructionSource`] implements
//!   [`InstructionSource`](searchparty_core::InstructionSource) via `GET <email>/directions`
//! - [`ForensicsPositionInvestigator`] implements
//!   [`PositionOracle`](searchparty_core::PositionOracle) via `GET <email>/location/<x>/<y>`
//!
//! Both adapters turn every failure (transport, undecodable body, upstream
//! `{ "error": ... }` payload, unknown shape) into the port's typed error and
//! log it once, as they return it.
//!
//! ## Example
//!
//! ```rust,ignore
//! use searchparty_forensics::{ForensicsConfig, search_party};
//!
//! let config = ForensicsConfig::builder().email("my@email.com").build()?;
//! let party = search_party(&config)?;
//! println!("{}", party.locate_target().await?);
//! ```

pub mod client;
pub mod config;
pub mod instructions;
pub mod investigator;
pub mod response;

pub use client::{ClientError, ForensicsClient};
pub use config::{ConfigError, ForensicsConfig, ForensicsConfigBuilder};
pub use instructions::ForensicsInstructionSource;
pub use investigator::ForensicsPositionInvestigator;
pub use response::Classified;

use searchparty_core::SearchParty;

/// A search party wired to the forensics API
pub type ForensicsSearchParty =
    SearchParty<ForensicsInstructionSource, ForensicsPositionInvestigator>;

/// Build a search party whose two adapters share one HTTP connection pool
pub fn search_party(config: &ForensicsConfig) -> Result<ForensicsSearchParty, ClientError> {
    let client = ForensicsClient::new(config)?;
    Ok(SearchParty::new(
        ForensicsInstructionSource::new(client.clone()),
        ForensicsPositionInvestigator::new(client),
    ))
}
