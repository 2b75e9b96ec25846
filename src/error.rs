//! Error types for the battle engine
//!
//! Battle commands themselves are total functions over the current state and
//! never fail; errors only arise at the edges (deck construction, catalog
//! lookup, state serialization).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Unknown card: {0}")]
    UnknownCard(String),

    #[error("Invalid deck: {0}")]
    InvalidDeck(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
