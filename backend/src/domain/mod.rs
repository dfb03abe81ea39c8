//! Domain primitives and contracts.
//!
//! Purpose: define the transport-agnostic core — the user entity, the word
//! corpus and email generator, the agent-action contract, and the errors
//! adapters translate at the boundary. Types here never depend on actix or
//! Diesel; the inbound and outbound layers adapt them.
//!
//! Public surface:
//! - [`User`] — account record with a store-assigned id.
//! - [`WordCorpus`] / [`EmailGenerator`] — seed-data email synthesis.
//! - [`AgentAction`] — the increment/decrement contract.
//! - [`Error`] / [`ErrorCode`] — API error response payload.
//! - [`ports`] — interfaces the domain expects adapters to implement.

pub mod action;
pub mod corpus;
pub mod error;
pub mod generator;
pub mod ports;
pub mod user;

pub use self::action::{AgentAction, InvalidActionError};
pub use self::corpus::{CorpusError, WordCorpus};
pub use self::error::{Error, ErrorCode, TRACE_ID_HEADER};
pub use self::generator::EmailGenerator;
pub use self::user::{DEFAULT_VALUE, SEEDED_VALUE, User};
