//! Message source parser.
//!
//! This module turns grammar source strings into the compiled message IR.
//! Lexing lives in the cursor, the grammar in `message`, and date-skeleton
//! compilation in `skeleton`. All validation is performed here at parse
//! time; evaluation never encounters a structurally invalid message except
//! through the explicit deferred-error path.

mod cursor;
pub mod error;
mod message;
mod skeleton;

pub use error::ParseError;
pub use message::parse;
