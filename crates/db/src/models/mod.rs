//! Domain model structs.
//!
//! Each submodule contains a `FromRow` + `Serialize` entity struct matching
//! the database row. Create payloads are validated in `trivia_core` and
//! passed to the repositories as `trivia_core::question::NewQuestion`.

pub mod category;
pub mod question;
