//! Domain layer for the trivia service.
//!
//! Holds the pieces of request handling that need no I/O: shared id types,
//! the domain error enum, pagination windowing, quiz candidate selection and
//! question input validation.

pub mod error;
pub mod pagination;
pub mod question;
pub mod quiz;
pub mod types;
