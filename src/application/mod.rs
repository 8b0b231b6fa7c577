//! Application layer
//!
//! Use cases that orchestrate domain services to implement the operations the
//! pages expose. Each use case pairs a `Command` DTO with a `Response` DTO.

pub mod invoice;
pub mod schedule;
