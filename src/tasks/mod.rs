//! Background Tasks Module
//!
//! Contains background tasks that run for the life of the process.
//!
//! # Tasks
//! - Cache reclamation: removes response cache entries older than the
//!   configured interval, one scan per interval

mod cleanup;

pub use cleanup::spawn_cleanup_task;
