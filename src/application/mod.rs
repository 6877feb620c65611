//! Application layer - Use cases and port interfaces
//!
//! Contains the input directory queries, the record session workflow,
//! and trait definitions for external system interactions.

pub mod directory;
pub mod interrupt;
pub mod ports;
pub mod record_session;

// Re-export use cases
pub use directory::InputDirectory;
pub use interrupt::{Interrupt, InterruptTrigger};
pub use record_session::{
    CleanupOutcome, RecordSessionUseCase, SessionCallbacks, SessionEnd, SessionError,
    SessionFault, SessionReport, SessionRequest,
};
