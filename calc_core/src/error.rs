//! Calculator error types
//!
//! Data-quality problems in scripts never surface here - they degrade
//! to zero contributions inside the collector. These errors mark
//! structural misuse of the orchestrator, which should fail fast.

use thiserror::Error;

/// Structural orchestrator errors
#[derive(Error, Debug)]
pub enum CalcError {
    #[error("master item table not loaded")]
    MasterItemsNotLoaded,
}
