// PSP34 Ledger Operations
// This module contains the core business logic for ledger operations.
//
// The operations are designed to be runtime-agnostic:
// - State is passed in as explicit Ledger/ApprovalRegistry references
// - The caller identity is passed as a parameter, never inferred
// - This allows testing and reuse across different runtime environments

mod approve;
mod mint;
mod query;
mod transfer;

pub use approve::*;
pub use mint::*;
pub use query::*;
pub use transfer::*;
