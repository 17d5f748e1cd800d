// PSP34-Style NFT Ledger Core
// This crate provides the storage-and-rules core of a PSP34 token:
// who owns which token, how many tokens an account holds, and which
// delegations authorize transfers. It carries no runtime concerns, no
// signature checks and no network surface; a host embeds a `Collection`
// per deployed instance and supplies the authenticated caller.
//
// Features:
// - Polymorphic token identifiers (u8 through u128 plus raw bytes)
// - Explicit and sequential minting
// - Single-slot token approvals, cleared on every transfer
// - Operator approvals covering an owner's whole holdings
// - Folded PSP34 `approve` entry point (token or operator scope)
//
// Module Structure:
// - error: Error codes and types
// - types: Core data structures (TokenId, Account)
// - ledger: Ownership and balance state
// - approvals: Delegation state
// - operations: Core operation logic (mint, transfer, approve, query)
// - collection: Per-instance facade over the above

mod approvals;
mod collection;
mod error;
mod ledger;
pub mod operations;
mod types;

pub use approvals::*;
pub use collection::*;
pub use error::*;
pub use ledger::*;
pub use operations::*;
pub use types::*;
