// Transfer Operations
// This module contains the transfer operation logic.

use log::debug;

use crate::approvals::ApprovalRegistry;
use crate::error::{LedgerError, LedgerResult};
use crate::ledger::Ledger;
use crate::types::{Account, TokenId};

// ========================================
// Transfer Operation
// ========================================

/// Transfer a token to a new owner
///
/// The caller must be the current owner, hold the token's single-spender
/// slot, or be an operator for the current owner. A transfer to the
/// current owner is permitted; it leaves balances net unchanged but still
/// clears the single-spender slot. Either the whole transfer applies or
/// nothing does.
///
/// # Parameters
/// - `ledger`: Ownership state
/// - `approvals`: Delegation state
/// - `caller`: Account attempting the transfer
/// - `id`: Token identifier
/// - `to`: New owner account
///
/// # Returns
/// - `Ok(())`: Success
/// - `Err(LedgerError)`: Error code
pub fn transfer(
    ledger: &mut Ledger,
    approvals: &mut ApprovalRegistry,
    caller: &Account,
    id: &TokenId,
    to: &Account,
) -> LedgerResult<()> {
    // Step 1: Resolve the current owner
    let owner = ledger
        .owner_of(id)
        .ok_or(LedgerError::TokenNotFound)?
        .clone();

    // Step 2: Permission check
    if !approvals.is_approved_or_owner(caller, id, ledger) {
        return Err(LedgerError::NotAuthorized);
    }

    // Step 3: Move ownership
    ledger.record_transfer(id, &owner, to.clone())?;

    // Step 4: The single-spender slot does not survive an ownership change
    approvals.clear_token_approval_on_transfer(id);

    debug!("transferred {} from {} to {}", id, owner, to);
    Ok(())
}
