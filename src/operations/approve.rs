// Approval Operations
// This module contains the approval entry point shared by token-scoped
// and operator-scoped grants.

use log::debug;

use crate::approvals::ApprovalRegistry;
use crate::error::{LedgerError, LedgerResult};
use crate::ledger::Ledger;
use crate::types::{Account, TokenId};

// ========================================
// Approve Operation
// ========================================

/// Grant or revoke a transfer delegation
///
/// One entry point for both delegation scopes, selected by `id`:
/// - `Some(id)`: manage the token's single-spender slot. Only the current
///   owner may grant or revoke; granting to the owner themselves fails
///   with `SelfApprove`. Revoking clears the slot regardless of which
///   spender it names (single slot per token) and is idempotent.
/// - `None`: manage the operator approval from `caller` to `operator`,
///   covering the caller's entire current and future holdings. Granting
///   to the caller themselves fails with `SelfApprove`; revoking clears
///   the entry and is idempotent.
///
/// # Parameters
/// - `ledger`: Ownership state
/// - `approvals`: Delegation state
/// - `caller`: Account issuing the grant/revoke
/// - `operator`: Account receiving (or losing) the delegation
/// - `id`: Token scope, or `None` for operator scope
/// - `approved`: `true` grants, `false` revokes
///
/// # Returns
/// - `Ok(())`: Success
/// - `Err(LedgerError)`: Error code
pub fn approve(
    ledger: &Ledger,
    approvals: &mut ApprovalRegistry,
    caller: &Account,
    operator: &Account,
    id: Option<&TokenId>,
    approved: bool,
) -> LedgerResult<()> {
    match id {
        Some(id) => {
            // Step 1: Resolve the token and its owner
            let owner = ledger.owner_of(id).ok_or(LedgerError::TokenNotFound)?;

            // Step 2: Granting to the current owner is rejected
            if approved && operator == owner {
                return Err(LedgerError::SelfApprove);
            }

            // Step 3: Only the current owner manages the single slot
            if caller != owner {
                return Err(LedgerError::NotAuthorized);
            }

            // Step 4: Update the slot
            if approved {
                approvals.approve_token(ledger, caller, id, operator.clone())?;
            } else {
                approvals.revoke_token(id);
            }
            debug!("token approval {} for {}: {}", id, operator, approved);
        }
        None => {
            // Operator scope: the caller delegates their own holdings
            if approved && operator == caller {
                return Err(LedgerError::SelfApprove);
            }

            approvals.approve_operator(caller, operator, approved);
            debug!("operator approval {} -> {}: {}", caller, operator, approved);
        }
    }

    Ok(())
}
