// PSP34 Ledger Core - Approval State
// This module holds transfer delegations: per-token single-spender slots
// and owner-scoped operator approvals.

use std::collections::{BTreeMap, HashMap};

use crate::error::{LedgerError, LedgerResult};
use crate::ledger::Ledger;
use crate::types::{Account, TokenId};

/// Transfer delegations for a single collection
///
/// A token approval is a single slot per identifier: granting again
/// replaces the previous spender, and the slot is cleared by the next
/// successful transfer. An operator approval is scoped to the
/// `(owner, operator)` pair and covers every token the owner holds now
/// or mints later; transfers do not touch it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApprovalRegistry {
    /// Single-spender slot per token; present only while active
    token_approvals: BTreeMap<TokenId, Account>,

    /// `(owner, operator)` entries; granting inserts `true`, revoking removes
    operator_approvals: HashMap<(Account, Account), bool>,
}

impl ApprovalRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Grant a single-token approval
    ///
    /// Requires `owner` to be the token's current owner (`NotAuthorized`
    /// otherwise, `TokenNotFound` if the token was never minted). Replaces
    /// any previously stored spender for the token.
    pub fn approve_token(
        &mut self,
        ledger: &Ledger,
        owner: &Account,
        id: &TokenId,
        spender: Account,
    ) -> LedgerResult<()> {
        let current = ledger.owner_of(id).ok_or(LedgerError::TokenNotFound)?;
        if current != owner {
            return Err(LedgerError::NotAuthorized);
        }

        self.token_approvals.insert(id.clone(), spender);
        Ok(())
    }

    /// Clear a token's single-spender slot; idempotent
    pub fn revoke_token(&mut self, id: &TokenId) {
        self.token_approvals.remove(id);
    }

    /// Get the spender currently holding a token's single slot
    pub fn token_approval(&self, id: &TokenId) -> Option<&Account> {
        self.token_approvals.get(id)
    }

    /// Set or clear an operator approval for the `(owner, operator)` pair
    pub fn approve_operator(&mut self, owner: &Account, operator: &Account, approved: bool) {
        if approved {
            self.operator_approvals.insert((owner.clone(), operator.clone()), true);
        } else {
            self.operator_approvals.remove(&(owner.clone(), operator.clone()));
        }
    }

    /// Check if an operator holds a blanket approval from an owner
    pub fn is_operator(&self, owner: &Account, operator: &Account) -> bool {
        *self.operator_approvals.get(&(owner.clone(), operator.clone())).unwrap_or(&false)
    }

    /// Check if an account may move a token
    ///
    /// The single authorization predicate used by the transfer protocol:
    /// the account is the current owner, holds the token's single slot, or
    /// is an operator for the current owner. False for unminted tokens.
    pub fn is_approved_or_owner(&self, account: &Account, id: &TokenId, ledger: &Ledger) -> bool {
        let owner = match ledger.owner_of(id) {
            Some(owner) => owner,
            None => return false,
        };

        // Owner always has permission
        if owner == account {
            return true;
        }

        // Check single token approval
        if self.token_approvals.get(id) == Some(account) {
            return true;
        }

        // Check operator approval granted by the current owner
        self.is_operator(owner, account)
    }

    /// Drop a token's single-spender slot after a successful transfer
    ///
    /// A token approval does not survive an ownership change; operator
    /// approvals are left untouched.
    pub fn clear_token_approval_on_transfer(&mut self, id: &TokenId) {
        self.token_approvals.remove(id);
    }
}
