// Query Operations
// This module contains read-only functions that combine ownership and
// delegation state. Single-map reads live on Ledger and ApprovalRegistry.

use crate::approvals::ApprovalRegistry;
use crate::ledger::Ledger;
use crate::types::{Account, TokenId};

// ========================================
// Allowance Query
// ========================================

/// Check if an operator holds a delegation from an owner
///
/// # Parameters
/// - `ledger`: Ownership state
/// - `approvals`: Delegation state
/// - `owner`: Account whose delegation is queried
/// - `operator`: Account the delegation would cover
/// - `id`: Token scope, or `None` for the operator scope only
///
/// # Returns
/// - `true` if `operator` holds an operator approval from `owner`, or
///   (token scope only) the token's single slot names `operator` while
///   `owner` is still the token's current owner
pub fn allowance(
    ledger: &Ledger,
    approvals: &ApprovalRegistry,
    owner: &Account,
    operator: &Account,
    id: Option<&TokenId>,
) -> bool {
    // An operator approval covers every identifier
    if approvals.is_operator(owner, operator) {
        return true;
    }

    match id {
        // The single slot counts only while `owner` still owns the token
        Some(id) => {
            ledger.owner_of(id) == Some(owner) && approvals.token_approval(id) == Some(operator)
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::super::approve::approve;
    use super::super::mint::mint;
    use super::super::transfer::transfer;
    use super::*;

    fn account(byte: u8) -> Account {
        Account::new([byte; 32])
    }

    fn setup_test() -> (Ledger, ApprovalRegistry, Account, TokenId) {
        let mut ledger = Ledger::new(&account(9));
        let owner = account(1);
        let id = TokenId::U8(0);
        mint(&mut ledger, id.clone(), &owner).unwrap();
        (ledger, ApprovalRegistry::new(), owner, id)
    }

    #[test]
    fn test_allowance_defaults_to_false() {
        let (ledger, approvals, owner, id) = setup_test();
        let operator = account(2);

        assert!(!allowance(&ledger, &approvals, &owner, &operator, None));
        assert!(!allowance(&ledger, &approvals, &owner, &operator, Some(&id)));
    }

    #[test]
    fn test_allowance_operator_scope() {
        let (ledger, mut approvals, owner, id) = setup_test();
        let operator = account(2);

        approve(&ledger, &mut approvals, &owner, &operator, None, true).unwrap();

        // The blanket grant answers for any identifier
        assert!(allowance(&ledger, &approvals, &owner, &operator, None));
        assert!(allowance(&ledger, &approvals, &owner, &operator, Some(&id)));
        assert!(allowance(
            &ledger,
            &approvals,
            &owner,
            &operator,
            Some(&TokenId::U64(7))
        ));

        approve(&ledger, &mut approvals, &owner, &operator, None, false).unwrap();
        assert!(!allowance(&ledger, &approvals, &owner, &operator, None));
    }

    #[test]
    fn test_allowance_token_scope() {
        let (ledger, mut approvals, owner, id) = setup_test();
        let spender = account(2);

        approve(&ledger, &mut approvals, &owner, &spender, Some(&id), true).unwrap();

        assert!(allowance(&ledger, &approvals, &owner, &spender, Some(&id)));
        // A single-token grant is not a blanket grant
        assert!(!allowance(&ledger, &approvals, &owner, &spender, None));
        // And covers no other identifier
        assert!(!allowance(
            &ledger,
            &approvals,
            &owner,
            &spender,
            Some(&TokenId::U8(1))
        ));
    }

    #[test]
    fn test_allowance_goes_stale_with_ownership() {
        let (mut ledger, mut approvals, first, id) = setup_test();
        let second = account(2);
        let spender = account(3);

        transfer(&mut ledger, &mut approvals, &first, &id, &second).unwrap();
        approve(&ledger, &mut approvals, &second, &spender, Some(&id), true).unwrap();

        // The slot is the current owner's grant, not the old owner's
        assert!(allowance(&ledger, &approvals, &second, &spender, Some(&id)));
        assert!(!allowance(&ledger, &approvals, &first, &spender, Some(&id)));
    }
}
