// PSP34 Ledger Core - Collection Facade
// One Collection per deployed instance: it owns the ledger/approval pair
// and the sequential mint cursor, and exposes the external surface.

use crate::approvals::ApprovalRegistry;
use crate::error::LedgerResult;
use crate::ledger::Ledger;
use crate::operations;
use crate::types::{Account, TokenId};

/// A single NFT collection
///
/// Owns one `Ledger` and one `ApprovalRegistry`; instances are fully
/// independent of each other. Mutating methods take `&mut self`, so each
/// state change runs to completion before the next begins and either
/// fully applies or leaves the state untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Collection {
    ledger: Ledger,
    approvals: ApprovalRegistry,
    /// Cursor for sequential `U8` minting, advanced on success only
    next_id: u8,
}

impl Collection {
    /// Create an empty collection anchored at `account`
    pub fn new(account: &Account) -> Self {
        Self {
            ledger: Ledger::new(account),
            approvals: ApprovalRegistry::new(),
            next_id: 0,
        }
    }

    // ========================================
    // Query Surface
    // ========================================

    /// Get the fixed collection identifier
    pub fn collection_id(&self) -> &TokenId {
        self.ledger.collection_id()
    }

    /// Get the number of tokens owned by an account
    pub fn balance_of(&self, account: &Account) -> u64 {
        self.ledger.balance_of(account)
    }

    /// Get the owner of a token, or `None` if it was never minted
    pub fn owner_of(&self, id: &TokenId) -> Option<&Account> {
        self.ledger.owner_of(id)
    }

    /// Get the number of currently minted tokens
    pub fn total_supply(&self) -> u64 {
        self.ledger.total_supply()
    }

    /// Check if an operator holds a delegation from an owner
    pub fn allowance(&self, owner: &Account, operator: &Account, id: Option<&TokenId>) -> bool {
        operations::allowance(&self.ledger, &self.approvals, owner, operator, id)
    }

    // ========================================
    // Mutating Surface
    // ========================================

    /// Mint a token with an explicit identifier
    ///
    /// Unauthenticated by design: admission control for minting belongs
    /// to the surrounding runtime, not the ledger core.
    pub fn mint(&mut self, id: TokenId, to: &Account) -> LedgerResult<()> {
        operations::mint(&mut self.ledger, id, to)
    }

    /// Mint the next token in the `U8` sequence to `to`
    pub fn mint_next(&mut self, to: &Account) -> LedgerResult<TokenId> {
        operations::mint_next(&mut self.ledger, &mut self.next_id, to)
    }

    /// Transfer a token on behalf of `caller`
    pub fn transfer(&mut self, caller: &Account, id: &TokenId, to: &Account) -> LedgerResult<()> {
        operations::transfer(&mut self.ledger, &mut self.approvals, caller, id, to)
    }

    /// Grant or revoke a delegation (token scope via `Some(id)`,
    /// operator scope via `None`)
    pub fn approve(
        &mut self,
        caller: &Account,
        operator: &Account,
        id: Option<&TokenId>,
        approved: bool,
    ) -> LedgerResult<()> {
        operations::approve(
            &self.ledger,
            &mut self.approvals,
            caller,
            operator,
            id,
            approved,
        )
    }

    /// Set or clear an operator approval from `caller` to `operator`
    pub fn approve_operator(
        &mut self,
        caller: &Account,
        operator: &Account,
        approved: bool,
    ) -> LedgerResult<()> {
        self.approve(caller, operator, None, approved)
    }
}
