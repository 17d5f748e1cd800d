// PSP34 Ledger Core - Ownership State
// This module holds the authoritative owner and balance maps for one collection.

use std::collections::{BTreeMap, HashMap};

use crate::error::{LedgerError, LedgerResult};
use crate::types::{Account, TokenId};

/// Authoritative ownership state of a single collection
///
/// Invariant: for every account `a`, `balance_of(a)` equals the number of
/// identifiers currently mapped to `a` in the owner map. Both maps are
/// mutated together through `record_mint`/`record_transfer` only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ledger {
    /// Collection identifier (fixed at construction)
    collection_id: TokenId,

    /// Token owner map; a key is present iff the token is minted
    owners: BTreeMap<TokenId, Account>,

    /// Per-account token counts; missing entry means 0
    balances: HashMap<Account, u64>,
}

impl Ledger {
    /// Create an empty ledger for the collection anchored at `account`
    ///
    /// The collection identifier wraps the account's 32 bytes in a `Bytes`
    /// identifier and never changes afterwards.
    pub fn new(account: &Account) -> Self {
        Self {
            collection_id: TokenId::Bytes(account.as_bytes().to_vec()),
            owners: BTreeMap::new(),
            balances: HashMap::new(),
        }
    }

    /// Get the fixed collection identifier
    pub fn collection_id(&self) -> &TokenId {
        &self.collection_id
    }

    /// Get the number of tokens owned by an account (0 for unknown accounts)
    pub fn balance_of(&self, account: &Account) -> u64 {
        self.balances.get(account).copied().unwrap_or(0)
    }

    /// Get the owner of a token, or `None` if it was never minted
    pub fn owner_of(&self, id: &TokenId) -> Option<&Account> {
        self.owners.get(id)
    }

    /// Check if a token has been minted
    pub fn exists(&self, id: &TokenId) -> bool {
        self.owners.contains_key(id)
    }

    /// Get the number of currently minted tokens
    pub fn total_supply(&self) -> u64 {
        self.owners.len() as u64
    }

    /// Record a newly minted token
    ///
    /// The only entry point that creates ownership. Fails with
    /// `AlreadyExists` if the identifier is already a key in the owner map,
    /// leaving the first owner in place.
    pub fn record_mint(&mut self, id: TokenId, owner: Account) -> LedgerResult<()> {
        if self.owners.contains_key(&id) {
            return Err(LedgerError::AlreadyExists);
        }

        self.increment_balance(&owner)?;
        self.owners.insert(id, owner);
        Ok(())
    }

    /// Record an ownership change
    ///
    /// Precondition: `from` is the current owner. The transfer protocol
    /// validates this before calling; the check here is a consistency
    /// guard (`NotOwner`) rather than a user-facing path. A self-transfer
    /// (`from == to`) is valid and leaves balances net unchanged.
    pub fn record_transfer(
        &mut self,
        id: &TokenId,
        from: &Account,
        to: Account,
    ) -> LedgerResult<()> {
        let owner = self.owners.get(id).ok_or(LedgerError::TokenNotFound)?;
        if owner != from {
            return Err(LedgerError::NotOwner);
        }

        self.owners.insert(id.clone(), to.clone());
        self.decrement_balance(from)?;
        self.increment_balance(&to)?;
        Ok(())
    }

    fn increment_balance(&mut self, owner: &Account) -> LedgerResult<u64> {
        let balance = self.balances.entry(owner.clone()).or_insert(0);
        *balance = balance.checked_add(1).ok_or(LedgerError::Overflow)?;
        Ok(*balance)
    }

    fn decrement_balance(&mut self, owner: &Account) -> LedgerResult<u64> {
        let balance = self.balances.entry(owner.clone()).or_insert(0);
        *balance = balance.checked_sub(1).ok_or(LedgerError::Overflow)?;
        Ok(*balance)
    }
}
