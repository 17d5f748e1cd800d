// Mint Operations
// This module contains the mint operation logic.

use log::debug;

use crate::error::{LedgerError, LedgerResult};
use crate::ledger::Ledger;
use crate::types::{Account, TokenId};

// ========================================
// Mint Operation
// ========================================

/// Mint a token with an explicit identifier
///
/// Identifiers of all six variants are accepted without normalization;
/// `U8(123)` and `U16(123)` produce two independent tokens. There is no
/// supply cap and no sequential-id constraint on this path.
///
/// # Parameters
/// - `ledger`: Ownership state
/// - `id`: Token identifier chosen by the caller
/// - `to`: Recipient account
///
/// # Returns
/// - `Ok(())`: Success
/// - `Err(LedgerError)`: `AlreadyExists` if the identifier is taken
pub fn mint(ledger: &mut Ledger, id: TokenId, to: &Account) -> LedgerResult<()> {
    debug!("mint {} to {}", id, to);
    ledger.record_mint(id, to.clone())
}

// ========================================
// Sequential Mint Operation
// ========================================

/// Mint the next token in the collection's `U8` sequence
///
/// Mints `U8(*next_id)` to the recipient, then advances the cursor. The
/// cursor advance is computed with checked arithmetic before any state
/// changes, so a call past the end of the `U8` space fails with
/// `Overflow` and mints nothing. A collision with an explicitly minted
/// identifier fails with `AlreadyExists` and leaves the cursor in place.
///
/// # Parameters
/// - `ledger`: Ownership state
/// - `next_id`: Sequential cursor, advanced on success only
/// - `to`: Recipient account
///
/// # Returns
/// - `Ok(TokenId)`: The minted identifier
/// - `Err(LedgerError)`: Error code
pub fn mint_next(ledger: &mut Ledger, next_id: &mut u8, to: &Account) -> LedgerResult<TokenId> {
    // Step 1: Reserve the cursor advance up front (atomicity)
    let advanced = next_id.checked_add(1).ok_or(LedgerError::Overflow)?;

    // Step 2: Record ownership
    let id = TokenId::U8(*next_id);
    debug!("mint next {} to {}", id, to);
    ledger.record_mint(id.clone(), to.clone())?;

    // Step 3: Commit the cursor
    *next_id = advanced;
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(byte: u8) -> Account {
        Account::new([byte; 32])
    }

    #[test]
    fn test_mint() {
        let mut ledger = Ledger::new(&account(9));
        let owner = account(1);

        mint(&mut ledger, TokenId::U32(7), &owner).unwrap();

        assert_eq!(ledger.owner_of(&TokenId::U32(7)), Some(&owner));
        assert_eq!(ledger.balance_of(&owner), 1);
    }

    #[test]
    fn test_mint_duplicate_fails() {
        let mut ledger = Ledger::new(&account(9));
        let first = account(1);
        let second = account(2);
        let id = TokenId::Bytes(vec![1, 2, 3]);

        mint(&mut ledger, id.clone(), &first).unwrap();
        let result = mint(&mut ledger, id.clone(), &second);

        assert_eq!(result, Err(LedgerError::AlreadyExists));
        assert_eq!(ledger.owner_of(&id), Some(&first));
    }

    #[test]
    fn test_mint_all_variants_of_same_value() {
        let mut ledger = Ledger::new(&account(9));
        let owner = account(1);

        mint(&mut ledger, TokenId::U8(123), &owner).unwrap();
        mint(&mut ledger, TokenId::U16(123), &owner).unwrap();
        mint(&mut ledger, TokenId::U32(123), &owner).unwrap();
        mint(&mut ledger, TokenId::U64(123), &owner).unwrap();
        mint(&mut ledger, TokenId::U128(123), &owner).unwrap();
        mint(&mut ledger, TokenId::Bytes(vec![1, 2, 3]), &owner).unwrap();

        assert_eq!(ledger.total_supply(), 6);
        assert_eq!(ledger.balance_of(&owner), 6);
    }

    #[test]
    fn test_mint_next_sequence() {
        let mut ledger = Ledger::new(&account(9));
        let mut cursor = 0u8;
        let owner = account(1);

        assert_eq!(
            mint_next(&mut ledger, &mut cursor, &owner),
            Ok(TokenId::U8(0))
        );
        assert_eq!(
            mint_next(&mut ledger, &mut cursor, &owner),
            Ok(TokenId::U8(1))
        );
        assert_eq!(
            mint_next(&mut ledger, &mut cursor, &owner),
            Ok(TokenId::U8(2))
        );

        assert_eq!(cursor, 3);
        assert_eq!(ledger.total_supply(), 3);
        assert_eq!(ledger.balance_of(&owner), 3);
    }

    #[test]
    fn test_mint_next_collision_keeps_cursor() {
        let mut ledger = Ledger::new(&account(9));
        let mut cursor = 0u8;
        let owner = account(1);

        mint_next(&mut ledger, &mut cursor, &owner).unwrap();

        // Someone explicitly takes the identifier the cursor points at
        mint(&mut ledger, TokenId::U8(1), &account(2)).unwrap();

        // No skip logic: the sequential path keeps failing on the taken id
        assert_eq!(
            mint_next(&mut ledger, &mut cursor, &owner),
            Err(LedgerError::AlreadyExists)
        );
        assert_eq!(
            mint_next(&mut ledger, &mut cursor, &owner),
            Err(LedgerError::AlreadyExists)
        );
        assert_eq!(cursor, 1);
        assert_eq!(ledger.total_supply(), 2);
    }

    #[test]
    fn test_mint_next_cursor_exhaustion() {
        let mut ledger = Ledger::new(&account(9));
        let owner = account(1);
        let mut cursor = u8::MAX;

        // The last cursor position cannot be reserved, so nothing is minted
        let result = mint_next(&mut ledger, &mut cursor, &owner);
        assert_eq!(result, Err(LedgerError::Overflow));
        assert_eq!(cursor, u8::MAX);
        assert_eq!(ledger.total_supply(), 0);
        assert!(!ledger.exists(&TokenId::U8(u8::MAX)));
    }
}
