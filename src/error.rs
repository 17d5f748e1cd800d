// PSP34 Ledger Core - Error Codes
// This module defines all error codes for ledger operations.
//
// Error Code Ranges:
// - 0: Success
// - 100-199: Token errors
// - 200-299: Permission errors
// - 500-599: Operation errors
// - 900-999: System errors

use thiserror::Error;

/// Ledger operation result type
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Ledger error type with numeric code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[repr(u64)]
pub enum LedgerError {
    // ========================================
    // Token errors (100-199)
    // ========================================
    #[error("Token not found")]
    TokenNotFound = 100,

    #[error("Token already exists")]
    AlreadyExists = 101,

    // ========================================
    // Permission errors (200-299)
    // ========================================
    #[error("Not the owner")]
    NotOwner = 200,

    #[error("Not authorized")]
    NotAuthorized = 201,

    // ========================================
    // Operation errors (500-599)
    // ========================================
    #[error("Self approval not allowed")]
    SelfApprove = 500,

    // ========================================
    // System errors (900-999)
    // ========================================
    #[error("Arithmetic overflow")]
    Overflow = 900,
}

impl LedgerError {
    /// Get the numeric error code
    #[inline]
    pub fn code(&self) -> u64 {
        *self as u64
    }

    /// Create error from numeric code
    pub fn from_code(code: u64) -> Option<Self> {
        match code {
            100 => Some(Self::TokenNotFound),
            101 => Some(Self::AlreadyExists),
            200 => Some(Self::NotOwner),
            201 => Some(Self::NotAuthorized),
            500 => Some(Self::SelfApprove),
            900 => Some(Self::Overflow),
            _ => None,
        }
    }
}
