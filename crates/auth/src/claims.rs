use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use aerohse_core::EmployeeId;

use crate::{AccountStatus, Principal, PrincipalId, Role};

/// Session claims model (transport-agnostic).
///
/// The minimal claim set expected once the login service's token has been
/// decoded and its signature verified by the transport layer. Signature
/// verification and token issuance stay outside this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject / principal identifier.
    pub sub: PrincipalId,

    /// Role granted to the account.
    pub role: Role,

    /// Account status at issuance time.
    pub status: AccountStatus,

    /// Employee record linked to the account, when one exists.
    pub linked_employee_id: Option<EmployeeId>,

    /// Issued-at timestamp.
    pub issued_at: DateTime<Utc>,

    /// Expiration timestamp.
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenValidationError {
    #[error("token has expired")]
    Expired,

    #[error("token not yet valid (issued_at is in the future)")]
    NotYetValid,

    #[error("invalid token time window (expires_at <= issued_at)")]
    InvalidTimeWindow,
}

/// Deterministically validate session claims against a caller-supplied
/// clock reading.
pub fn validate_claims(
    claims: &SessionClaims,
    now: DateTime<Utc>,
) -> Result<(), TokenValidationError> {
    if claims.expires_at <= claims.issued_at {
        return Err(TokenValidationError::InvalidTimeWindow);
    }
    if now < claims.issued_at {
        return Err(TokenValidationError::NotYetValid);
    }
    if now >= claims.expires_at {
        return Err(TokenValidationError::Expired);
    }
    Ok(())
}

impl SessionClaims {
    /// Principal snapshot carried by these claims.
    ///
    /// Validation is separate on purpose: callers decide whether to check
    /// the time window first ([`validate_claims`]) or to build a principal
    /// from already-trusted claims.
    pub fn to_principal(&self) -> Principal {
        Principal {
            id: self.sub,
            role: self.role,
            status: self.status,
            linked_employee_id: self.linked_employee_id,
        }
    }
}
