//! Admin key verification
//!
//! The configured key is never compared byte-by-byte: both sides are tagged
//! with HMAC-SHA256 and checked with `verify_slice` (constant time).

use hmac::{Hmac, Mac};
use sha2::Sha256;
use shared::error::AppError;

type HmacSha256 = Hmac<Sha256>;

const TAG_KEY: &[u8] = b"menu-server/admin-key/v1";

#[derive(Clone)]
pub struct AdminKey {
    expected_tag: Vec<u8>,
}

impl std::fmt::Debug for AdminKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AdminKey(..)")
    }
}

fn mac_for(value: &str) -> HmacSha256 {
    let mut mac = HmacSha256::new_from_slice(TAG_KEY).expect("HMAC accepts any key length");
    mac.update(value.as_bytes());
    mac
}

impl AdminKey {
    pub fn new(secret: &str) -> Self {
        Self {
            expected_tag: mac_for(secret).finalize().into_bytes().to_vec(),
        }
    }

    /// Constant-time check of a candidate key
    pub fn verify(&self, candidate: &str) -> bool {
        mac_for(candidate).verify_slice(&self.expected_tag).is_ok()
    }
}

/// Reject the request unless `provided` matches the configured admin key
pub fn require_admin(admin_key: &AdminKey, provided: Option<&str>) -> Result<(), AppError> {
    match provided {
        Some(candidate) if admin_key.verify(candidate) => Ok(()),
        Some(_) => {
            tracing::warn!("Rejected request with invalid admin key");
            Err(AppError::unauthorized())
        }
        None => Err(AppError::unauthorized()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::ErrorCode;

    #[test]
    fn test_verify_matching_key() {
        let key = AdminKey::new("s3cret");
        assert!(key.verify("s3cret"));
    }

    #[test]
    fn test_verify_rejects_other_keys() {
        let key = AdminKey::new("s3cret");
        assert!(!key.verify("s3cre"));
        assert!(!key.verify("s3cret\0"));
        assert!(!key.verify(""));
        assert!(!key.verify("S3CRET"));
    }

    #[test]
    fn test_require_admin() {
        let key = AdminKey::new("dev-admin-key");
        assert!(require_admin(&key, Some("dev-admin-key")).is_ok());

        let err = require_admin(&key, Some("wrong")).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidAdminKey);

        let err = require_admin(&key, None).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidAdminKey);
    }

    #[test]
    fn test_debug_hides_secret() {
        let key = AdminKey::new("s3cret");
        assert_eq!(format!("{key:?}"), "AdminKey(..)");
    }
}
