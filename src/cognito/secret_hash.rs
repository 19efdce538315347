use super::CognitoError;
use base64ct::{Base64, Encoding};
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// `SECRET_HASH` for app clients that have a secret:
/// `base64(HMAC-SHA256(client_secret, username || client_id))`.
///
/// # Errors
/// Returns an error if the HMAC key cannot be initialized.
pub fn secret_hash(
    username: &str,
    client_id: &str,
    client_secret: &str,
) -> Result<String, CognitoError> {
    let mut mac = HmacSha256::new_from_slice(client_secret.as_bytes())
        .map_err(|_| CognitoError::SecretHash)?;
    mac.update(username.as_bytes());
    mac.update(client_id.as_bytes());

    Ok(Base64::encode_string(&mac.finalize().into_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_secret_hash_known_vectors() {
        assert_eq!(
            secret_hash("alice", "client-id", "client-secret").unwrap(),
            "qROqM+PMKX09MK8ulDVm8LCWdCRqQQEUG9HcF+N7/S4="
        );
        assert_eq!(
            secret_hash("bob@example.com", "7abc123", "shh").unwrap(),
            "vTeIiSIUO+joqA8rHfolqBt5gjebeDNKemSADvb0jFk="
        );
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_secret_hash_depends_on_every_input() {
        let base = secret_hash("alice", "client-id", "client-secret").unwrap();
        assert_ne!(base, secret_hash("alicf", "client-id", "client-secret").unwrap());
        assert_ne!(base, secret_hash("alice", "client-ie", "client-secret").unwrap());
        assert_ne!(base, secret_hash("alice", "client-id", "client-secres").unwrap());
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_secret_hash_empty_secret() {
        let hash = secret_hash("alice", "client-id", "").unwrap();
        // 32-byte digest in padded base64
        assert_eq!(hash.len(), 44);
        assert!(hash.ends_with('='));
    }
}
