//! One-time flash messages carried in a signed cookie
//!
//! Cookie value: `base64url(json messages) "." base64url(hmac-sha256)`.
//! Anything that fails to verify or decode is treated as no messages.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Cookie holding pending flash messages
pub const FLASH_COOKIE: &str = "microblog_flash";

/// Signs and verifies flash cookie values
#[derive(Clone)]
pub struct FlashSigner {
    key: Vec<u8>,
}

impl std::fmt::Debug for FlashSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlashSigner").finish_non_exhaustive()
    }
}

impl FlashSigner {
    pub fn new(secret_key: &str) -> Self {
        Self {
            key: secret_key.as_bytes().to_vec(),
        }
    }

    fn mac(&self) -> HmacSha256 {
        HmacSha256::new_from_slice(&self.key).expect("HMAC key of any size is valid")
    }

    /// Encode messages into a signed cookie value.
    pub fn encode(&self, messages: &[String]) -> String {
        let payload = URL_SAFE_NO_PAD.encode(
            serde_json::to_vec(messages).unwrap_or_else(|_| b"[]".to_vec()),
        );

        let mut mac = self.mac();
        mac.update(payload.as_bytes());
        let signature = URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());

        format!("{}.{}", payload, signature)
    }

    /// Decode a cookie value. Returns `None` for bad signatures or payloads.
    pub fn decode(&self, value: &str) -> Option<Vec<String>> {
        let (payload, signature) = value.split_once('.')?;
        let signature = URL_SAFE_NO_PAD.decode(signature).ok()?;

        let mut mac = self.mac();
        mac.update(payload.as_bytes());
        mac.verify_slice(&signature).ok()?;

        let json = URL_SAFE_NO_PAD.decode(payload).ok()?;
        serde_json::from_slice(&json).ok()
    }

    /// `Set-Cookie` value storing `messages`.
    pub fn set_cookie(&self, messages: &[String]) -> String {
        format!(
            "{}={}; Path=/; HttpOnly; SameSite=Lax",
            FLASH_COOKIE,
            self.encode(messages)
        )
    }
}

/// `Set-Cookie` value removing the flash cookie.
pub fn clear_cookie() -> String {
    format!("{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0", FLASH_COOKIE)
}
