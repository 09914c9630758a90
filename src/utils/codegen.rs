use base64::Engine as _;
use rand::TryRngCore;
use rand::rngs::OsRng;

pub fn generate_token() -> String {
    let mut buf = [0u8; 24];
    OsRng.try_fill_bytes(&mut buf).expect("OsRng failed");
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buf)
}
