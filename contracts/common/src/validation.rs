//! Input checks for on-chain text fields and attachment content ids.

use soroban_sdk::String;

use crate::CommonError;

/// Upper bound for short name fields (display names, prescription titles).
pub const MAX_NAME_LEN: u32 = 64;
/// Upper bound for free-text fields (symptoms, diagnoses, record payloads).
pub const MAX_TEXT_LEN: u32 = 512;
/// Upper bound for attachment content ids (IPFS-style hashes).
pub const MAX_CONTENT_ID_LEN: u32 = 64;

/// Validates a required UTF-8 text field: non-empty and at most `max_len`
/// bytes. No charset restriction — clinical text is arbitrary UTF-8.
pub fn validate_text(value: &String, max_len: u32) -> Result<(), CommonError> {
    let len = value.len();
    if len == 0 || len > max_len {
        return Err(CommonError::InvalidInput);
    }
    Ok(())
}

/// Validates an attachment content id.
///
/// An empty string denotes "no attachment" and is always accepted. A
/// non-empty id must be at most [`MAX_CONTENT_ID_LEN`] bytes of ASCII
/// alphanumerics — the shape of the opaque identifiers handed out by
/// content-addressed stores. The id is never interpreted beyond this.
pub fn validate_content_id(value: &String) -> Result<(), CommonError> {
    let len = value.len();
    if len == 0 {
        return Ok(());
    }
    if len > MAX_CONTENT_ID_LEN {
        return Err(CommonError::InvalidInput);
    }

    let mut buf = [0u8; MAX_CONTENT_ID_LEN as usize];
    value.copy_into_slice(&mut buf[..len as usize]);

    for &b in &buf[..len as usize] {
        if !b.is_ascii_alphanumeric() {
            return Err(CommonError::InvalidInput);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::Env;

    #[test]
    fn text_rejects_empty_and_oversize() {
        let env = Env::default();
        assert_eq!(
            validate_text(&String::from_str(&env, ""), MAX_TEXT_LEN),
            Err(CommonError::InvalidInput)
        );
        assert_eq!(
            validate_text(&String::from_str(&env, "fever and cough"), MAX_TEXT_LEN),
            Ok(())
        );
        assert_eq!(
            validate_text(&String::from_str(&env, "abc"), 2),
            Err(CommonError::InvalidInput)
        );
    }

    #[test]
    fn text_accepts_multibyte_utf8() {
        let env = Env::default();
        // Byte length, not char count, is what is bounded.
        assert_eq!(
            validate_text(&String::from_str(&env, "sốt cao, đau đầu"), MAX_TEXT_LEN),
            Ok(())
        );
    }

    #[test]
    fn content_id_allows_empty_and_cid_shapes() {
        let env = Env::default();
        assert_eq!(validate_content_id(&String::from_str(&env, "")), Ok(()));
        assert_eq!(
            validate_content_id(&String::from_str(
                &env,
                "QmYwAPJzv5CZsnA625s3Xf2nemtYgPpHdWEz79ojWnPbdG"
            )),
            Ok(())
        );
    }

    #[test]
    fn content_id_rejects_non_alphanumeric() {
        let env = Env::default();
        assert_eq!(
            validate_content_id(&String::from_str(&env, "../../etc/passwd")),
            Err(CommonError::InvalidInput)
        );
        assert_eq!(
            validate_content_id(&String::from_str(&env, "Qm hash with spaces")),
            Err(CommonError::InvalidInput)
        );
    }
}
