//! JSON codec for resource payloads
//!
//! Thin wrappers over serde_json so that every parse failure surfaces as
//! `ClientError::Decode` with the parser's diagnostic.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::ClientResult;

/// Decode a response body into `T`.
pub fn decode<T: DeserializeOwned>(body: &str) -> ClientResult<T> {
    serde_json::from_str(body).map_err(|e| {
        tracing::warn!(error = %e, "Failed to decode response body");
        e.into()
    })
}

/// Encode a request payload.
pub fn encode<T: Serialize + ?Sized>(value: &T) -> ClientResult<String> {
    Ok(serde_json::to_string(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClientError;
    use octopus_shared::{InterruptionSubmitRequest, User};

    #[test]
    fn test_decode_user_ignores_unknown_fields() {
        let user: User = decode(
            r#"{
                "Id": "Users-1",
                "Username": "user@example.com",
                "DisplayName": "User Name",
                "EmailAddress": "user@example.com",
                "IsActive": true,
                "IsService": false,
                "CanPasswordBeEdited": true,
                "IsRequestor": true,
                "Identities": [],
                "Links": { "Self": "/api/users/Users-1" }
            }"#,
        )
        .unwrap();

        assert_eq!(user.display_name, "User Name");
        assert!(user.is_requestor);
    }

    #[test]
    fn test_decode_error_carries_diagnostic() {
        let err = decode::<User>(r#"{"Id": 7}"#).unwrap_err();
        match err {
            ClientError::Decode(e) => assert!(e.to_string().contains("invalid type")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_encode_submit_request() {
        let body = encode(&InterruptionSubmitRequest::abort("Stop").with_notes("bad build")).unwrap();
        assert_eq!(
            body,
            r#"{"Instructions":"Stop","Notes":"bad build","Result":"Abort"}"#
        );
    }
}
