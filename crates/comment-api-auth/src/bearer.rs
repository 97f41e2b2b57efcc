//! `Authorization` header parsing.

use crate::error::{AuthError, Result};

/// Extract the token from an `Authorization` header value.
///
/// The value must consist of exactly two space-separated parts, the first
/// being `bearer` in any letter case.
///
/// # Errors
///
/// Returns `AuthError::MissingHeader` if there is no header, or
/// `AuthError::MalformedHeader` if it does not have the expected shape.
pub fn parse_bearer(header: Option<&str>) -> Result<&str> {
    let value = header.ok_or(AuthError::MissingHeader)?;

    let mut parts = value.split(' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(scheme), Some(token), None) if scheme.eq_ignore_ascii_case("bearer") => Ok(token),
        _ => Err(AuthError::MalformedHeader),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_any_scheme_case() {
        assert_eq!(parse_bearer(Some("Bearer abc")).unwrap(), "abc");
        assert_eq!(parse_bearer(Some("bearer abc")).unwrap(), "abc");
        assert_eq!(parse_bearer(Some("BEARER abc")).unwrap(), "abc");
    }

    #[test]
    fn rejects_missing_header() {
        assert!(matches!(parse_bearer(None), Err(AuthError::MissingHeader)));
    }

    #[test]
    fn rejects_wrong_scheme() {
        assert!(matches!(
            parse_bearer(Some("Basic dXNlcjpwYXNz")),
            Err(AuthError::MalformedHeader)
        ));
    }

    #[test]
    fn rejects_wrong_part_count() {
        for value in ["", "Bearer", "abc", "Bearer a b", "Bearer  abc"] {
            assert!(
                matches!(parse_bearer(Some(value)), Err(AuthError::MalformedHeader)),
                "accepted {value:?}"
            );
        }
    }
}
