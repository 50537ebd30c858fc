use crate::error::{Error, Result};

/// Check that `name` can be used as a credential set name.
///
/// Allowed: ASCII letters, digits, `-` and `_`. The name is never rewritten,
/// so callers keep the casing they supplied.
pub fn validate_name(name: &str) -> Result<()> {
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if valid {
        Ok(())
    } else {
        Err(Error::NameInvalid(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_identifier_names() {
        for name in ["kool-kreds", "kool_kreds", "HELLO", "azure2", "a"] {
            assert!(validate_name(name).is_ok(), "{name} should be valid");
        }
    }

    #[test]
    fn rejects_periods() {
        let err = validate_name("this.isabadname").unwrap_err();
        assert!(matches!(err, Error::NameInvalid(ref n) if n == "this.isabadname"));
    }

    #[test]
    fn rejects_empty_and_path_like_names() {
        for name in ["", "../escape", "with space", "slash/name", "tab\tname"] {
            assert!(validate_name(name).is_err(), "{name:?} should be invalid");
        }
    }

    #[test]
    fn error_message_quotes_the_name() {
        let err = validate_name("bad.name").unwrap_err();
        assert!(err.to_string().contains("\"bad.name\""));
    }
}
