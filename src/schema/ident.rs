//! Identifier rules shared by every name in a model file.
//!
//! Example valid names: `Cluster`, `readOnly`, `api_url`, `_private`.

use anyhow::bail;
use regex::Regex;

const IDENT_RE: &str = r"^[A-Za-z_][A-Za-z0-9_]*$";

/// Compiled identifier checker, built once per model load.
#[derive(Debug, Clone)]
pub struct Identifiers {
    re: Regex,
}

impl Identifiers {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            re: Regex::new(IDENT_RE)?,
        })
    }

    pub fn is_valid(&self, s: &str) -> bool {
        self.re.is_match(s)
    }

    /// Fail unless `name` is a valid identifier. `what` names the offending
    /// item in the error, e.g. `annotation on type Cluster`.
    pub fn check(&self, name: &str, what: &str) -> anyhow::Result<()> {
        if !self.is_valid(name) {
            bail!("invalid {} name {:?}", what, name);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifiers() {
        let ids = Identifiers::new().unwrap();
        assert!(ids.is_valid("Cluster"));
        assert!(ids.is_valid("readOnly"));
        assert!(ids.is_valid("_x1"));
        assert!(!ids.is_valid(""));
        assert!(!ids.is_valid("1abc"));
        assert!(!ids.is_valid("read-only"));
        assert!(!ids.is_valid("a b"));
    }

    #[test]
    fn test_check_message() {
        let ids = Identifiers::new().unwrap();
        let err = ids.check("", "annotation").unwrap_err();
        assert_eq!(err.to_string(), "invalid annotation name \"\"");
    }
}
