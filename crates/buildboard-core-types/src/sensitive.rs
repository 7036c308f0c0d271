//! Sensitive data marker for automatic redaction
//!
//! The bot token is wrapped in `Sensitive<T>` from the moment it is read out
//! of the environment so that a stray `{:?}` on the config never leaks it.

use std::fmt;

/// Wrapper for sensitive data that redacts itself in Debug and Display
///
/// # Example
///
/// ```
/// use buildboard_core_types::Sensitive;
///
/// let token = Sensitive::new("bot-token");
/// assert_eq!(format!("{:?}", token), "***REDACTED***");
/// assert_eq!(format!("{}", token), "***REDACTED***");
///
/// assert_eq!(token.expose(), &"bot-token");
/// ```
pub struct Sensitive<T>(T);

impl<T> Sensitive<T> {
    /// Wrap a sensitive value
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Expose the underlying sensitive value
    ///
    /// Only the gateway login should need this.
    pub fn expose(&self) -> &T {
        &self.0
    }

    /// Consume the wrapper and return the inner value
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> fmt::Debug for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "***REDACTED***")
    }
}

impl<T> fmt::Display for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "***REDACTED***")
    }
}

impl<T: Clone> Clone for Sensitive<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_redacted_in_debug_and_display() {
        let token = Sensitive::new(String::from("MTIzNDU2Nzg5.abc.def"));
        assert_eq!(format!("{:?}", token), "***REDACTED***");
        assert_eq!(format!("{}", token), "***REDACTED***");
    }

    #[test]
    fn test_into_inner() {
        let token = Sensitive::new(String::from("t"));
        assert_eq!(token.into_inner(), "t");
    }

    #[test]
    fn test_redacted_inside_struct() {
        #[derive(Debug)]
        #[allow(dead_code)]
        struct Settings {
            db_path: String,
            token: Sensitive<String>,
        }

        let settings = Settings {
            db_path: "builds.db".to_string(),
            token: Sensitive::new("secret-token".to_string()),
        };

        let debug_str = format!("{:?}", settings);
        assert!(debug_str.contains("builds.db"));
        assert!(debug_str.contains("***REDACTED***"));
        assert!(!debug_str.contains("secret-token"));
    }
}
