use std::error::Error;

/// Flatten an error chain into the single human-readable line shown to
/// the user when a query fails. The outermost message wins; deeper causes
/// are appended only when they add information.
pub fn format_error(err: &(dyn Error + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_msg = cause.to_string();
        if !cause_msg.is_empty() && !message.contains(&cause_msg) {
            message = format!("{message}: {cause_msg}");
        }
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug)]
    struct Leaf;

    impl fmt::Display for Leaf {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "connection refused")
        }
    }

    impl Error for Leaf {}

    #[derive(Debug)]
    struct Outer(Leaf);

    impl fmt::Display for Outer {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "query failed")
        }
    }

    impl Error for Outer {
        fn source(&self) -> Option<&(dyn Error + 'static)> {
            Some(&self.0)
        }
    }

    #[test]
    fn chain_is_flattened() {
        assert_eq!(format_error(&Outer(Leaf)), "query failed: connection refused");
    }

    #[test]
    fn duplicate_cause_is_not_repeated() {
        assert_eq!(format_error(&Leaf), "connection refused");
    }
}
