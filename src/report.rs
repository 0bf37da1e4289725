//! Flattening of error `source()` chains into readable text.

use std::error::Error;

/// Collects the message of `error` followed by the messages of its sources, outermost first.
pub fn error_messages(error: &(dyn Error + 'static)) -> Vec<String> {
    std::iter::successors(Some(error), |&error| error.source())
        .map(ToString::to_string)
        .collect()
}

/// Joins the messages of an error chain, not repeating `delimiter` after a message that already
/// ends with it.
pub fn error_message_chain(error: &(dyn Error + 'static), delimiter: &str) -> String {
    let mut result = String::new();

    for message in error_messages(error) {
        if !result.is_empty() && !result.ends_with(delimiter) {
            result.push_str(delimiter);
        }
        result.push_str(&message);
    }

    result
}

#[cfg(test)]
mod test {
    use std::fmt;

    use super::*;
    use crate::SegmentError;

    #[derive(Debug)]
    struct Wrapped {
        message: &'static str,
        source: SegmentError,
    }

    impl fmt::Display for Wrapped {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.message)
        }
    }

    impl Error for Wrapped {
        fn source(&self) -> Option<&(dyn Error + 'static)> {
            Some(&self.source)
        }
    }

    fn wrapped(message: &'static str) -> Wrapped {
        Wrapped {
            message,
            source: SegmentError::InvalidOption {
                option: "split options",
                value: "7".to_string(),
            },
        }
    }

    #[derive(Debug)]
    struct Layer {
        message: &'static str,
        source: Option<Box<dyn Error + 'static>>,
    }

    impl fmt::Display for Layer {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.message)
        }
    }

    impl Error for Layer {
        fn source(&self) -> Option<&(dyn Error + 'static)> {
            self.source.as_deref()
        }
    }

    #[test]
    fn test_single_error() {
        let error = SegmentError::precondition("count", "5 exceeds the 4 items from index 0");
        assert_eq!(
            error_messages(&error),
            ["invalid argument `count`: 5 exceeds the 4 items from index 0"]
        );
        assert_eq!(
            error_message_chain(&error, "\n"),
            "invalid argument `count`: 5 exceeds the 4 items from index 0"
        );
    }

    #[test]
    fn test_three_level_chain() {
        let error = Layer {
            message: "loading profile",
            source: Some(Box::new(Layer {
                message: "parsing arguments",
                source: Some(Box::new(wrapped("reading options"))),
            })),
        };

        assert_eq!(
            error_messages(&error),
            [
                "loading profile",
                "parsing arguments",
                "reading options",
                "unsupported value `7` for option `split options`"
            ]
        );
        assert_eq!(
            error_message_chain(&error, " | "),
            "loading profile | parsing arguments | reading options | \
             unsupported value `7` for option `split options`"
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            error_messages(&wrapped("reading arguments")),
            [
                "reading arguments",
                "unsupported value `7` for option `split options`"
            ]
        );
    }

    #[test]
    fn test_error_message_chain() {
        assert_eq!(
            error_message_chain(&wrapped("reading arguments"), "\n"),
            "reading arguments\nunsupported value `7` for option `split options`"
        );
        assert_eq!(
            error_message_chain(&wrapped("reading arguments: "), ": "),
            "reading arguments: unsupported value `7` for option `split options`"
        );
    }
}
