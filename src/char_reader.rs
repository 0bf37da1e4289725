use std::str::Chars;

/// Forward character cursor that keeps track of its byte offset into the source text.
#[derive(Clone, Debug)]
pub(crate) struct CharReader<'a> {
    chars: Chars<'a>,
    original_length: usize,
}

impl<'a> CharReader<'a> {
    pub fn new(chars: &'a str) -> Self {
        let chars = chars.chars();
        let original_length = chars.as_str().len();

        Self {
            chars,
            original_length,
        }
    }

    pub fn current_pos(&self) -> usize {
        self.original_length - self.chars.as_str().len()
    }

    pub fn next(&mut self) -> Option<char> {
        self.chars.next()
    }

    pub fn is_at_end(&self) -> bool {
        self.chars.as_str().is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_positions_are_byte_offsets() {
        let mut reader = CharReader::new("aé b");
        assert_eq!(reader.current_pos(), 0);
        assert_eq!(reader.next(), Some('a'));
        assert_eq!(reader.next(), Some('é'));
        assert_eq!(reader.current_pos(), 3);
        reader.next();
        reader.next();
        assert!(reader.is_at_end());
        assert_eq!(reader.next(), None);
        assert_eq!(reader.current_pos(), 5);
    }
}
