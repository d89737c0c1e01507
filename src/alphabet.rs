//! Symbols recognized in postfix expressions.

use std::fmt;

/// Default literal letters.
pub const DEFAULT_LETTERS: &str = "abc";
/// Default empty-string literal.
pub const DEFAULT_EMPTY: char = '1';

pub const UNION: char = '+';
pub const CONCAT: char = '.';
pub const STAR: char = '*';

/// Classified input character.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Token {
    /// The tracked symbol.
    Tracked,
    /// The empty-string literal.
    Empty,
    /// Any other literal letter.
    Other(char),
    Union,
    Concat,
    Star,
    /// Whitespace, ignored by the evaluator.
    Skip,
}

impl Token {
    /// Number of operands an operator token consumes (0 for literals).
    pub fn arity(self) -> usize {
        match self {
            Token::Union | Token::Concat => 2,
            Token::Star => 1,
            _ => 0,
        }
    }

    pub fn is_operator(self) -> bool {
        self.arity() > 0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Tracked => write!(f, "tracked"),
            Token::Empty => write!(f, "empty"),
            Token::Other(c) => write!(f, "'{}'", c),
            Token::Union => write!(f, "'{}'", UNION),
            Token::Concat => write!(f, "'{}'", CONCAT),
            Token::Star => write!(f, "'{}'", STAR),
            Token::Skip => write!(f, "whitespace"),
        }
    }
}

/// Recognized alphabet: the tracked symbol, the empty-string literal and the
/// other literal letters.
///
/// Operators and whitespace are fixed. The tracked symbol is a literal even
/// if it is not one of the configured letters, unless it collides with an
/// operator or whitespace. The empty literal wins over the tracked symbol when
/// both are the same character.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Alphabet {
    tracked: char,
    empty: char,
    letters: Vec<char>,
}

impl Alphabet {
    /// Creates the default alphabet (`a`, `b`, `c` and `1` for the empty string)
    /// tracking the given symbol.
    pub fn new(tracked: char) -> Self {
        Self {
            tracked,
            empty: DEFAULT_EMPTY,
            letters: DEFAULT_LETTERS.chars().collect(),
        }
    }

    /// Replaces the set of literal letters.
    pub fn with_letters(mut self, letters: &str) -> Self {
        self.letters = letters.chars().collect();
        self
    }

    /// Replaces the empty-string literal.
    pub fn with_empty(mut self, empty: char) -> Self {
        self.empty = empty;
        self
    }

    pub fn tracked(&self) -> char {
        self.tracked
    }

    pub fn empty(&self) -> char {
        self.empty
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Classifies a character, or returns `None` if it is not recognized.
    pub fn classify(&self, c: char) -> Option<Token> {
        let token = match c {
            UNION => Token::Union,
            CONCAT => Token::Concat,
            STAR => Token::Star,
            _ if c.is_whitespace() => Token::Skip,
            _ if c == self.empty => Token::Empty,
            _ if c == self.tracked => Token::Tracked,
            _ if self.letters.contains(&c) => Token::Other(c),
            _ => return None,
        };
        Some(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_default() {
        let alphabet = Alphabet::new('a');
        assert_eq!(alphabet.classify('a'), Some(Token::Tracked));
        assert_eq!(alphabet.classify('b'), Some(Token::Other('b')));
        assert_eq!(alphabet.classify('c'), Some(Token::Other('c')));
        assert_eq!(alphabet.classify('1'), Some(Token::Empty));
        assert_eq!(alphabet.classify('+'), Some(Token::Union));
        assert_eq!(alphabet.classify('.'), Some(Token::Concat));
        assert_eq!(alphabet.classify('*'), Some(Token::Star));
        assert_eq!(alphabet.classify(' '), Some(Token::Skip));
        assert_eq!(alphabet.classify('\t'), Some(Token::Skip));
        assert_eq!(alphabet.classify('$'), None);
        assert_eq!(alphabet.classify('d'), None);
    }

    #[test]
    fn test_tracked_outside_letters() {
        let alphabet = Alphabet::new('x');
        assert_eq!(alphabet.classify('x'), Some(Token::Tracked));
        assert_eq!(alphabet.classify('a'), Some(Token::Other('a')));
    }

    #[test]
    fn test_empty_wins_over_tracked() {
        let alphabet = Alphabet::new('1');
        assert_eq!(alphabet.classify('1'), Some(Token::Empty));
    }

    #[test]
    fn test_operator_wins_over_tracked() {
        let alphabet = Alphabet::new('*');
        assert_eq!(alphabet.classify('*'), Some(Token::Star));
    }

    #[test]
    fn test_custom_letters() {
        let alphabet = Alphabet::new('0').with_letters("01").with_empty('e');
        assert_eq!(alphabet.classify('0'), Some(Token::Tracked));
        assert_eq!(alphabet.classify('1'), Some(Token::Other('1')));
        assert_eq!(alphabet.classify('e'), Some(Token::Empty));
        assert_eq!(alphabet.classify('a'), None);
        assert_eq!(alphabet.letters(), &['0', '1']);
    }

    #[test]
    fn test_arity() {
        assert_eq!(Token::Union.arity(), 2);
        assert_eq!(Token::Concat.arity(), 2);
        assert_eq!(Token::Star.arity(), 1);
        assert_eq!(Token::Tracked.arity(), 0);
        assert!(!Token::Other('b').is_operator());
    }
}
