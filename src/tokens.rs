use crate::error::CommandError;

/// The tokens of one invocation and a cursor into them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenStream {
    tokens: Vec<String>,
    cursor: usize,
}

impl TokenStream {
    pub fn new(tokens: Vec<String>) -> Self {
        TokenStream { tokens, cursor: 0 }
    }

    /// Tokenizes one batch-file line the way a shell splits arguments on
    /// plain whitespace.
    pub fn from_line(line: &str) -> Self {
        Self::new(line.split_whitespace().map(String::from).collect())
    }

    /// Total number of tokens, consumed or not.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn is_at_end(&self) -> bool {
        self.cursor >= self.tokens.len()
    }

    pub fn first(&self) -> Option<&str> {
        self.tokens.first().map(String::as_str)
    }

    pub fn peek(&self) -> Option<&str> {
        self.tokens.get(self.cursor).map(String::as_str)
    }

    /// Returns the token under the cursor and moves past it.
    pub fn advance(&mut self) -> Option<String> {
        let token = self.tokens.get(self.cursor)?.clone();
        self.cursor += 1;
        Some(token)
    }

    /// Consumes the single argument `flag` requires.
    pub fn argument(&mut self, flag: &str) -> Result<String, CommandError> {
        self.advance().ok_or_else(|| CommandError::MissingArgument {
            flag: flag.to_owned(),
        })
    }

    /// Drains every token left after the cursor.
    pub fn remaining(&mut self) -> Vec<String> {
        let rest = self.tokens[self.cursor..].to_vec();
        self.cursor = self.tokens.len();
        rest
    }
}
