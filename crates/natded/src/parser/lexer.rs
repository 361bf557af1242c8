//! Lexer for propositional formulas
//!
//! Scans an input string into positioned tokens, recognizing both the ASCII
//! digraphs and the UTF-8 operator symbols. The lexer never fails: an
//! unrecognized character is emitted as a one-character `Var` token and left
//! for the parser to reject with a position.

/// Token type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Var,
    Not,
    And,
    Or,
    Implies,
    Iff,
    Bottom,
    LParen,
    RParen,
    Eof,
}

/// A token with its source position.
///
/// `pos` is the zero-based byte offset of the token's first character; the
/// `Eof` token sits at the input length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub pos: usize,
}

// Multi-character lexemes, matched before the single-character fallbacks so
// that `<->` wins over `-` + `>` garbage and `_|_` over `|`.
const MULTI_CHAR_LEXEMES: &[(&str, TokenKind)] = &[
    ("<->", TokenKind::Iff),
    ("->", TokenKind::Implies),
    ("/\\", TokenKind::And),
    ("\\/", TokenKind::Or),
    ("_|_", TokenKind::Bottom),
];

/// Lexer state
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer { input, pos: 0 }
    }

    /// Tokenize the whole input; the final token is always `Eof`.
    pub fn tokenize(input: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(input);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token();
            let done = token.kind == TokenKind::Eof;
            tokens.push(token);
            if done {
                break;
            }
        }
        tokens
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.rest().chars().next() {
            if !c.is_whitespace() {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    /// Scan the next token.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();
        let start = self.pos;
        let rest = self.rest();
        let Some(c) = rest.chars().next() else {
            return Token {
                kind: TokenKind::Eof,
                text: String::new(),
                pos: start,
            };
        };

        for (lexeme, kind) in MULTI_CHAR_LEXEMES {
            if rest.starts_with(lexeme) {
                self.pos += lexeme.len();
                return Token {
                    kind: *kind,
                    text: (*lexeme).to_string(),
                    pos: start,
                };
            }
        }

        let kind = match c {
            '¬' | '~' => TokenKind::Not,
            '∧' | '&' => TokenKind::And,
            '∨' | '|' => TokenKind::Or,
            '→' => TokenKind::Implies,
            '↔' => TokenKind::Iff,
            '⊥' => TokenKind::Bottom,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            _ if c.is_ascii_alphabetic() => return self.identifier(start),
            _ => TokenKind::Var,
        };
        self.pos += c.len_utf8();
        Token {
            kind,
            text: c.to_string(),
            pos: start,
        }
    }

    // Maximal munch: `[A-Za-z][A-Za-z0-9]*`.
    fn identifier(&mut self, start: usize) -> Token {
        let rest = self.rest();
        let len = rest
            .char_indices()
            .find(|(_, c)| !c.is_ascii_alphanumeric())
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        self.pos += len;
        Token {
            kind: TokenKind::Var,
            text: rest[..len].to_string(),
            pos: start,
        }
    }
}
