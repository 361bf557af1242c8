//! Recursive-descent parser for propositional formulas
//!
//! LL(1) over the token stream: every alternative is decided by the current
//! token kind, with no backtracking.

use super::lexer::{Lexer, Token, TokenKind};
use crate::logic::Formula;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Parse failure, positioned at the byte offset of the offending token.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message} at position {position}")]
pub struct ParseError {
    pub position: usize,
    pub message: String,
}

impl ParseError {
    fn new(position: usize, message: impl Into<String>) -> Self {
        ParseError {
            position,
            message: message.into(),
        }
    }
}

/// Parse a formula written in ASCII and/or UTF-8 notation.
pub fn parse(input: &str) -> Result<Formula, ParseError> {
    let mut parser = Parser {
        tokens: Lexer::tokenize(input),
        index: 0,
    };
    if parser.peek().kind == TokenKind::Eof {
        return Err(ParseError::new(parser.peek().pos, "Unexpected end of input"));
    }
    let formula = parser.parse_iff()?;
    let trailing = parser.peek();
    if trailing.kind != TokenKind::Eof {
        return Err(ParseError::new(
            trailing.pos,
            format!("Unexpected token {}", describe(trailing)),
        ));
    }
    Ok(formula)
}

fn describe(token: &Token) -> String {
    if token.kind == TokenKind::Eof {
        "end of input".to_string()
    } else {
        format!("'{}'", token.text)
    }
}

struct Parser {
    tokens: Vec<Token>,
    index: usize,
}

impl Parser {
    fn peek(&self) -> &Token {
        &self.tokens[self.index]
    }

    fn advance(&mut self) -> Token {
        let token = self.tokens[self.index].clone();
        // The trailing Eof token is sticky.
        if self.index + 1 < self.tokens.len() {
            self.index += 1;
        }
        token
    }

    // iff → implies ( IFF implies )*        left-associative
    fn parse_iff(&mut self) -> Result<Formula, ParseError> {
        let mut formula = self.parse_implies()?;
        while self.peek().kind == TokenKind::Iff {
            self.advance();
            let right = self.parse_implies()?;
            formula = Formula::iff(formula, right);
        }
        Ok(formula)
    }

    // implies → or ( IMPLIES or )*          right-associative
    fn parse_implies(&mut self) -> Result<Formula, ParseError> {
        let left = self.parse_or()?;
        if self.peek().kind == TokenKind::Implies {
            self.advance();
            let right = self.parse_implies()?;
            Ok(Formula::implies(left, right))
        } else {
            Ok(left)
        }
    }

    // or → and ( OR and )*                  left-associative
    fn parse_or(&mut self) -> Result<Formula, ParseError> {
        let mut formula = self.parse_and()?;
        while self.peek().kind == TokenKind::Or {
            self.advance();
            let right = self.parse_and()?;
            formula = Formula::or(formula, right);
        }
        Ok(formula)
    }

    // and → unary ( AND unary )*            left-associative
    fn parse_and(&mut self) -> Result<Formula, ParseError> {
        let mut formula = self.parse_unary()?;
        while self.peek().kind == TokenKind::And {
            self.advance();
            let right = self.parse_unary()?;
            formula = Formula::and(formula, right);
        }
        Ok(formula)
    }

    // unary → NOT unary | primary
    fn parse_unary(&mut self) -> Result<Formula, ParseError> {
        if self.peek().kind == TokenKind::Not {
            self.advance();
            let operand = self.parse_unary()?;
            Ok(Formula::not(operand))
        } else {
            self.parse_primary()
        }
    }

    // primary → VAR | BOTTOM | LPAREN formula RPAREN
    fn parse_primary(&mut self) -> Result<Formula, ParseError> {
        match self.peek().kind {
            TokenKind::Var => {
                let token = self.advance();
                Ok(Formula::Var(token.text))
            }
            TokenKind::Bottom => {
                self.advance();
                Ok(Formula::Bottom)
            }
            TokenKind::LParen => {
                self.advance();
                let formula = self.parse_iff()?;
                if self.peek().kind != TokenKind::RParen {
                    let found = describe(self.peek());
                    return Err(ParseError::new(
                        self.peek().pos,
                        format!("Expected ')' but found {found}"),
                    ));
                }
                self.advance();
                Ok(formula)
            }
            _ => {
                let token = self.peek();
                Err(ParseError::new(
                    token.pos,
                    format!("Unexpected token {}", describe(token)),
                ))
            }
        }
    }
}
