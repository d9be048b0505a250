//! Declaration parser for join-point signatures and match expressions.
//!
//! Both sides of a match are written as C++ declarations. Concrete
//! signatures (`int C::f(char) const`) are parsed with wildcards forbidden;
//! match expressions (`% ...::f(...)`) with `%` and `...` enabled.
//!
//! The parser works directly on the text. It is recursive descent over the
//! declaration grammar: a specifier sequence followed by one declarator, with
//! function parameters and template type arguments parsed as abstract
//! declarations. The first error stops the parse.

mod config;
mod cursor;
mod error;
mod grammar;
mod outcome;

pub use config::{ParserConfig, WildcardMode};
pub use cursor::Cursor;
pub use error::{ParseError, ParseErrorKind};
pub use outcome::ParseOutcome;

use tracing::trace;
use weave_ir::{QualifiedName, Specifiers, TypePattern};

/// The text a Type pattern matching the global scope is written as.
pub const ROOT_SCOPE: &str = "::";

/// A parsed top-level declaration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Declaration {
    pub ty: TypePattern,
    /// The declarator id, absent for a bare type.
    pub name: Option<QualifiedName>,
    pub specifiers: Specifiers,
}

/// Parse one declaration.
pub fn parse_declaration(text: &str, config: ParserConfig) -> Result<Declaration, ParseError> {
    Parser::new(text, config).parse()
}

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    config: ParserConfig,
}

impl<'a> Parser<'a> {
    pub fn new(text: &'a str, config: ParserConfig) -> Self {
        Parser {
            cursor: Cursor::new(text),
            config,
        }
    }

    /// Parse the whole input as one declaration.
    pub fn parse(mut self) -> Result<Declaration, ParseError> {
        self.cursor.skip_blanks();
        if self.cursor.is_at_end() {
            return Err(ParseError::new(ParseErrorKind::EmptyExpression, 0));
        }
        if self.cursor.rest().trim_end() == ROOT_SCOPE {
            trace!("root scope");
            return Ok(Declaration {
                ty: TypePattern::named(QualifiedName::ident(ROOT_SCOPE)),
                ..Declaration::default()
            });
        }

        let declaration = self.parse_declaration(grammar::DeclaratorMode::Named)?;
        self.cursor.skip_blanks();
        if !self.cursor.is_at_end() {
            return Err(self.error(ParseErrorKind::TokensAfterEnd));
        }
        if declaration.ty.is_undefined() {
            return Err(ParseError::new(ParseErrorKind::InvalidType, 0));
        }
        Ok(declaration)
    }

    // === Snapshots ===

    #[inline]
    pub(crate) fn snapshot(&self) -> Cursor<'a> {
        self.cursor
    }

    #[inline]
    pub(crate) fn restore(&mut self, snapshot: Cursor<'a>) {
        self.cursor = snapshot;
    }

    #[inline]
    pub(crate) fn position(&self) -> usize {
        self.cursor.position()
    }

    // === Errors ===

    /// An error of `kind` at the current position.
    pub(crate) fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(kind, self.position())
    }

    pub(crate) fn fail<T>(&self, kind: ParseErrorKind) -> ParseOutcome<T> {
        ParseOutcome::Failed(self.error(kind))
    }

    // === Lexical helpers ===

    /// Identifier bytes: `[A-Za-z0-9_]`, plus `%` when wildcards are on.
    fn id_predicate(&self) -> impl Fn(u8) -> bool {
        let wildcards = self.config.wildcards_allowed();
        move |byte: u8| {
            byte.is_ascii_alphanumeric()
                || byte == b'_'
                || (wildcards && char::from(byte) == weave_ir::WILDCARD)
        }
    }

    pub(crate) fn take_identifier(&mut self) -> &'a str {
        let is_id = self.id_predicate();
        self.cursor.take_while(is_id)
    }

    /// Consume a keyword not followed by an identifier byte.
    pub(crate) fn eat_keyword(&mut self, keyword: &str) -> bool {
        let is_id = self.id_predicate();
        self.cursor.eat_word(keyword, is_id)
    }

    /// Is the next byte a `%` that this configuration does not accept?
    pub(crate) fn at_forbidden_wildcard(&self) -> bool {
        !self.config.wildcards_allowed()
            && self.cursor.peek().map(char::from) == Some(weave_ir::WILDCARD)
    }
}

#[cfg(test)]
mod tests;
