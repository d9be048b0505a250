//! Operator function ids and conversion function ids.
//!
//! Both follow the `operator` keyword, which the caller has consumed.

use tracing::trace;
use weave_ir::{OperatorKind, TypePattern, WILDCARD};

use crate::grammar::DeclaratorMode;
use crate::{ParseError, ParseErrorKind, ParseOutcome, Parser};

impl Parser<'_> {
    /// `new`, `delete[]`, `+=`, `()`, ... and `%` in patterns.
    ///
    /// In a pattern a single `%` is the any-operator wildcard, so `%%` spells
    /// the modulo operator and `%%=` its compound assignment. Without
    /// wildcards `%` and `%=` are plain operators from the symbolic table.
    pub(crate) fn parse_operator_id(&mut self) -> ParseOutcome<OperatorKind> {
        for (keyword, single, array) in [
            ("new", OperatorKind::New, OperatorKind::NewArray),
            ("delete", OperatorKind::Delete, OperatorKind::DeleteArray),
        ] {
            if self.eat_keyword(keyword) {
                self.cursor.skip_blanks();
                let op = if self.cursor.eat_str("[]") { array } else { single };
                return ParseOutcome::Matched(op);
            }
        }

        if self.config.wildcards_allowed() && self.cursor.peek().map(char::from) == Some(WILDCARD)
        {
            self.cursor.advance(1);
            let op = if self.cursor.peek().map(char::from) != Some(WILDCARD) {
                OperatorKind::Any
            } else {
                self.cursor.advance(1);
                if self.cursor.eat(b'=') {
                    OperatorKind::ModAssign
                } else {
                    OperatorKind::Modulo
                }
            };
            return ParseOutcome::Matched(op);
        }

        let rest = self.cursor.rest();
        match OperatorKind::symbolic_by_length()
            .iter()
            .copied()
            .find(|op| rest.starts_with(op.spelling()))
        {
            Some(op) => {
                self.cursor.advance(op.spelling().len());
                ParseOutcome::Matched(op)
            }
            None => ParseOutcome::Declined,
        }
    }

    /// The target type of `operator T()`.
    ///
    /// The target extends up to the `(` of the last `()` in the region. The
    /// cursor is left on that `(` so the function declarator is parsed
    /// normally afterwards.
    pub(crate) fn parse_conversion_id(&mut self) -> Result<TypePattern, ParseError> {
        let start = self.position();
        let rest = self.cursor.rest();
        let open = rest
            .rfind(')')
            .map(|close| rest[..close].trim_end())
            .filter(|before| before.len() > 1 && before.ends_with('('))
            .map(|before| start + before.len() - 1)
            .ok_or_else(|| self.error(ParseErrorKind::MissingConversionArgs))?;

        let resume = self.cursor.at(open);
        self.cursor = resume.bounded(start, open);
        let target = self.parse_declaration(DeclaratorMode::Abstract)?;
        self.cursor.skip_blanks();
        if !self.cursor.is_at_end() || has_undefined_core(&target.ty) {
            return Err(ParseError::new(ParseErrorKind::InvalidOperator, start));
        }
        self.cursor = resume;
        trace!(start, target = %target.ty, "conversion function");
        Ok(target.ty)
    }
}

/// Does the innermost type of a declarator chain lack a specifier? Then
/// the text was something like `( )` rather than a type.
fn has_undefined_core(ty: &TypePattern) -> bool {
    let mut core = ty;
    while let Some(child) = core.child() {
        core = child;
    }
    core.is_undefined()
}
