//! Template argument lists.

use weave_ir::{TemplateArg, TemplateArgList, ELLIPSIS, UNNAMED_SCOPE, WILDCARD};

use crate::grammar::DeclaratorMode;
use crate::{commit, require, try_outcome, ParseError, ParseErrorKind, ParseOutcome, Parser};

impl Parser<'_> {
    /// `< arg, arg, ... >`, declining when no `<` follows.
    pub(crate) fn parse_template_args(&mut self) -> ParseOutcome<TemplateArgList> {
        let snapshot = self.snapshot();
        self.cursor.skip_blanks();
        if !self.cursor.check(b'<') || self.cursor.rest().starts_with(UNNAMED_SCOPE) {
            self.restore(snapshot);
            return ParseOutcome::Declined;
        }
        self.cursor.advance(1);

        let mut args = TemplateArgList::new();
        if let Some(first) = try_outcome!(self, self.parse_template_arg()) {
            args.push(first);
            loop {
                self.cursor.skip_blanks();
                if !self.cursor.eat(b',') {
                    break;
                }
                if matches!(args.iter().last(), Some(TemplateArg::Ellipsis)) {
                    return self.fail(ParseErrorKind::InvalidTemplateArgs);
                }
                let arg = require!(
                    self,
                    self.parse_template_arg(),
                    ParseErrorKind::InvalidTemplateArgs
                );
                args.push(arg);
            }
        }

        self.cursor.skip_blanks();
        if !self.cursor.eat(b'>') {
            return self.fail(ParseErrorKind::InvalidTemplateArgs);
        }
        ParseOutcome::Matched(args)
    }

    /// One argument: `...`, `%`, `&name`, a decimal value or a type.
    fn parse_template_arg(&mut self) -> ParseOutcome<TemplateArg> {
        let snapshot = self.snapshot();
        self.cursor.skip_blanks();

        match self.cursor.peek() {
            None | Some(b'>' | b',') => {
                self.restore(snapshot);
                return ParseOutcome::Declined;
            }
            Some(b'.') => {
                if self.cursor.eat_str(ELLIPSIS) {
                    return ParseOutcome::Matched(TemplateArg::Ellipsis);
                }
                return self.fail(ParseErrorKind::InvalidDots);
            }
            Some(byte) if char::from(byte) == WILDCARD => {
                if !self.config.wildcards_allowed() {
                    return self.fail(ParseErrorKind::WildcardNotAllowed);
                }
                let before = self.snapshot();
                self.cursor.advance(1);
                if self.at_argument_end() {
                    return ParseOutcome::Matched(TemplateArg::Any);
                }
                self.restore(before);
            }
            Some(b'&') => {
                self.cursor.advance(1);
                if let Some(name) = try_outcome!(self, self.parse_declarator_id()) {
                    if self.at_argument_end() {
                        return ParseOutcome::Matched(TemplateArg::Address(name));
                    }
                }
                self.restore(snapshot);
                return ParseOutcome::Declined;
            }
            Some(_) => {}
        }

        if let Some(value) = try_outcome!(self, self.parse_dec_literal()) {
            return ParseOutcome::Matched(TemplateArg::Value(value));
        }

        let declaration = commit!(self.parse_declaration(DeclaratorMode::Abstract));
        if declaration.ty.is_undefined() {
            self.restore(snapshot);
            return ParseOutcome::Declined;
        }
        ParseOutcome::Matched(TemplateArg::Type(declaration.ty))
    }

    /// Next non-blank is `,` or `>`. Consumes the blanks only.
    fn at_argument_end(&mut self) -> bool {
        self.cursor.skip_blanks();
        matches!(self.cursor.peek(), Some(b',' | b'>'))
    }

    /// `-? digits [uUlL]*`
    fn parse_dec_literal(&mut self) -> ParseOutcome<i64> {
        let snapshot = self.snapshot();
        self.cursor.skip_blanks();
        let at = self.position();
        let negative = self.cursor.eat(b'-');
        if negative {
            self.cursor.skip_blanks();
        }
        let digits = self.cursor.take_while(|byte| byte.is_ascii_digit());
        if digits.is_empty() {
            self.restore(snapshot);
            return ParseOutcome::Declined;
        }
        let text = if negative {
            format!("-{digits}")
        } else {
            digits.to_owned()
        };
        let Ok(value) = text.parse::<i64>() else {
            return ParseOutcome::Failed(ParseError::new(
                ParseErrorKind::InvalidTemplateArgs,
                at,
            ));
        };
        self.cursor
            .take_while(|byte| matches!(byte, b'u' | b'U' | b'l' | b'L'));
        ParseOutcome::Matched(value)
    }
}
