//! Nested names and declarator ids.

use weave_ir::{QualifiedName, Scope, ELLIPSIS, UNNAMED_SCOPE};

use crate::{commit, try_outcome, ParseError, ParseErrorKind, ParseOutcome, Parser};

impl Parser<'_> {
    /// Consume any number of `scope::` prefixes into `name`.
    ///
    /// Returns whether at least one scope was read.
    pub(crate) fn parse_nested_name(&mut self, name: &mut QualifiedName) -> Result<bool, ParseError> {
        let mut any = false;
        while let Some(scope) = self.parse_nested_name_elem().into_result()? {
            name.push_scope(scope);
            any = true;
        }
        Ok(any)
    }

    /// One `id<args>::`, `<unnamed>::` or `...::`.
    fn parse_nested_name_elem(&mut self) -> ParseOutcome<Scope> {
        let snapshot = self.snapshot();
        self.cursor.skip_blanks();

        if self.cursor.check(b'.') {
            if !self.cursor.eat_str(ELLIPSIS) {
                return self.fail(ParseErrorKind::InvalidDots);
            }
            self.cursor.skip_blanks();
            if !self.cursor.eat_str("::") {
                return self.fail(ParseErrorKind::InvalidDots);
            }
            return ParseOutcome::Matched(Scope::Ellipsis);
        }

        let scope = if self.cursor.eat_str(UNNAMED_SCOPE) {
            Scope::named(UNNAMED_SCOPE)
        } else {
            let ident = self.take_identifier();
            if ident.is_empty() || ident == "operator" {
                self.restore(snapshot);
                return ParseOutcome::Declined;
            }
            match try_outcome!(self, self.parse_template_args()) {
                Some(args) => Scope::specialized(ident, args),
                None => Scope::named(ident),
            }
        };

        self.cursor.skip_blanks();
        if !self.cursor.eat_str("::") {
            self.restore(snapshot);
            return ParseOutcome::Declined;
        }
        ParseOutcome::Matched(scope)
    }

    /// `nested-name? (identifier | operator-function-id | conversion-function-id) template-args?`
    pub(crate) fn parse_declarator_id(&mut self) -> ParseOutcome<QualifiedName> {
        let snapshot = self.snapshot();
        self.cursor.skip_blanks();
        let mut name = QualifiedName::new();
        let scoped = commit!(self.parse_nested_name(&mut name));
        self.cursor.skip_blanks();

        if self.at_forbidden_wildcard() {
            return self.fail(ParseErrorKind::WildcardNotAllowed);
        }
        let ident = self.take_identifier();
        if ident.is_empty() {
            if scoped {
                return self.fail(ParseErrorKind::MissingDeclaratorId);
            }
            self.restore(snapshot);
            return ParseOutcome::Declined;
        }

        if ident == "operator" {
            self.cursor.skip_blanks();
            match try_outcome!(self, self.parse_operator_id()) {
                Some(op) => name.set_operator(op),
                None => name.set_conversion(commit!(self.parse_conversion_id())),
            }
        } else {
            name.set_ident(ident, None);
        }

        if let Some(args) = try_outcome!(self, self.parse_template_args()) {
            if !name.set_template_args(args) {
                return self.fail(ParseErrorKind::InvalidTemplateArgs);
            }
        }
        ParseOutcome::Matched(name)
    }
}
