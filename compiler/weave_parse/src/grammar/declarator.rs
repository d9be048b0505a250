//! Declarators.
//!
//! A declarator wraps the specifier type from the inside out: pointer
//! operators apply first, then the function and array suffixes, then a
//! parenthesized inner declarator. For `int (*p)[3]` the parser skips over
//! `(*p)`, applies `[3]`, and only then parses `*p`, giving "pointer to
//! array of 3 int".

use tracing::trace;
use weave_ir::{ArrayDim, QualifiedName, Qualifiers, TypePattern, ELLIPSIS, WILDCARD};
use weave_stack::ensure_sufficient_stack;

use crate::grammar::DeclaratorMode;
use crate::{commit, ParseError, ParseErrorKind, ParseOutcome, Parser};

impl Parser<'_> {
    /// Parse a declarator, wrapping `ty` in place. Returns the declarator id.
    pub(crate) fn parse_declarator(
        &mut self,
        mode: DeclaratorMode,
        ty: &mut TypePattern,
    ) -> Result<Option<QualifiedName>, ParseError> {
        ensure_sufficient_stack(|| self.parse_declarator_inner(mode, ty))
    }

    fn parse_declarator_inner(
        &mut self,
        mode: DeclaratorMode,
        ty: &mut TypePattern,
    ) -> Result<Option<QualifiedName>, ParseError> {
        while self.parse_ptr_operator(ty).into_result()?.is_some() {}
        self.cursor.skip_blanks();

        let mut name = None;
        let nested = if self.cursor.check(b'(') && self.is_nested_declarator() {
            Some(self.skip_nested_declarator()?)
        } else {
            let at = self.position();
            if let Some(id) = self.parse_declarator_id().into_result()? {
                if mode == DeclaratorMode::Abstract {
                    return Err(ParseError::new(ParseErrorKind::DeclaratorNotAbstract, at));
                }
                name = Some(id);
            }
            None
        };

        self.parse_declarator_post(ty)?;

        if let Some((inner_start, close)) = nested {
            trace!(inner_start, close, "nested declarator");
            let resume = self.snapshot();
            self.cursor = resume.bounded(inner_start, close);
            name = self.parse_declarator(mode, ty)?;
            self.cursor.skip_blanks();
            if !self.cursor.is_at_end() {
                return Err(self.error(ParseErrorKind::MissingBracket));
            }
            self.restore(resume);
        }
        Ok(name)
    }

    /// Does the `(` at the cursor open a nested declarator rather than a
    /// parameter list? Only if a pointer operator follows the parentheses.
    pub(crate) fn is_nested_declarator(&mut self) -> bool {
        let snapshot = self.snapshot();
        while self.cursor.eat(b'(') {
            self.cursor.skip_blanks();
        }
        let mut probe = TypePattern::Undefined;
        let nested = self.parse_ptr_operator(&mut probe).is_matched();
        self.restore(snapshot);
        nested
    }

    /// Skip a balanced `( ... )`, returning the inner region.
    fn skip_nested_declarator(&mut self) -> Result<(usize, usize), ParseError> {
        let open = self.position();
        let mut depth = 0usize;
        while let Some(byte) = self.cursor.peek() {
            self.cursor.advance(1);
            match byte {
                b'(' => depth += 1,
                b')' => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok((open + 1, self.position() - 1));
                    }
                }
                _ => {}
            }
        }
        Err(ParseError::new(ParseErrorKind::InvalidDeclarator, open))
    }

    /// `*`, `A::*` or `&`, each optionally followed by qualifiers.
    fn parse_ptr_operator(&mut self, ty: &mut TypePattern) -> ParseOutcome<()> {
        let snapshot = self.snapshot();
        self.cursor.skip_blanks();
        let mut scope = QualifiedName::new();
        let scoped = commit!(self.parse_nested_name(&mut scope));
        self.cursor.skip_blanks();

        if self.cursor.eat(b'*') {
            if scoped {
                ty.make_member_pointer(scope);
            } else {
                ty.make_pointer();
            }
            let quals = self.parse_cv_seq();
            ty.qualify(quals);
            ParseOutcome::Matched(())
        } else if !scoped && self.cursor.eat(b'&') {
            ty.make_reference();
            ParseOutcome::Matched(())
        } else {
            self.restore(snapshot);
            ParseOutcome::Declined
        }
    }

    /// Trailing `const`/`volatile`; repeats are harmless here.
    fn parse_cv_seq(&mut self) -> Qualifiers {
        let mut quals = Qualifiers::empty();
        loop {
            self.cursor.skip_blanks();
            if self.eat_keyword("const") {
                quals |= Qualifiers::CONST;
            } else if self.eat_keyword("volatile") {
                quals |= Qualifiers::VOLATILE;
            } else {
                return quals;
            }
        }
    }

    /// Function and array suffixes.
    ///
    /// Later suffixes bind tighter, so each suffix parses the rest of the
    /// chain before wrapping `ty`: `int f()[3]` would be a function returning
    /// an array.
    pub(crate) fn parse_declarator_post(&mut self, ty: &mut TypePattern) -> Result<(), ParseError> {
        ensure_sufficient_stack(|| {
            self.cursor.skip_blanks();
            if self.cursor.eat(b'(') {
                let (params, variadic) = self.parse_function_args()?;
                self.cursor.skip_blanks();
                if !self.cursor.eat(b')') {
                    return Err(self.error(ParseErrorKind::MissingBracket));
                }
                let quals = self.parse_cv_seq();
                self.parse_declarator_post(ty)?;
                ty.make_function(params, variadic);
                ty.qualify(quals);
            } else if self.cursor.eat(b'[') {
                let dim = self.parse_array_dim()?;
                self.cursor.skip_blanks();
                if !self.cursor.eat(b']') {
                    return Err(self.error(ParseErrorKind::MissingBracket));
                }
                self.parse_declarator_post(ty)?;
                ty.make_array(dim);
            }
            Ok(())
        })
    }

    fn parse_array_dim(&mut self) -> Result<ArrayDim, ParseError> {
        self.cursor.skip_blanks();
        let at = self.position();
        if self.cursor.peek().map(char::from) == Some(WILDCARD) {
            if !self.config.wildcards_allowed() {
                return Err(self.error(ParseErrorKind::WildcardNotAllowed));
            }
            self.cursor.advance(1);
            return Ok(ArrayDim::Any);
        }
        let digits = self.cursor.take_while(|byte| byte.is_ascii_digit());
        digits
            .parse::<u64>()
            .map(ArrayDim::Fixed)
            .map_err(|_| ParseError::new(ParseErrorKind::InvalidArraySize, at))
    }

    /// Parameter list up to (not including) the closing `)`.
    fn parse_function_args(&mut self) -> Result<(Vec<TypePattern>, bool), ParseError> {
        let mut params = Vec::new();
        let mut variadic = false;
        let mut first = true;
        loop {
            self.cursor.skip_blanks();
            if self.cursor.is_at_end() || self.cursor.check(b')') {
                break;
            }
            if !first {
                if !self.cursor.eat(b',') {
                    return Err(self.error(ParseErrorKind::InvalidArgumentList));
                }
                if variadic {
                    return Err(self.error(ParseErrorKind::ArgumentAfterEllipsis));
                }
            }
            first = false;

            if self.parse_ellipsis().into_result()?.is_some() {
                variadic = true;
                continue;
            }
            self.cursor.skip_blanks();
            let at = self.position();
            let param = self.parse_declaration(DeclaratorMode::Abstract)?;
            if param.ty.is_undefined() {
                return Err(ParseError::new(ParseErrorKind::InvalidArgumentList, at));
            }
            params.push(param.ty);
        }
        Ok((params, variadic))
    }

    /// A variadic `...`, but not the `...::` scope wildcard.
    fn parse_ellipsis(&mut self) -> ParseOutcome<()> {
        let snapshot = self.snapshot();
        self.cursor.skip_blanks();
        if !self.cursor.check(b'.') {
            self.restore(snapshot);
            return ParseOutcome::Declined;
        }
        if !self.cursor.eat_str(ELLIPSIS) {
            return self.fail(ParseErrorKind::InvalidDots);
        }
        self.cursor.skip_blanks();
        if self.cursor.check(b':') {
            self.restore(snapshot);
            return ParseOutcome::Declined;
        }
        ParseOutcome::Matched(())
    }
}
