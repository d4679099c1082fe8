/// Token-stream helpers and error recovery.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Consuming tokens (`advance`, `consume`, `leaf`)
/// - Matching / expecting kinds (`check*`, `expect`)
/// - Node construction with automatic cleanup (`build`, `attach`)
/// - Diagnostics and recovery (`report*`, `unexpected`, `mismatch`, `malformed`)
/// - Nesting control (`descend`, `enclosed`)
impl<'a> Parser<'a> {
    // ========================================================================
    // Token stream
    // ========================================================================

    fn advance(&mut self) {
        self.current = next_significant(&mut self.tokenizer);
    }

    /// Advance and return the token we just moved past.
    fn consume(&mut self) -> Token {
        let next = next_significant(&mut self.tokenizer);
        std::mem::replace(&mut self.current, next)
    }

    fn at_end(&self) -> bool {
        self.current.is_end()
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    fn check_punct(&self, id: PunctuationId) -> bool {
        self.current.kind.is_punctuation(id)
    }

    fn check_keyword(&self, id: KeywordId) -> bool {
        self.current.kind.is_keyword(id)
    }

    /// If the current token is `kind`, consume it; otherwise report and abandon the construct.
    fn expect(&mut self, kind: TokenKind, construct: Construct) -> Result<(), Option<NodeId>> {
        if self.check(kind) {
            self.advance();
            Ok(())
        } else {
            Err(self.mismatch(kind, construct))
        }
    }

    // ========================================================================
    // Nodes
    // ========================================================================

    /// Consume the current token into a detached leaf.
    fn leaf(&mut self) -> NodeId {
        let token = self.consume();
        self.ast.create(token)
    }

    /// Zero-width `Empty` node at the current token; nothing is consumed.
    fn placeholder(&mut self) -> NodeId {
        self.ast.create_empty(&self.current)
    }

    fn attach(&mut self, parent: NodeId, child: NodeId) {
        self.ast
            .add(parent, child)
            .expect("INVARIANT: parser only attaches detached nodes under a node outside their subtree");
    }

    /// Create a node for `head` and let `body` fill in its children.
    ///
    /// If `body` gives up, the partial node (with everything already attached to it) is destroyed and the degraded
    /// stand-in, if any, is passed on.
    fn build(
        &mut self,
        head: Token,
        body: impl FnOnce(&mut Self, NodeId) -> Result<(), Option<NodeId>>,
    ) -> Production {
        let node = self.ast.create(head);
        match body(self, node) {
            Ok(()) => Ok(node),
            Err(degraded) => {
                self.ast.destroy(node);
                Err(degraded)
            }
        }
    }

    // ========================================================================
    // Diagnostics and recovery
    // ========================================================================

    fn report(&mut self, diagnostic: Diagnostic) {
        tracing::debug!(
            code = diagnostic.kind.code(),
            position = %diagnostic.position(),
            message = %diagnostic,
            "syntax diagnostic"
        );
        self.diagnostics.push(diagnostic);
    }

    fn report_end(&mut self, construct: Construct) {
        if self.end_reported {
            return;
        }
        self.end_reported = true;
        let token = self.current.clone();
        self.report(Diagnostic::unexpected_end(token, construct));
    }

    /// `true` if the current token belongs to the innermost open bracket construct.
    fn resynchronizes(&self) -> bool {
        self.enclosures.last().is_some_and(|enclosure| {
            self.check(enclosure.closer) || (enclosure.separated && self.check_punct(PunctuationId::Comma))
        })
    }

    /// Degraded stand-in for a failed construct: a placeholder at a resynchronization token, otherwise the
    /// offending token consumed as a leaf.
    fn degraded(&mut self) -> NodeId {
        if self.at_end() || self.resynchronizes() {
            self.placeholder()
        } else {
            self.leaf()
        }
    }

    /// Report a token that cannot start an expression and return its stand-in.
    fn unexpected(&mut self) -> Option<NodeId> {
        let diagnostic = Diagnostic::unexpected_token(self.current.clone(), None);
        let diagnostic = if self.resynchronizes() {
            diagnostic.with_hint("an expression is missing before this token")
        } else if self.current.is_right_bracket() {
            diagnostic.with_hint("this closing bracket does not match any open bracket")
        } else if self.current.is_invalid() {
            diagnostic.with_hint("check for an unterminated string, backtick name, or %operator%")
        } else {
            diagnostic
        };
        self.report(diagnostic);
        Some(self.degraded())
    }

    /// Report that `expected` was required here and return the degraded stand-in (`None` at end of input).
    fn mismatch(&mut self, expected: TokenKind, construct: Construct) -> Option<NodeId> {
        if self.at_end() {
            self.report_end(construct);
            return None;
        }
        let token = self.current.clone();
        self.report(Diagnostic::unexpected_token(token, Some(expected)));
        Some(self.degraded())
    }

    /// Report and skip a token that is neither `,` nor the list's closer; a directly following `,` is skipped too.
    fn malformed(&mut self, context: ListContext, construct: Construct) -> Result<(), Option<NodeId>> {
        if self.at_end() {
            self.report_end(construct);
            return Err(None);
        }
        let token = self.consume();
        self.report(Diagnostic::malformed_list(token, context));
        if self.check_punct(PunctuationId::Comma) {
            self.advance();
        }
        Ok(())
    }

    // ========================================================================
    // Nesting
    // ========================================================================

    /// Run one nested production under the depth guard.
    fn descend(&mut self, production: &'static str, parse: impl FnOnce(&mut Self) -> Option<NodeId>) -> Option<NodeId> {
        if self.depth >= self.config.max_depth {
            return self.depth_exceeded();
        }
        tracing::trace!(production, depth = self.depth, token = ?self.current.contents);
        self.depth_reported = false;
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    /// The overflowing construct becomes one leaf for its first token; the rest of it is skipped.
    fn depth_exceeded(&mut self) -> Option<NodeId> {
        if self.at_end() {
            return None;
        }
        self.report_depth_limit();
        if self.resynchronizes() {
            return Some(self.placeholder());
        }
        let token = self.skip_overflow();
        Some(self.ast.create(token))
    }

    /// One diagnostic per overflow, however many productions hit the limit before the parser climbs back out.
    fn report_depth_limit(&mut self) {
        if self.depth_reported {
            return;
        }
        self.depth_reported = true;
        let token = self.current.clone();
        self.report(Diagnostic::recursion_limit(token, self.config.max_depth));
    }

    /// Skip tokens up to the next point the enclosing construct can pick up from: its closer or separator, a
    /// `;`, an unmatched closing bracket, or end of input. Brackets opened along the way are skipped with their
    /// closers. Returns the first skipped token.
    fn skip_overflow(&mut self) -> Token {
        let first = self.consume();
        let mut open = usize::from(first.is_left_bracket());
        while !self.at_end() {
            if open == 0
                && (self.resynchronizes() || self.current.is_right_bracket() || self.check_punct(PunctuationId::Semi))
            {
                break;
            }
            if self.current.is_left_bracket() {
                open += 1;
            } else if self.current.is_right_bracket() {
                open -= 1;
            }
            self.advance();
        }
        first
    }

    /// Run `parse` with `closer` registered as the innermost pending bracket.
    fn enclosed<T>(&mut self, closer: TokenKind, separated: bool, parse: impl FnOnce(&mut Self) -> T) -> T {
        self.enclosures.push(Enclosure { closer, separated });
        let result = parse(self);
        self.enclosures.pop();
        result
    }
}
