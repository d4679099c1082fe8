/// Call and index folding: `f(...)`, `x[...]`, `x[[...]]`.
///
/// The call node's token is the opening bracket; its first child is the callee and the rest are the arguments. A
/// call with no arguments gets a single `Empty` argument, and an omitted argument (`x[1, ]`) is an `Empty` child.
impl<'a> Parser<'a> {
    /// Fold the call opened at the current token onto `callee`, then any directly following calls.
    fn fold_call(&mut self, callee: NodeId) -> Option<NodeId> {
        if self.depth >= self.config.max_depth {
            // The callee survives; its arguments and whatever follows in the construct are skipped.
            self.report_depth_limit();
            self.skip_overflow();
            return Some(callee);
        }
        self.descend("call", |p| {
            let call = settle(p.parse_call(callee))?;
            if p.current.is_call_opener() {
                p.fold_call(call)
            } else {
                Some(call)
            }
        })
    }

    fn parse_call(&mut self, callee: NodeId) -> Production {
        let Some(opener) = self.current.punctuation_id() else {
            return Ok(callee);
        };
        let Some(closer) = punctuation::complement(opener) else {
            return Ok(callee);
        };
        let construct = Construct::Arguments(opener);
        let open = self.consume();

        self.build(open, |p, call| {
            p.attach(call, callee);
            p.enclosed(punct(closer), true, |p| p.parse_arguments(call, closer, construct))?;
            p.expect(punct(closer), construct)
        })
    }

    /// Parse arguments up to (not including) `closer`.
    fn parse_arguments(&mut self, call: NodeId, closer: PunctuationId, construct: Construct) -> Result<(), Option<NodeId>> {
        if self.check_punct(closer) {
            let empty = self.placeholder();
            self.attach(call, empty);
            return Ok(());
        }

        let context = ListContext::Arguments(closer);
        loop {
            let argument = if self.check_punct(PunctuationId::Comma) || self.check_punct(closer) {
                self.placeholder()
            } else {
                self.operand(0, construct)?
            };
            self.attach(call, argument);

            if self.check_punct(PunctuationId::Comma) {
                self.advance();
                continue;
            }
            if self.check_punct(closer) {
                return Ok(());
            }
            self.malformed(context, construct)?;
            if self.check_punct(closer) {
                return Ok(());
            }
        }
    }
}
