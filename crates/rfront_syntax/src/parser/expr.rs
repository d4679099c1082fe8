/// Expression parsing: precedence climbing, prefix operators, blocks, and parenthesized groups.
///
/// ## Notes
/// - `parse_expression(min)` folds infix operators whose precedence is strictly greater than `min`; the right
///   operand is parsed with `precedence::right_operand_precedence`, which is what makes `^` and `<-` group to the
///   right and everything else to the left.
/// - Call/index brackets directly after an expression are folded before any infix operator is considered.
impl<'a> Parser<'a> {
    fn parse_expression(&mut self, min_precedence: u8) -> Option<NodeId> {
        self.descend("expression", |p| {
            let mut node = p.parse_expression_start()?;
            loop {
                if p.current.is_call_opener() {
                    node = p.fold_call(node)?;
                } else if precedence::binary(&p.current) > min_precedence {
                    node = settle(p.fold_binary(node))?;
                } else {
                    return Some(node);
                }
            }
        })
    }

    /// Parse an operand that must exist, reporting end of input as a problem of `construct`.
    fn operand(&mut self, min_precedence: u8, construct: Construct) -> Result<NodeId, Option<NodeId>> {
        match self.parse_expression(min_precedence) {
            Some(node) => Ok(node),
            None => {
                self.report_end(construct);
                Err(None)
            }
        }
    }

    /// Parse the head of an expression: a primary, a prefix operator, or a keyword construct.
    ///
    /// Returns `None` only at end of input.
    fn parse_expression_start(&mut self) -> Option<NodeId> {
        match self.current.kind {
            TokenKind::End => None,
            TokenKind::Keyword(id) => match keywords::category(id) {
                KeywordCategory::ControlFlow => settle(self.parse_control_flow(id)),
                KeywordCategory::Constant | KeywordCategory::Jump => Some(self.leaf()),
                KeywordCategory::Clause => self.unexpected(),
            },
            TokenKind::Punctuation(PunctuationId::LBrace) => settle(self.parse_block()),
            TokenKind::Punctuation(PunctuationId::LParen) => settle(self.parse_parenthesized()),
            TokenKind::Punctuation(_) => self.unexpected(),
            TokenKind::Operator(id) if self.current.is_unary_operator() => settle(self.parse_unary(id)),
            TokenKind::Operator(_) => self.unexpected(),
            TokenKind::Symbol | TokenKind::Number | TokenKind::String => Some(self.leaf()),
            TokenKind::Invalid | TokenKind::Empty | TokenKind::Whitespace | TokenKind::Comment => self.unexpected(),
        }
    }

    /// Fold the infix operator at the current token with `lhs` as its left operand.
    fn fold_binary(&mut self, lhs: NodeId) -> Production {
        let Some(id) = self.current.operator_id() else {
            return Ok(lhs);
        };
        let threshold = precedence::right_operand_precedence(&self.current);
        let operator = self.consume();

        self.build(operator, |p, node| {
            p.attach(node, lhs);
            // `name =` with nothing after it is a legal argument that supplies no value.
            let rhs = if id == OperatorId::AssignEq && p.at_argument_boundary() {
                p.placeholder()
            } else {
                p.operand(threshold, Construct::BinaryOperand(id))?
            };
            p.attach(node, rhs);
            Ok(())
        })
    }

    fn at_argument_boundary(&self) -> bool {
        self.enclosures.last().is_some_and(|enclosure| enclosure.separated) && self.resynchronizes()
    }

    fn parse_unary(&mut self, id: OperatorId) -> Production {
        let threshold = precedence::unary(&self.current);
        let operator = self.consume();

        self.build(operator, |p, node| {
            let operand = p.operand(threshold, Construct::UnaryOperand(id))?;
            p.attach(node, operand);
            Ok(())
        })
    }

    /// `{ expr; expr … }`. An empty block gets a single `Empty` child.
    fn parse_block(&mut self) -> Production {
        let open = self.consume();

        self.build(open, |p, block| {
            p.enclosed(punct(PunctuationId::RBrace), false, |p| p.parse_block_body(block))?;
            if p.ast.children(block).is_empty() {
                let empty = p.placeholder();
                p.attach(block, empty);
            }
            p.expect(punct(PunctuationId::RBrace), Construct::Block)
        })
    }

    fn parse_block_body(&mut self, block: NodeId) -> Result<(), Option<NodeId>> {
        loop {
            while self.check_punct(PunctuationId::Semi) {
                self.advance();
            }
            if self.check_punct(PunctuationId::RBrace) {
                return Ok(());
            }
            let expr = self.operand(0, Construct::Block)?;
            self.attach(block, expr);
        }
    }

    /// `( expr )`. The group node is kept so the tree records the explicit parentheses.
    fn parse_parenthesized(&mut self) -> Production {
        let open = self.consume();

        self.build(open, |p, group| {
            let inner = p.enclosed(punct(PunctuationId::RParen), false, |p| {
                p.operand(0, Construct::Parenthesized)
            })?;
            p.attach(group, inner);
            p.expect(punct(PunctuationId::RParen), Construct::Parenthesized)
        })
    }
}
