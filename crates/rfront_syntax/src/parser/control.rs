/// Keyword constructs: `function`, `if`, `while`, `for`, `repeat`.
///
/// Node shapes:
/// - `function`: `[parameters, body]`, where `parameters` is an `Empty` container whose children are the
///   parameter symbols; a parameter's only child is its default value.
/// - `if`: `[condition, then]` or `[condition, then, else]`.
/// - `while`: `[condition, body]`.
/// - `for`: `[variable, iterable, body]`.
/// - `repeat`: `[body]`.
impl<'a> Parser<'a> {
    fn parse_control_flow(&mut self, id: KeywordId) -> Production {
        match id {
            KeywordId::Function => self.parse_function(),
            KeywordId::If => self.parse_if(),
            KeywordId::While => self.parse_while(),
            KeywordId::For => self.parse_for(),
            KeywordId::Repeat => self.parse_repeat(),
            _ => Err(self.unexpected()),
        }
    }

    fn parse_function(&mut self) -> Production {
        let keyword = self.consume();

        self.build(keyword, |p, function| {
            p.expect(punct(PunctuationId::LParen), Construct::Function)?;
            let parameters = p.enclosed(punct(PunctuationId::RParen), true, |p| p.parse_parameter_list())?;
            p.attach(function, parameters);
            p.expect(punct(PunctuationId::RParen), Construct::Parameters)?;
            let body = p.operand(0, Construct::Function)?;
            p.attach(function, body);
            Ok(())
        })
    }

    fn parse_parameter_list(&mut self) -> Production {
        let container = Token::empty_at(&self.current);

        self.build(container, |p, list| {
            if p.check_punct(PunctuationId::RParen) {
                return Ok(());
            }
            loop {
                // A parameter that fails to parse is kept as its degraded stand-in and the list carries on.
                let parameter = settle(p.parse_parameter()).ok_or(None::<NodeId>)?;
                p.attach(list, parameter);

                if p.check_punct(PunctuationId::Comma) {
                    p.advance();
                    continue;
                }
                if p.check_punct(PunctuationId::RParen) {
                    return Ok(());
                }
                p.malformed(ListContext::Parameters, Construct::Parameters)?;
                if p.check_punct(PunctuationId::RParen) {
                    return Ok(());
                }
            }
        })
    }

    /// `name` or `name = default`.
    fn parse_parameter(&mut self) -> Production {
        if !self.current.is_symbol() {
            return Err(self.mismatch(TokenKind::Symbol, Construct::Parameters));
        }
        let name = self.consume();

        self.build(name, |p, parameter| {
            if p.check(TokenKind::Operator(OperatorId::AssignEq)) {
                p.advance();
                let default = p.operand(0, Construct::DefaultValue)?;
                p.attach(parameter, default);
            }
            Ok(())
        })
    }

    fn parse_if(&mut self) -> Production {
        let keyword = self.consume();
        let construct = Construct::Control(KeywordId::If);

        self.build(keyword, |p, node| {
            p.parse_condition(node, construct)?;
            let then = p.operand(0, construct)?;
            p.attach(node, then);
            if p.check_keyword(KeywordId::Else) {
                p.advance();
                let otherwise = p.operand(0, construct)?;
                p.attach(node, otherwise);
            }
            Ok(())
        })
    }

    fn parse_while(&mut self) -> Production {
        let keyword = self.consume();
        let construct = Construct::Control(KeywordId::While);

        self.build(keyword, |p, node| {
            p.parse_condition(node, construct)?;
            let body = p.operand(0, construct)?;
            p.attach(node, body);
            Ok(())
        })
    }

    fn parse_for(&mut self) -> Production {
        let keyword = self.consume();
        let construct = Construct::Control(KeywordId::For);

        self.build(keyword, |p, node| {
            p.expect(punct(PunctuationId::LParen), construct)?;
            p.enclosed(punct(PunctuationId::RParen), false, |p| p.parse_for_header(node, construct))?;
            p.expect(punct(PunctuationId::RParen), construct)?;
            let body = p.operand(0, construct)?;
            p.attach(node, body);
            Ok(())
        })
    }

    /// `variable in iterable`, between the parentheses.
    fn parse_for_header(&mut self, node: NodeId, construct: Construct) -> Result<(), Option<NodeId>> {
        if !self.current.is_symbol() {
            return Err(self.mismatch(TokenKind::Symbol, construct));
        }
        let variable = self.leaf();
        self.attach(node, variable);
        self.expect(TokenKind::Keyword(KeywordId::In), construct)?;
        let iterable = self.operand(0, construct)?;
        self.attach(node, iterable);
        Ok(())
    }

    fn parse_repeat(&mut self) -> Production {
        let keyword = self.consume();
        let construct = Construct::Control(KeywordId::Repeat);

        self.build(keyword, |p, node| {
            let body = p.operand(0, construct)?;
            p.attach(node, body);
            Ok(())
        })
    }

    /// `( condition )`, attached to `node`.
    fn parse_condition(&mut self, node: NodeId, construct: Construct) -> Result<(), Option<NodeId>> {
        self.expect(punct(PunctuationId::LParen), construct)?;
        let condition = self.enclosed(punct(PunctuationId::RParen), false, |p| p.operand(0, construct))?;
        self.attach(node, condition);
        self.expect(punct(PunctuationId::RParen), construct)
    }
}
