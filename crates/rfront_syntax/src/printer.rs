//! Text renderings of an [`Ast`]: an indented tree dump for debugging and a compact s-expression form for tests.
//!
//! ## S-expression shape
//! - Leaves print their source text: `x`, `1`, `"a"`.
//! - Operators and keywords print as `(head child…)`: `(+ 1 2)`, `(if c a b)`.
//! - `f(x)` prints as `(f x)`; indexing keeps its bracket as head: `([ x 1)`, `([[ x 1)`.
//! - A parenthesized group keeps its bracket too: `(( x)`.
//! - `Empty` placeholders print as `(child…)`, so a parameter list is `(x y)` and an omitted index argument is `()`.
//! - The lone placeholder of an empty call `f()` or block `{}` is omitted: `(f)`, `({)`.
//!
//! Both renderers walk the tree with an explicit stack, so very deep trees cannot overflow the call stack.

use crate::ast::{Ast, NodeId};
use rfront_core::lang::punctuation::PunctuationId;

enum Step<'a> {
    Node(NodeId),
    Text(&'a str),
}

impl Ast {
    /// S-expression for the subtree rooted at `root`.
    pub fn to_sexp(&self, root: NodeId) -> String {
        let mut out = String::new();
        let mut stack = vec![Step::Node(root)];

        while let Some(step) = stack.pop() {
            let id = match step {
                Step::Text(text) => {
                    out.push_str(text);
                    continue;
                }
                Step::Node(id) => id,
            };

            let node = self.node(id);
            let token = node.token();
            if node.is_leaf() && !token.is_empty() {
                out.push_str(&token.contents);
                continue;
            }

            let (head, items) = self.sexp_parts(id);
            out.push('(');
            if let Some(head) = head {
                out.push_str(head);
            }
            stack.push(Step::Text(")"));
            for (i, &child) in items.iter().enumerate().rev() {
                stack.push(Step::Node(child));
                if i > 0 || head.is_some() {
                    stack.push(Step::Text(" "));
                }
            }
        }
        out
    }

    /// Head text and rendered children for an interior (or placeholder) node.
    fn sexp_parts(&self, id: NodeId) -> (Option<&str>, Vec<NodeId>) {
        let token = self.token(id);
        let children = self.children(id);

        if token.is_empty() {
            return (None, children.to_vec());
        }

        let is_call = token.is_call_opener() && children.len() >= 2;
        let is_block = token.kind.is_punctuation(PunctuationId::LBrace);
        let mut items = children.to_vec();
        if (is_call && children.len() == 2) || (is_block && children.len() == 1) {
            if let Some(&last) = items.last() {
                if self.token(last).is_empty() && self.node(last).is_leaf() {
                    items.pop();
                }
            }
        }

        if is_call && token.contents == "(" {
            (None, items)
        } else {
            (Some(token.contents.as_str()), items)
        }
    }

    /// Indented one-node-per-line dump of every tree in `roots`.
    ///
    /// ## Examples
    /// ```rust
    /// let parsed = rfront_syntax::parser::parse("-x");
    /// assert_eq!(parsed.ast.dump(&parsed.roots), "operator \"-\"\n  symbol \"x\"\n");
    /// ```
    pub fn dump(&self, roots: &[NodeId]) -> String {
        let mut out = String::new();
        let mut stack: Vec<(NodeId, usize)> = roots.iter().rev().map(|&id| (id, 0)).collect();

        while let Some((id, depth)) = stack.pop() {
            let node = self.node(id);
            let token = node.token();
            out.push_str(&"  ".repeat(depth));
            out.push_str(token.kind.name());
            if !token.contents.is_empty() {
                out.push_str(&format!(" {:?}", token.contents));
            }
            out.push('\n');
            stack.extend(node.children().iter().rev().map(|&child| (child, depth + 1)));
        }
        out
    }
}
