//! Arena-backed syntax tree.
//!
//! Every node owns one token (its payload) and an ordered list of children. Nodes live in a single [`Ast`] arena
//! and refer to each other by [`NodeId`]; parent links are ids too, so there is no shared ownership anywhere.
//!
//! ## Notes
//! - Ids are never reused: once a node is destroyed its id stays stale forever.
//! - Structural mutation goes through [`Ast::add`], [`Ast::remove`], and [`Ast::destroy`], which keep the
//!   parent/child links mutually consistent and refuse to create cycles.
//! - Rendering (`dump`, s-expressions) lives in `crate::printer`.

use thiserror::Error;

use crate::lexer::Token;

/// Byte range `[start, end)` into the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Handle to a node inside an [`Ast`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in the arena's allocation order.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A tree node: one token plus links.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    token: Token,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    pub fn token(&self) -> &Token {
        &self.token
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Errors from structural mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AstError {
    #[error("attaching {child:?} under {parent:?} would create a cycle")]
    Cycle { parent: NodeId, child: NodeId },
    #[error("{0:?} refers to a destroyed node")]
    StaleNode(NodeId),
}

/// Node arena. See the module docs for the ownership model.
#[derive(Debug, Clone, Default)]
pub struct Ast {
    slots: Vec<Option<Node>>,
    live: usize,
}

impl Ast {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a detached node owning `token`.
    pub fn create(&mut self, token: Token) -> NodeId {
        let id = NodeId(self.slots.len());
        self.slots.push(Some(Node {
            token,
            parent: None,
            children: Vec::new(),
        }));
        self.live += 1;
        id
    }

    /// Allocate a detached `Empty` placeholder positioned at the start of `at`.
    pub fn create_empty(&mut self, at: &Token) -> NodeId {
        self.create(Token::empty_at(at))
    }

    /// Append `child` as the last child of `parent`.
    ///
    /// If `child` already has a parent it is detached from it first, so a node is never listed under two parents.
    ///
    /// ## Errors
    /// - [`AstError::StaleNode`] if either id refers to a destroyed node.
    /// - [`AstError::Cycle`] if `child` is `parent` or one of its ancestors.
    pub fn add(&mut self, parent: NodeId, child: NodeId) -> Result<(), AstError> {
        for id in [parent, child] {
            if !self.contains(id) {
                return Err(AstError::StaleNode(id));
            }
        }
        if parent == child || self.is_ancestor(child, parent) {
            return Err(AstError::Cycle { parent, child });
        }

        if let Some(old_parent) = self.node(child).parent {
            self.remove(old_parent, child);
        }
        self.node_mut(child).parent = Some(parent);
        self.node_mut(parent).children.push(child);
        Ok(())
    }

    /// Detach `child` from `parent` without destroying it.
    ///
    /// Returns `false` (and changes nothing) if `child` is not currently a child of `parent`.
    pub fn remove(&mut self, parent: NodeId, child: NodeId) -> bool {
        let Some(index) = self
            .get(parent)
            .and_then(|node| node.children.iter().position(|&c| c == child))
        else {
            return false;
        };
        self.node_mut(parent).children.remove(index);
        if let Some(node) = self.get_mut(child) {
            node.parent = None;
        }
        true
    }

    /// Destroy `id` and its whole subtree, detaching it from its parent first.
    ///
    /// Returns the number of nodes destroyed (`0` if `id` was already stale). Traversal is iterative, so arbitrarily
    /// deep trees are fine.
    pub fn destroy(&mut self, id: NodeId) -> usize {
        let Some(parent) = self.get(id).map(Node::parent) else {
            return 0;
        };
        if let Some(parent) = parent {
            self.remove(parent, id);
        }

        let mut destroyed = 0;
        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            if let Some(node) = self.slots.get_mut(next.0).and_then(Option::take) {
                destroyed += 1;
                stack.extend(node.children);
            }
        }
        self.live -= destroyed;
        destroyed
    }

    /// Return `true` if `id` refers to a live node.
    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.slots.get_mut(id.0).and_then(Option::as_mut)
    }

    /// Return the live node behind `id`.
    ///
    /// ## Panics
    /// - If `id` is stale. Use [`Ast::get`] when that is possible.
    pub fn node(&self, id: NodeId) -> &Node {
        match self.get(id) {
            Some(node) => node,
            None => panic!("{}", AstError::StaleNode(id)),
        }
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        match self.get_mut(id) {
            Some(node) => node,
            None => panic!("{}", AstError::StaleNode(id)),
        }
    }

    pub fn token(&self, id: NodeId) -> &Token {
        &self.node(id).token
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Return `true` if `ancestor` is a proper ancestor of `id`.
    pub fn is_ancestor(&self, ancestor: NodeId, id: NodeId) -> bool {
        let mut cursor = self.get(id).and_then(Node::parent);
        while let Some(current) = cursor {
            if current == ancestor {
                return true;
            }
            cursor = self.get(current).and_then(Node::parent);
        }
        false
    }

    /// Pre-order walk of the subtree rooted at `root` (root included).
    pub fn descendants(&self, root: NodeId) -> Descendants<'_> {
        Descendants {
            ast: self,
            stack: if self.contains(root) { vec![root] } else { Vec::new() },
        }
    }
}

/// Iterator returned by [`Ast::descendants`].
pub struct Descendants<'a> {
    ast: &'a Ast,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        if let Some(node) = self.ast.get(id) {
            self.stack.extend(node.children.iter().rev());
        }
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::{Position, TokenKind};

    fn sym(name: &str) -> Token {
        Token::new(TokenKind::Symbol, name, Span::new(0, name.len()), Position::default())
    }

    fn names(ast: &Ast, ids: impl IntoIterator<Item = NodeId>) -> Vec<String> {
        ids.into_iter().map(|id| ast.token(id).contents.clone()).collect()
    }

    #[test]
    fn test_add_links_both_directions() {
        let mut ast = Ast::new();
        let root = ast.create(sym("root"));
        let a = ast.create(sym("a"));
        let b = ast.create(sym("b"));
        ast.add(root, a).unwrap();
        ast.add(root, b).unwrap();

        assert_eq!(ast.children(root), &[a, b]);
        assert_eq!(ast.parent(a), Some(root));
        assert_eq!(ast.parent(b), Some(root));
        assert_eq!(ast.parent(root), None);
    }

    #[test]
    fn test_add_reparents() {
        let mut ast = Ast::new();
        let p1 = ast.create(sym("p1"));
        let p2 = ast.create(sym("p2"));
        let c = ast.create(sym("c"));
        ast.add(p1, c).unwrap();
        ast.add(p2, c).unwrap();

        assert!(ast.children(p1).is_empty());
        assert_eq!(ast.children(p2), &[c]);
        assert_eq!(ast.parent(c), Some(p2));
    }

    #[test]
    fn test_reparent_keeps_sibling_order() {
        let mut ast = Ast::new();
        let p1 = ast.create(sym("p1"));
        let p2 = ast.create(sym("p2"));
        let [a, b, c, d] = ["a", "b", "c", "d"].map(|name| ast.create(sym(name)));
        for child in [a, b, c, d] {
            ast.add(p1, child).unwrap();
        }
        ast.add(p2, b).unwrap();

        assert_eq!(ast.children(p1), &[a, c, d]);
        assert_eq!(ast.children(p2), &[b]);
        assert_eq!(ast.parent(b), Some(p2));
        assert_eq!(names(&ast, ast.children(p1).to_vec()), ["a", "c", "d"]);
    }

    #[test]
    fn test_add_rejects_cycles() {
        let mut ast = Ast::new();
        let a = ast.create(sym("a"));
        let b = ast.create(sym("b"));
        let c = ast.create(sym("c"));
        ast.add(a, b).unwrap();
        ast.add(b, c).unwrap();

        assert_eq!(ast.add(c, a), Err(AstError::Cycle { parent: c, child: a }));
        assert_eq!(ast.add(a, a), Err(AstError::Cycle { parent: a, child: a }));
        assert_eq!(ast.parent(a), None);
        assert_eq!(ast.children(c), &[] as &[NodeId]);
    }

    #[test]
    fn test_remove_detaches_without_destroying() {
        let mut ast = Ast::new();
        let p = ast.create(sym("p"));
        let c = ast.create(sym("c"));
        let other = ast.create(sym("other"));
        ast.add(p, c).unwrap();

        assert!(!ast.remove(p, other));
        assert!(ast.remove(p, c));
        assert!(!ast.remove(p, c));
        assert!(ast.contains(c));
        assert_eq!(ast.parent(c), None);
        assert_eq!(ast.len(), 3);
    }

    #[test]
    fn test_destroy_removes_subtree_and_detaches() {
        let mut ast = Ast::new();
        let root = ast.create(sym("root"));
        let mid = ast.create(sym("mid"));
        let leaf = ast.create(sym("leaf"));
        let keep = ast.create(sym("keep"));
        ast.add(root, mid).unwrap();
        ast.add(mid, leaf).unwrap();
        ast.add(root, keep).unwrap();

        assert_eq!(ast.destroy(mid), 2);
        assert!(!ast.contains(mid));
        assert!(!ast.contains(leaf));
        assert_eq!(ast.children(root), &[keep]);
        assert_eq!(ast.len(), 2);
        assert_eq!(ast.destroy(mid), 0);
        assert_eq!(ast.add(root, leaf), Err(AstError::StaleNode(leaf)));
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut ast = Ast::new();
        let a = ast.create(sym("a"));
        ast.destroy(a);
        let b = ast.create(sym("b"));
        assert_ne!(a, b);
        assert!(!ast.contains(a));
    }

    #[test]
    fn test_descendants_preorder() {
        let mut ast = Ast::new();
        let root = ast.create(sym("root"));
        let a = ast.create(sym("a"));
        let a1 = ast.create(sym("a1"));
        let b = ast.create(sym("b"));
        ast.add(root, a).unwrap();
        ast.add(a, a1).unwrap();
        ast.add(root, b).unwrap();

        assert_eq!(names(&ast, ast.descendants(root)), vec!["root", "a", "a1", "b"]);
    }

    #[test]
    fn test_deep_chain_destroy() {
        let mut ast = Ast::new();
        let root = ast.create(sym("n"));
        let mut tip = root;
        for _ in 0..5_000 {
            let next = ast.create(sym("n"));
            ast.add(tip, next).unwrap();
            tip = next;
        }
        assert_eq!(ast.destroy(root), 5_001);
        assert!(ast.is_empty());
    }

    #[test]
    fn test_span_merge() {
        assert_eq!(Span::new(3, 5).merge(Span::new(1, 4)), Span::new(1, 5));
        assert_eq!(Span::new(3, 5).len(), 2);
    }
}
