//! Operator precedence queries over tokens.
//!
//! Thin token-level views of the `rfront_core::lang::operators` table. Every function is total: tokens that are
//! not operators (or not usable in the asked-for position) report precedence `0`.

use rfront_core::lang::operators::{self, Associativity};

use crate::lexer::Token;

/// Infix binding strength of `token`, or `0` if it cannot be used infix.
pub fn binary(token: &Token) -> u8 {
    token
        .operator_id()
        .map_or(0, |id| operators::info_for(id).binary)
}

/// Prefix binding strength of `token`, or `0` if it cannot be used prefix.
pub fn unary(token: &Token) -> u8 {
    token
        .operator_id()
        .map_or(0, |id| operators::info_for(id).unary)
}

/// `true` for infix operators that group to the right (`<-`, `=`, `^`).
pub fn is_right_associative(token: &Token) -> bool {
    token.operator_id().is_some_and(|id| {
        let info = operators::info_for(id);
        info.is_binary() && info.associativity == Associativity::Right
    })
}

/// Minimum precedence threshold for parsing the right operand of the infix operator `token`.
///
/// The parser folds another operator into the right operand only while that operator's precedence is strictly
/// greater than the threshold, so left-associative operators pass their own precedence and right-associative ones
/// pass one less.
pub fn right_operand_precedence(token: &Token) -> u8 {
    let precedence = binary(token);
    if is_right_associative(token) {
        precedence.saturating_sub(1)
    } else {
        precedence
    }
}
