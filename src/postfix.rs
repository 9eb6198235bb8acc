//! Infix to postfix conversion (shunting-yard).

use log::debug;

use crate::token::Token;

/// Rearranges a valid infix token sequence into postfix order.
///
/// An incoming operator only pops operators of *strictly* greater precedence, so chains
/// of equal precedence such as `a && b && c` keep all their operators on the stack until
/// the chain ends.
pub fn to_postfix(tokens: &[Token]) -> Vec<Token> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Token> = Vec::new();

    for token in tokens {
        match token {
            Token::Term(_) => output.push(token.clone()),
            Token::LParen => stack.push(Token::LParen),
            Token::RParen => {
                while let Some(top) = stack.pop() {
                    if top == Token::LParen {
                        break;
                    }
                    output.push(top);
                }
            }
            Token::And | Token::Or | Token::Not | Token::Implies => {
                while let Some(top) = stack.last() {
                    if top.precedence() <= token.precedence() {
                        break;
                    }
                    output.extend(stack.pop());
                }
                stack.push(token.clone());
            }
        }
    }
    while let Some(top) = stack.pop() {
        output.push(top);
    }

    let rendered: Vec<String> = output.iter().map(|t| t.to_string()).collect();
    debug!("to_postfix: {}", rendered.join(" "));
    output
}
