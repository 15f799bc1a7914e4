//! CSS syntax parser using the `cssparser` crate.
//!
//! The parser tokenizes stylesheet text and builds [`Rule`] nodes whose
//! selector and declaration values are raw source slices. Values are never
//! interpreted: `font-family: "MyWebFont", sans-serif` is stored exactly as
//! written so downstream transforms can match on the original text.

use crate::rules::{Declaration, Rule, Stylesheet};
use crate::{Error, Result};
use cssparser::{Delimiter, ParseError as CssParseError, Parser, ParserInput, Token};

/// Parse a CSS string into a stylesheet tree.
///
/// Rules appear in the sheet in source order. Parse errors in individual
/// rules do not fail the whole parse: the broken rule is skipped with a
/// warning logged via `tracing::warn!` and parsing resumes at the next rule.
pub fn parse_css(css: &str) -> Result<Stylesheet> {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);
    let mut sheet = Stylesheet::new();

    loop {
        // Skip whitespace and comments
        parser.skip_whitespace();

        if parser.is_exhausted() {
            break;
        }

        match parse_rule(&mut parser) {
            Ok(rule) => {
                sheet.push(rule);
            }
            Err(e) => {
                tracing::warn!("CSS parse error: {}", e);
                // Try to recover by skipping to next rule
                skip_to_next_rule(&mut parser);
            }
        }
    }

    Ok(sheet)
}

/// Parse a single CSS rule: selector { declarations }
fn parse_rule<'i>(parser: &mut Parser<'i, '_>) -> Result<Rule> {
    let location = parser.current_source_location();

    // Capture the raw selector text up to the curly brace block
    let selector = parser
        .parse_until_before(Delimiter::CurlyBracketBlock, |p| {
            p.skip_whitespace();
            let start = p.position();
            while p.next().is_ok() {}
            Ok::<_, CssParseError<'i, ()>>(p.slice_from(start).trim_end().to_string())
        })
        .map_err(|e: CssParseError<'_, ()>| {
            Error::parse(
                format!("Failed to parse selector: {:?}", e.kind),
                e.location.line,
                e.location.column,
            )
        })?;

    if selector.is_empty() {
        return Err(Error::parse(
            "Empty selector before '{'",
            location.line,
            location.column,
        ));
    }

    // Consume the curly bracket block and collect the declarations inside it
    let declarations = match parser.next() {
        Ok(Token::CurlyBracketBlock) => parser
            .parse_nested_block(|block_parser| parse_declarations(block_parser))
            .map_err(|e: CssParseError<'_, ()>| {
                Error::parse(
                    format!("Failed to parse declaration block: {:?}", e.kind),
                    e.location.line,
                    e.location.column,
                )
            })?,
        _ => {
            return Err(Error::parse(
                "Expected '{' after selector",
                location.line,
                location.column,
            ));
        }
    };

    Ok(Rule::new(selector, declarations))
}

/// Parse CSS declarations, keeping each value as a raw source slice.
fn parse_declarations<'i>(
    parser: &mut Parser<'i, '_>,
) -> std::result::Result<Vec<Declaration>, CssParseError<'i, ()>> {
    let mut declarations = vec![];

    loop {
        parser.skip_whitespace();

        if parser.is_exhausted() {
            break;
        }

        // Property name
        let property = match parser.expect_ident() {
            Ok(name) => name.to_string(),
            Err(_) => {
                skip_declaration(parser);
                continue;
            }
        };

        if parser.expect_colon().is_err() {
            skip_declaration(parser);
            continue;
        }

        // Raw value text up to the terminating semicolon (or end of block)
        let value = parser.parse_until_before(Delimiter::Semicolon, |p| {
            p.skip_whitespace();
            let start = p.position();
            while p.next().is_ok() {}
            Ok::<_, CssParseError<'i, ()>>(p.slice_from(start).trim_end().to_string())
        })?;

        declarations.push(Declaration::new(property, value));

        // Skip optional semicolon
        let _ = parser.try_parse(|p| p.expect_semicolon());
    }

    Ok(declarations)
}

/// Skip to the next rule (error recovery).
fn skip_to_next_rule(parser: &mut Parser<'_, '_>) {
    let mut depth = 0;
    loop {
        match parser.next() {
            Ok(Token::CurlyBracketBlock) => {
                depth += 1;
                if depth == 1 {
                    // Skip block contents
                    let _ = parser.parse_nested_block(|p| {
                        while !p.is_exhausted() {
                            let _ = p.next();
                        }
                        Ok::<_, CssParseError<'_, ()>>(())
                    });
                    return;
                }
            }
            Ok(Token::CloseCurlyBracket) => {
                if depth > 0 {
                    depth -= 1;
                }
                if depth == 0 {
                    return;
                }
            }
            Err(_) => return,
            _ => {}
        }
    }
}

/// Skip to the end of the current declaration (error recovery).
fn skip_declaration(parser: &mut Parser<'_, '_>) {
    loop {
        match parser.next() {
            Ok(Token::Semicolon) | Err(_) => return,
            Ok(Token::CloseCurlyBracket) => return,
            _ => {}
        }
    }
}
