//! Lexer tests

use qex::lexer::{TokenKind, lex};

#[test]
fn test_lex_empty() {
    let tokens = lex("").unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Eof);
}

#[test]
fn test_lex_whitespace() {
    let tokens = lex("   \t\n  ").unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Eof);
}

#[test]
fn test_lex_delimiters() {
    let tokens = lex("( ) { }").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::LParen);
    assert_eq!(tokens[1].kind, TokenKind::RParen);
    assert_eq!(tokens[2].kind, TokenKind::LBrace);
    assert_eq!(tokens[3].kind, TokenKind::RBrace);
    assert_eq!(tokens[4].kind, TokenKind::Eof);
}

#[test]
fn test_lex_numbers() {
    let tokens = lex("42 -7 3.14").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].text, "42");
    assert_eq!(tokens[1].kind, TokenKind::Number);
    assert_eq!(tokens[1].text, "-7");
    // Decimal literals lex as numbers even though evaluation is integer-only
    assert_eq!(tokens[2].kind, TokenKind::Number);
    assert_eq!(tokens[2].text, "3.14");
}

#[test]
fn test_lex_operator_symbols() {
    let tokens = lex("+ - * / % ^ min max").unwrap();

    for tok in &tokens[..2] {
        assert_eq!(tok.kind, TokenKind::Symbol, "token {:?}", tok.text);
    }
    assert_eq!(tokens[0].text, "+");
    // A lone `-` is a symbol, not a number
    assert_eq!(tokens[1].text, "-");
    assert_eq!(tokens[6].kind, TokenKind::Symbol);
    assert_eq!(tokens[6].text, "min");
    assert_eq!(tokens[7].text, "max");
}

#[test]
fn test_lex_negative_number_beats_symbol() {
    // `-5` could match both rules; Number wins the tie
    let tokens = lex("-5").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].text, "-5");
}

#[test]
fn test_lex_identifier_symbols() {
    let tokens = lex("def values exit x_1").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Symbol);
    assert_eq!(tokens[0].text, "def");
    assert_eq!(tokens[3].kind, TokenKind::Symbol);
    assert_eq!(tokens[3].text, "x_1");
}

#[test]
fn test_lex_expression() {
    let tokens = lex("(+ 1 {2 3})").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::LParen);
    assert_eq!(tokens[1].kind, TokenKind::Symbol);
    assert_eq!(tokens[1].text, "+");
    assert_eq!(tokens[2].kind, TokenKind::Number);
    assert_eq!(tokens[3].kind, TokenKind::LBrace);
    assert_eq!(tokens[4].kind, TokenKind::Number);
    assert_eq!(tokens[5].kind, TokenKind::Number);
    assert_eq!(tokens[6].kind, TokenKind::RBrace);
    assert_eq!(tokens[7].kind, TokenKind::RParen);
    assert_eq!(tokens[8].kind, TokenKind::Eof);
}

#[test]
fn test_lex_spans_cover_source() {
    let source = "(+ 12 3)";
    let tokens = lex(source).unwrap();

    let plus = &tokens[1];
    assert_eq!(&source[plus.span.start..plus.span.end], "+");
    let twelve = &tokens[2];
    assert_eq!(&source[twelve.span.start..twelve.span.end], "12");
}

#[test]
fn test_lex_rejects_foreign_characters() {
    assert!(lex("(+ 1 #)").is_err());
    assert!(lex("\"strings are not in the language\"").is_err());
}
