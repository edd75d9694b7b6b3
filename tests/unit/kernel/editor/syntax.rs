use super::*;

fn kinds(tokens: &[Token]) -> Vec<(&str, TokenKind)> {
    tokens.iter().map(|t| (t.text.as_str(), t.kind)).collect()
}

#[test]
fn test_language_from_hint() {
    assert_eq!(LanguageId::from_hint("C"), LanguageId::C);
    assert_eq!(LanguageId::from_hint(" c89 "), LanguageId::C);
    assert_eq!(LanguageId::from_hint("rust"), LanguageId::PlainText);
}

#[test]
fn test_plain_text_is_single_token() {
    let tokens = tokenize(LanguageId::PlainText, "int x = 1;");
    assert_eq!(kinds(&tokens), vec![("int x = 1;", TokenKind::Default)]);
}

#[test]
fn test_c_declaration_with_comment() {
    let tokens = tokenize(LanguageId::C, "int x = 42; // hi");
    assert_eq!(
        kinds(&tokens),
        vec![
            ("int", TokenKind::Keyword),
            (" ", TokenKind::Default),
            ("x", TokenKind::Identifier),
            (" ", TokenKind::Default),
            ("=", TokenKind::Operator),
            (" ", TokenKind::Default),
            ("42", TokenKind::Literal),
            (";", TokenKind::Operator),
            (" ", TokenKind::Default),
            ("// hi", TokenKind::Comment),
        ]
    );
}

#[test]
fn test_c_include_directive() {
    let tokens = tokenize(LanguageId::C, "#include <stdio.h>");
    assert_eq!(
        kinds(&tokens),
        vec![
            ("#include", TokenKind::Special),
            (" ", TokenKind::Default),
            ("<stdio.h>", TokenKind::String),
        ]
    );
}

#[test]
fn test_c_literals_and_unterminated_string() {
    let tokens = tokenize(LanguageId::C, "p = NULL; s = \"abc");
    assert!(tokens.contains(&Token {
        text: "NULL".to_string(),
        kind: TokenKind::Literal,
    }));
    assert_eq!(tokens.last().map(|t| t.text.as_str()), Some("\"abc"));
    assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::String));
}

#[test]
fn test_tokens_reproduce_line() {
    let line = "while (i < 10) { printf(\"%d\", i++); } // loop ünïcode";
    let joined: String = tokenize(LanguageId::C, line)
        .into_iter()
        .map(|t| t.text)
        .collect();
    assert_eq!(joined, line);
    assert!(tokenize(LanguageId::C, "").is_empty());
}
