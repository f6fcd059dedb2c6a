use hoi4_script_core::{tokenize, ScriptError, Token, TokenKind, Tokens};
use std::io::Cursor;

/// Helper: collect `(text, line)` pairs from a string.
fn texts(input: &str) -> Vec<(String, usize)> {
    tokenize(input)
        .map(|t| t.unwrap())
        .map(|t| (t.text, t.line))
        .collect()
}

#[test]
fn splits_on_any_whitespace() {
    assert_eq!(
        texts("a =\t1   b\t=  { c }"),
        vec![
            ("a".into(), 1),
            ("=".into(), 1),
            ("1".into(), 1),
            ("b".into(), 1),
            ("=".into(), 1),
            ("{".into(), 1),
            ("c".into(), 1),
            ("}".into(), 1),
        ]
    );
}

#[test]
fn line_numbers_are_one_based() {
    let tokens = texts("a\n\nb\r\n  c");
    assert_eq!(
        tokens,
        vec![("a".into(), 1), ("b".into(), 3), ("c".into(), 4)]
    );
}

#[test]
fn comment_runs_to_end_of_line() {
    assert_eq!(
        texts("a = 1 # b = 2\n#c\nd"),
        vec![
            ("a".into(), 1),
            ("=".into(), 1),
            ("1".into(), 1),
            ("d".into(), 3)
        ]
    );
}

#[test]
fn comment_glued_to_token_is_cut() {
    assert_eq!(texts("value#comment"), vec![("value".into(), 1)]);
}

#[test]
fn line_text_keeps_comment() {
    let token = tokenize("  speed = 4 # knots").next().unwrap().unwrap();
    assert_eq!(token.line_text(), "  speed = 4 # knots");
}

#[test]
fn quotes_do_not_group_words() {
    let words: Vec<_> = texts(r#"name = "Light Tank""#)
        .into_iter()
        .map(|(t, _)| t)
        .collect();
    assert_eq!(words, vec!["name", "=", "\"Light", "Tank\""]);
}

#[test]
fn empty_and_blank_input_yield_nothing() {
    assert!(texts("").is_empty());
    assert!(texts(" \t \n\n   \n").is_empty());
}

#[test]
fn token_kinds() {
    let kinds: Vec<_> = tokenize("a = { } {}")
        .map(|t| t.unwrap().kind())
        .collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Word,
            TokenKind::Equals,
            TokenKind::Open,
            TokenKind::Close,
            TokenKind::Word,
        ]
    );
}

#[test]
fn tokens_are_produced_lazily() {
    let mut tokens = tokenize("first\nsecond = {");
    let first = tokens.next().unwrap().unwrap();
    assert_eq!(first, Token::new("first", 1, "first"));
    assert_eq!(tokens.next().unwrap().unwrap().text, "second");
    assert_eq!(tokens.count(), 2);
}

#[test]
fn invalid_utf8_is_reported_once() {
    let bytes: &[u8] = b"a = 1\nb = \xff\nc = 3\n";
    let mut tokens = Tokens::new(Cursor::new(bytes));

    let first: Vec<_> = tokens.by_ref().take(3).map(|t| t.unwrap().text).collect();
    assert_eq!(first, vec!["a", "=", "1"]);
    assert!(matches!(tokens.next(), Some(Err(ScriptError::Io(_)))));
    assert!(tokens.next().is_none());
}
