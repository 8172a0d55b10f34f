use super::*;

#[test]
fn test_words_and_literals() {
    assert_eq!(
        lex("mov x 5"),
        vec![
            Token::Word("mov".to_string()),
            Token::Whitespace(1),
            Token::Word("x".to_string()),
            Token::Whitespace(1),
            Token::Literal(token::Literal::Integer("5".to_string())),
        ]
    );
    assert_eq!(
        lex("mov ratio -2.5f")[4],
        Token::Literal(token::Literal::Real("-2.5f".to_string()))
    );
    assert_eq!(
        lex("mov n +12")[4],
        Token::Literal(token::Literal::Integer("+12".to_string()))
    );
}

#[test]
fn test_quoted_text_keeps_spaces() {
    assert_eq!(
        lex("mov s 'a b'")[4],
        Token::Literal(token::Literal::Text('\'', "a b".to_string()))
    );
    assert_eq!(
        lex("mov s \"it's\"")[4],
        Token::Literal(token::Literal::Text('"', "it's".to_string()))
    );
}

#[test]
fn test_unterminated_quote() {
    assert_eq!(lex("mov s 'abc")[4], Token::Unknown("'abc".to_string()));
}

#[test]
fn test_remark_only_when_leading() {
    assert_eq!(
        lex("  # note"),
        vec![Token::Whitespace(2), Token::Remark("# note".to_string())]
    );
    assert_eq!(lex("prt #x")[2], Token::Unknown("#x".to_string()));
}

#[test]
fn test_trailing_whitespace_dropped() {
    assert_eq!(lex("ret \t ").len(), 1);
    assert_eq!(lex("   "), vec![]);
    assert_eq!(lex(""), vec![]);
}

#[test]
fn test_numeric_runs_are_not_words() {
    assert_eq!(
        lex("123"),
        vec![Token::Literal(token::Literal::Integer("123".to_string()))]
    );
    assert_eq!(lex("x1_y"), vec![Token::Word("x1_y".to_string())]);
    assert_eq!(lex("a-b"), vec![Token::Unknown("a-b".to_string())]);
}

#[test]
fn test_token_widths() {
    let tokens = lex("mov  s 'ab'");
    let widths: Vec<usize> = tokens.iter().map(|t| t.len()).collect();
    assert_eq!(widths, vec![3, 2, 1, 1, 4]);
}
