use super::*;

fn parse_str(s: &str) -> Result<Statement, Error> {
    parse(&lex(s))
}

fn code(s: &str) -> Option<ErrorCode> {
    parse_str(s).err().map(|e| e.code())
}

#[test]
fn test_mov_literals() {
    assert_eq!(
        parse_str("mov x 5"),
        Ok(Statement::Move(0..3, Ident::new(4..5, "x"), Literal::Integer(5)))
    );
    assert_eq!(
        parse_str("mov s 'a b'"),
        Ok(Statement::Move(
            0..3,
            Ident::new(4..5, "s"),
            Literal::Text("a b".to_string())
        ))
    );
    assert_eq!(
        parse_str("  mov r 2.5f"),
        Ok(Statement::Move(2..5, Ident::new(6..7, "r"), Literal::Real(2.5)))
    );
    assert_eq!(
        parse_str("mov q \"it's\""),
        Ok(Statement::Move(
            0..3,
            Ident::new(4..5, "q"),
            Literal::Text("it's".to_string())
        ))
    );
}

#[test]
fn test_mov_bad_literal() {
    let e = parse_str("mov x hello").unwrap_err();
    assert_eq!(e.code(), ErrorCode::Malformed);
    assert_eq!(e.column(), 6..11);
    assert_eq!(code("mov x"), Some(ErrorCode::Malformed));
    assert_eq!(code("mov 5 x"), Some(ErrorCode::Malformed));
    assert_eq!(code("mov x 'open"), Some(ErrorCode::Malformed));
}

#[test]
fn test_mov_overflow() {
    assert_eq!(code("mov x 9223372036854775808"), Some(ErrorCode::Overflow));
    assert_eq!(
        parse_str("mov x -9223372036854775808"),
        Ok(Statement::Move(
            0..3,
            Ident::new(4..5, "x"),
            Literal::Integer(i64::MIN)
        ))
    );
}

#[test]
fn test_blank_and_remark() {
    assert_eq!(parse_str(""), Ok(Statement::Blank));
    assert_eq!(parse_str(" \t "), Ok(Statement::Blank));
    assert_eq!(parse_str("# hello"), Ok(Statement::Remark(0..7)));
    assert_eq!(parse_str("  #"), Ok(Statement::Remark(2..3)));
}

#[test]
fn test_jumps() {
    assert_eq!(
        parse_str("jmp top"),
        Ok(Statement::Jump(0..3, Condition::Always, Ident::new(4..7, "top")))
    );
    assert_eq!(
        parse_str("jge end"),
        Ok(Statement::Jump(
            0..3,
            Condition::GreaterEqual,
            Ident::new(4..7, "end")
        ))
    );
    assert_eq!(
        parse_str("run sub"),
        Ok(Statement::Call(0..3, Ident::new(4..7, "sub")))
    );
    assert_eq!(parse_str("ret"), Ok(Statement::Return(0..3)));
}

#[test]
fn test_two_operands() {
    assert_eq!(
        parse_str("ifl data  path"),
        Ok(Statement::ReadFile(
            0..3,
            Ident::new(4..8, "data"),
            Ident::new(10..14, "path")
        ))
    );
    assert_eq!(
        parse_str("sys out cmd"),
        Ok(Statement::System(
            0..3,
            Ident::new(4..7, "out"),
            Ident::new(8..11, "cmd")
        ))
    );
}

#[test]
fn test_arity() {
    let e = parse_str("ret x").unwrap_err();
    assert_eq!(e.code(), ErrorCode::Malformed);
    assert_eq!(e.column(), 4..5);
    assert_eq!(code("add x"), Some(ErrorCode::Malformed));
    assert_eq!(code("prt x y"), Some(ErrorCode::Malformed));
    assert_eq!(code("slp"), Some(ErrorCode::Malformed));
}

#[test]
fn test_unknown_mnemonic() {
    let e = parse_str("foo x").unwrap_err();
    assert_eq!(e.code(), ErrorCode::Malformed);
    assert_eq!(e.column(), 0..3);
    assert_eq!(code("MOV x 1"), Some(ErrorCode::Malformed));
    assert_eq!(code("'mov' x 1"), Some(ErrorCode::Malformed));
}

#[test]
fn test_dbg() {
    assert_eq!(
        parse_str("dbg map on"),
        Ok(Statement::Debug(0..3, Category::Map, true))
    );
    assert_eq!(
        parse_str("dbg rgx off"),
        Ok(Statement::Debug(0..3, Category::Dispatch, false))
    );
    let e = parse_str("dbg xyz on").unwrap_err();
    assert_eq!(e.code(), ErrorCode::InvalidDebugCategory);
    assert_eq!(e.column(), 4..7);
    assert_eq!(code("dbg map yes"), Some(ErrorCode::Malformed));
    assert_eq!(code("dbg map"), Some(ErrorCode::Malformed));
}

#[test]
fn test_opcode_of_statement() {
    let statement = parse_str("jle x").unwrap();
    assert_eq!(statement.opcode(), Some(Opcode::JumpLessEqual));
    assert_eq!(statement.opcode().unwrap().to_string(), "jle");
    assert_eq!(parse_str("# x").unwrap().opcode(), None);
}

#[test]
fn test_literal() {
    assert_eq!(literal("3f"), Ok(Literal::Real(3.0)));
    assert_eq!(literal("-1.25f"), Ok(Literal::Real(-1.25)));
    assert_eq!(literal("+7"), Ok(Literal::Integer(7)));
    assert_eq!(literal("''"), Ok(Literal::Text(String::new())));
    assert_eq!(literal("\"x\""), Ok(Literal::Text("x".to_string())));
    assert!(literal("'x\"").is_err());
    assert!(literal("f").is_err());
    assert!(literal("1.2.3f").is_err());
    assert!(literal("2.5").is_err());
}
