use super::*;

fn code(r: Result<Val, crate::lang::Error>) -> Option<ErrorCode> {
    r.err().map(|e| e.code())
}

#[test]
fn test_sum() {
    use Val::*;
    assert_eq!(Operation::sum(Integer(5), Integer(3)), Ok(Integer(8)));
    assert_eq!(Operation::sum(Real(2.0), Real(2.0)), Ok(Real(4.0)));
    assert_eq!(
        Operation::sum(Text("a".to_string()), Integer(1)),
        Ok(Text("a1".to_string()))
    );
    assert_eq!(
        Operation::sum(Integer(1), Real(2.5)),
        Ok(Text("12.5".to_string()))
    );
    assert_eq!(
        Operation::sum(Real(3.0), Text("x".to_string())),
        Ok(Text("3.0x".to_string()))
    );
    assert_eq!(
        code(Operation::sum(Integer(i64::MAX), Integer(1))),
        Some(ErrorCode::Overflow)
    );
}

#[test]
fn test_mixed_kinds() {
    use Val::*;
    assert_eq!(
        code(Operation::subtract(Integer(5), Real(1.0))),
        Some(ErrorCode::TypeMismatch)
    );
    assert_eq!(
        code(Operation::multiply(Text("2".to_string()), Integer(2))),
        Some(ErrorCode::TypeMismatch)
    );
    assert_eq!(
        code(Operation::divide(Real(1.0), Integer(1))),
        Some(ErrorCode::TypeMismatch)
    );
    assert_eq!(
        code(Operation::modulo(Integer(1), Text("1".to_string()))),
        Some(ErrorCode::TypeMismatch)
    );
}

#[test]
fn test_integer_arithmetic() {
    use Val::*;
    assert_eq!(Operation::subtract(Integer(2), Integer(5)), Ok(Integer(-3)));
    assert_eq!(Operation::multiply(Integer(-4), Integer(3)), Ok(Integer(-12)));
    assert_eq!(Operation::divide(Integer(7), Integer(2)), Ok(Integer(3)));
    assert_eq!(Operation::modulo(Integer(-7), Integer(2)), Ok(Integer(-1)));
    assert_eq!(
        code(Operation::divide(Integer(1), Integer(0))),
        Some(ErrorCode::DivisionByZero)
    );
    assert_eq!(
        code(Operation::modulo(Integer(1), Integer(0))),
        Some(ErrorCode::DivisionByZero)
    );
    assert_eq!(
        code(Operation::divide(Integer(i64::MIN), Integer(-1))),
        Some(ErrorCode::Overflow)
    );
    assert_eq!(
        code(Operation::multiply(Integer(i64::MAX), Integer(2))),
        Some(ErrorCode::Overflow)
    );
}

#[test]
fn test_real_arithmetic() {
    use Val::*;
    assert_eq!(Operation::divide(Real(1.0), Real(4.0)), Ok(Real(0.25)));
    assert_eq!(
        Operation::divide(Real(1.0), Real(0.0)),
        Ok(Real(f64::INFINITY))
    );
    assert_eq!(Operation::modulo(Real(7.5), Real(2.0)), Ok(Real(-0.5)));
}

#[test]
fn test_remainder() {
    assert_eq!(Operation::remainder(5.0, 3.0), -1.0);
    assert_eq!(Operation::remainder(5.0, 2.0), 1.0);
    assert_eq!(Operation::remainder(3.0, 2.0), -1.0);
    assert_eq!(Operation::remainder(-5.0, 3.0), 1.0);
    assert_eq!(Operation::remainder(1.0, 4.0), 1.0);
}

#[test]
fn test_compare() {
    use Val::*;
    assert_eq!(Operation::compare(&Integer(2), &Integer(10)), Ordering::Less);
    assert_eq!(Operation::compare(&Real(2.5), &Real(2.5)), Ordering::Equal);
    assert_eq!(
        Operation::compare(&Text("2".to_string()), &Text("10".to_string())),
        Ordering::Greater
    );
    assert_eq!(
        Operation::compare(&Integer(2), &Text("2".to_string())),
        Ordering::Equal
    );
    assert_eq!(Operation::compare(&Real(1.5), &Integer(2)), Ordering::Less);
    assert_eq!(
        Operation::compare(&Real(f64::NAN), &Real(1.0)),
        Ordering::Equal
    );
}

#[test]
fn test_payload_and_display() {
    assert_eq!(Val::Real(4.0).payload(), "4.0");
    assert_eq!(Val::Real(0.125).payload(), "0.125");
    assert_eq!(Val::Real(0.125).to_string(), "0.1");
    assert_eq!(Val::Integer(-3).to_string(), "-3");
    assert_eq!(Val::Text("x".to_string()).kind().to_string(), "str");
    assert_eq!(Val::Real(1.0).kind(), Kind::Real);
}
