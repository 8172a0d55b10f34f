use super::Val;
use crate::error;
use crate::lang::Error;
use std::cmp::Ordering;

type Result<T> = std::result::Result<T, Error>;

pub struct Operation {}

impl Operation {
    /// Numbers of one kind add. Every other pairing concatenates text,
    /// with reals rounded to one place.
    pub fn sum(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Integer(l), Integer(r)) => match l.checked_add(r) {
                Some(i) => Ok(Integer(i)),
                None => Err(error!(Overflow)),
            },
            (Real(l), Real(r)) => Ok(Real(l + r)),
            (l, r) => Ok(Text(Operation::text(&l) + &Operation::text(&r))),
        }
    }

    pub fn subtract(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Integer(l), Integer(r)) => match l.checked_sub(r) {
                Some(i) => Ok(Integer(i)),
                None => Err(error!(Overflow)),
            },
            (Real(l), Real(r)) => Ok(Real(l - r)),
            _ => Err(error!(TypeMismatch; "CAN'T APPLY SUBTRACTION ON MIXED KINDS")),
        }
    }

    pub fn multiply(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Integer(l), Integer(r)) => match l.checked_mul(r) {
                Some(i) => Ok(Integer(i)),
                None => Err(error!(Overflow)),
            },
            (Real(l), Real(r)) => Ok(Real(l * r)),
            _ => Err(error!(TypeMismatch; "CAN'T APPLY MULTIPLICATION ON MIXED KINDS")),
        }
    }

    pub fn divide(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Integer(l), Integer(r)) => match l.checked_div(r) {
                Some(i) => Ok(Integer(i)),
                None => {
                    if r == 0 {
                        Err(error!(DivisionByZero))
                    } else {
                        Err(error!(Overflow))
                    }
                }
            },
            (Real(l), Real(r)) => Ok(Real(l / r)),
            _ => Err(error!(TypeMismatch; "CAN'T APPLY DIVISION ON MIXED KINDS")),
        }
    }

    pub fn modulo(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Integer(l), Integer(r)) => match l.checked_rem(r) {
                Some(i) => Ok(Integer(i)),
                None => {
                    if r == 0 {
                        Err(error!(DivisionByZero))
                    } else {
                        Err(error!(Overflow))
                    }
                }
            },
            (Real(l), Real(r)) => Ok(Real(Operation::remainder(l, r))),
            _ => Err(error!(TypeMismatch; "CAN'T APPLY MODULO ON MIXED KINDS")),
        }
    }

    /// Numeric order for numbers of one kind, otherwise the payload text.
    pub fn compare(lhs: &Val, rhs: &Val) -> Ordering {
        use Val::*;
        match (lhs, rhs) {
            (Integer(l), Integer(r)) => l.cmp(r),
            (Real(l), Real(r)) => l.partial_cmp(r).unwrap_or(Ordering::Equal),
            (l, r) => l.payload().cmp(&r.payload()),
        }
    }

    fn text(val: &Val) -> String {
        match val {
            Val::Real(n) => format!("{:.1}", n),
            _ => val.payload(),
        }
    }

    /// IEEE 754 remainder: the quotient rounds to nearest, ties to even.
    pub fn remainder(x: f64, y: f64) -> f64 {
        let mut r = x % y;
        let twice = 2.0 * r.abs();
        let ay = y.abs();
        if twice > ay || (twice == ay && ((x - r) / y) % 2.0 != 0.0) {
            r -= ay.copysign(r);
        }
        r
    }
}
