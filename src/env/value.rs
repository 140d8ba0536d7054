use std::fmt;
use std::fmt::{Display, Formatter};

/// A dynamically typed value crossing the guest/host bridge.
///
/// Only scalar values cross the bridge; there is no object graph here.
/// Whatever the guest passes is forwarded to the host untouched, and
/// whatever the host returns surfaces to the guest untouched.
#[derive(Clone, PartialEq)]
pub enum GuestValue {
    Undefined,
    Null,
    Boolean(bool),
    Number(GuestNumber),
    String(String),
}

impl Display for GuestValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            GuestValue::Undefined => write!(f, "undefined"),
            GuestValue::Null => write!(f, "null"),
            GuestValue::Boolean(b) => write!(f, "bool({})", b),
            GuestValue::Number(n) => write!(f, "{}", n),
            GuestValue::String(s) => write!(f, "\"{}\"", s),
        }
    }
}

impl fmt::Debug for GuestValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            GuestValue::Undefined => write!(f, "GuestValue::Undefined"),
            GuestValue::Null => write!(f, "GuestValue::Null"),
            GuestValue::Boolean(b) => write!(f, "GuestValue::Boolean({})", b),
            GuestValue::Number(n) => write!(f, "GuestValue::Number({:?})", n),
            GuestValue::String(s) => write!(f, "GuestValue::String({:?})", s),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GuestNumber {
    Integer(i64),
    Float(f64),
}

impl Display for GuestNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            GuestNumber::Integer(i) => write!(f, "{}", i),
            GuestNumber::Float(nf) => write!(f, "{}", nf),
        }
    }
}
