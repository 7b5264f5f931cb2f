use super::cpu_instruction::{ADD, CMP, MUL};
use std::error;
use std::fmt;

#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
pub enum AluError {
    UnsupportedOperation(u8),
}

impl fmt::Display for AluError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            AluError::UnsupportedOperation(opcode) => {
                write!(f, "unsupported ALU operation for opcode 0x{:02x}", opcode)
            }
        }
    }
}

impl error::Error for AluError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        None
    }
}

#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
pub enum AluOperation {
    Add,
    Mul,
    Cmp,
}

#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
pub enum AluOutcome {
    Value(u8),
    Comparison { equal: bool, greater: bool, less: bool },
}

impl TryFrom<u8> for AluOperation {
    type Error = AluError;

    fn try_from(opcode: u8) -> Result<Self, Self::Error> {
        match opcode {
            ADD => Ok(AluOperation::Add),
            MUL => Ok(AluOperation::Mul),
            CMP => Ok(AluOperation::Cmp),
            _ => Err(AluError::UnsupportedOperation(opcode)),
        }
    }
}

impl AluOperation {
    pub fn apply(&self, value_a: u8, value_b: u8) -> AluOutcome {
        match *self {
            AluOperation::Add => AluOutcome::Value(value_a.wrapping_add(value_b)),
            AluOperation::Mul => AluOutcome::Value(value_a.wrapping_mul(value_b)),
            AluOperation::Cmp => AluOutcome::Comparison {
                equal: value_a == value_b,
                greater: value_a > value_b,
                less: value_a < value_b,
            },
        }
    }
}

pub fn alu(opcode: u8, value_a: u8, value_b: u8) -> Result<AluOutcome, AluError> {
    Ok(AluOperation::try_from(opcode)?.apply(value_a, value_b))
}
