use crate::alu::AluError;
use crate::memory::MemoryError;
use crate::registers::RegisterError;
use std::error;
use std::fmt;

#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
pub enum ExecutionError {
    InvalidOpcode(u8, usize), // opcode, address
    AddressOutOfRange(MemoryError),
    InvalidRegister(u8),
    UnsupportedAluOperation(u8),
    StackOverflow(usize),
    StackUnderflow(usize),
    MissingOperand(usize, usize), // instruction address, operand position
}

pub type Result<T> = std::result::Result<T, ExecutionError>;

impl fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ExecutionError::InvalidOpcode(opcode, addr) => {
                write!(f, "invalid opcode 0x{:02x} at address #0x{:02X}", opcode, addr)
            }
            ExecutionError::AddressOutOfRange(e) => write!(f, "address out of range: {}", e),
            ExecutionError::InvalidRegister(index) => {
                write!(f, "invalid register R{}, registers are R0 to R7", index)
            }
            ExecutionError::UnsupportedAluOperation(opcode) => {
                write!(f, "unsupported ALU operation for opcode 0x{:02x}", opcode)
            }
            ExecutionError::StackOverflow(addr) => {
                write!(f, "stack overflow, stack pointer would reach #0x{:02X}", addr)
            }
            ExecutionError::StackUnderflow(addr) => {
                write!(f, "stack underflow, stack is empty at #0x{:02X}", addr)
            }
            ExecutionError::MissingOperand(addr, position) => write!(
                f,
                "instruction at address #0x{:02X} has no operand #{}",
                addr, position
            ),
        }
    }
}

impl error::Error for ExecutionError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        None
    }
}

impl std::convert::From<MemoryError> for ExecutionError {
    fn from(err: MemoryError) -> ExecutionError {
        ExecutionError::AddressOutOfRange(err)
    }
}

impl std::convert::From<AluError> for ExecutionError {
    fn from(err: AluError) -> ExecutionError {
        match err {
            AluError::UnsupportedOperation(opcode) => ExecutionError::UnsupportedAluOperation(opcode),
        }
    }
}

impl std::convert::From<RegisterError> for ExecutionError {
    fn from(err: RegisterError) -> ExecutionError {
        match err {
            RegisterError::InvalidIndex(index) => ExecutionError::InvalidRegister(index),
            RegisterError::StackOverflow(addr) => ExecutionError::StackOverflow(addr),
            RegisterError::StackUnderflow(addr) => ExecutionError::StackUnderflow(addr),
            RegisterError::Memory(e) => ExecutionError::AddressOutOfRange(e),
        }
    }
}
