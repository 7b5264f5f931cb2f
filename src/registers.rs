use super::memory::RAM as Memory;
use super::memory::{AddressableIO, MemoryError};
use std::error;
use std::fmt;
/*
 * LS-8 registers
 * R0 to R7 are 8 bits general purpose registers.
 * R7 is the stack pointer, set at 0xf4 at start. The stack grows downward
 * and shares the 256 bytes address space with the program.
 * flags register (00000LGE):
 * bit 2: Less-than flag
 * bit 1: Greater-than flag
 * bit 0: Equal flag
 *
 * program counter: address of the next opcode to fetch.
 */
pub const REGISTER_COUNT: usize = 8;
pub const STACK_POINTER: u8 = 7;
pub const STACK_TOP: u8 = 0xf4;

#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
pub enum RegisterError {
    InvalidIndex(u8),
    StackOverflow(usize),  // address the stack pointer would reach
    StackUnderflow(usize), // stack pointer when the pull was attempted
    Memory(MemoryError),
}

impl fmt::Display for RegisterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            RegisterError::InvalidIndex(index) => {
                write!(f, "there is no register R{}, registers are R0 to R7", index)
            }
            RegisterError::StackOverflow(addr) => {
                write!(f, "stack overflow, stack pointer would reach #0x{:02X}", addr)
            }
            RegisterError::StackUnderflow(addr) => {
                write!(f, "stack underflow, nothing to pull at #0x{:02X}", addr)
            }
            RegisterError::Memory(e) => write!(f, "memory error during stack operation: {}", e),
        }
    }
}

impl error::Error for RegisterError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        None
    }
}

impl std::convert::From<MemoryError> for RegisterError {
    fn from(err: MemoryError) -> RegisterError {
        RegisterError::Memory(err)
    }
}

pub struct Registers {
    registers: [u8; REGISTER_COUNT],
    pub flags: u8,
    pub program_counter: usize,
}

impl Default for Registers {
    fn default() -> Self {
        Self::new(0x00)
    }
}

impl Registers {
    pub fn new(init_address: usize) -> Registers {
        let mut registers = [0x00; REGISTER_COUNT];
        registers[STACK_POINTER as usize] = STACK_TOP;

        Registers {
            registers,
            flags: 0b00000000,
            program_counter: init_address,
        }
    }

    pub fn get(&self, index: u8) -> Result<u8, RegisterError> {
        self.registers
            .get(index as usize)
            .copied()
            .ok_or(RegisterError::InvalidIndex(index))
    }

    pub fn set(&mut self, index: u8, value: u8) -> Result<(), RegisterError> {
        let register = self
            .registers
            .get_mut(index as usize)
            .ok_or(RegisterError::InvalidIndex(index))?;
        *register = value;

        Ok(())
    }

    pub fn stack_pointer(&self) -> u8 {
        self.registers[STACK_POINTER as usize]
    }

    fn set_stack_pointer(&mut self, value: u8) {
        self.registers[STACK_POINTER as usize] = value;
    }

    pub fn stack_push(&mut self, memory: &mut Memory, byte: u8) -> Result<(), RegisterError> {
        let sp = self
            .stack_pointer()
            .checked_sub(1)
            .ok_or(RegisterError::StackOverflow(0))?;

        if memory.is_program_address(sp as usize) {
            return Err(RegisterError::StackOverflow(sp as usize));
        }

        memory.write_byte(sp as usize, byte)?;
        self.set_stack_pointer(sp);

        Ok(())
    }

    pub fn stack_pull(&mut self, memory: &Memory) -> Result<u8, RegisterError> {
        let sp = self.stack_pointer();

        if sp >= STACK_TOP {
            return Err(RegisterError::StackUnderflow(sp as usize));
        }

        let byte = memory.read_byte(sp as usize)?;
        self.set_stack_pointer(sp + 1);

        Ok(byte)
    }

    pub fn set_compare(&mut self, equal: bool, greater: bool, less: bool) {
        self.flags = (less as u8) << 2 | (greater as u8) << 1 | equal as u8;
    }

    pub fn e_flag_is_set(&self) -> bool {
        self.flags & 0b00000001 == 0b00000001
    }

    pub fn g_flag_is_set(&self) -> bool {
        self.flags & 0b00000010 == 0b00000010
    }

    pub fn l_flag_is_set(&self) -> bool {
        self.flags & 0b00000100 == 0b00000100
    }

    pub fn format_status(&self) -> String {
        format!(
            "{}{}{}",
            if self.l_flag_is_set() { "L" } else { "l" },
            if self.g_flag_is_set() { "G" } else { "g" },
            if self.e_flag_is_set() { "E" } else { "e" },
        )
    }
}

impl fmt::Debug for Registers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let registers = self
            .registers
            .iter()
            .enumerate()
            .map(|(index, value)| format!("R{}:0x{:02x}", index, value))
            .collect::<Vec<String>>()
            .join(", ");

        write!(
            f,
            "Registers [{} | PC:0x{:02x} | FL:{}]",
            registers,
            self.program_counter,
            self.format_status()
        )
    }
}
