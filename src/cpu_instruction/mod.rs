mod cpu_instruction;
pub mod microcode;

pub const HLT: u8 = 0b00000001;
pub const LDI: u8 = 0b10000010;
pub const PRN: u8 = 0b01000111;
pub const ADD: u8 = 0b10100000;
pub const MUL: u8 = 0b10100010;
pub const CMP: u8 = 0b10100111;
pub const PUSH: u8 = 0b01000101;
pub const POP: u8 = 0b01000110;
pub const CALL: u8 = 0b01010000;
pub const RET: u8 = 0b00010001;
pub const JMP: u8 = 0b01010100;
pub const JEQ: u8 = 0b01010101;
pub const JNE: u8 = 0b01010110;

/*
 * Opcode layout: AABCDDDD
 * AA: number of operands
 * B: ALU operation
 * C: the instruction sets the program counter itself
 * DDDD: instruction identifier
 */
pub fn operand_count(opcode: u8) -> usize {
    (opcode >> 6) as usize
}

pub fn is_alu_operation(opcode: u8) -> bool {
    opcode & 0b00100000 == 0b00100000
}

pub fn sets_program_counter(opcode: u8) -> bool {
    opcode & 0b00010000 == 0b00010000
}

pub use self::cpu_instruction::{CPUInstruction, LogLine, OperandKind, SideEffect};
pub use microcode::ExecutionError;

pub const NO_OPERAND: &[OperandKind] = &[];
pub const ONE_REGISTER: &[OperandKind] = &[OperandKind::Register];
pub const TWO_REGISTERS: &[OperandKind] = &[OperandKind::Register, OperandKind::Register];
pub const REGISTER_IMMEDIATE: &[OperandKind] = &[OperandKind::Register, OperandKind::Immediate];
