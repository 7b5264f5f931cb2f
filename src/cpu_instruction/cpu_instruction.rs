use super::microcode::Result as MicrocodeResult;
use super::microcode::ExecutionError;
use crate::memory::RAM as Memory;
use crate::registers::Registers;
use std::fmt;

pub type BoxedMicrocode =
    Box<dyn Fn(&mut Memory, &mut Registers, &CPUInstruction) -> MicrocodeResult<LogLine>>;

#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
pub enum OperandKind {
    Register,
    Immediate,
}

#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
pub enum SideEffect {
    Output(u8),
    Halt,
}

fn format_bytes(opcode: u8, operands: &[u8]) -> String {
    let bytes = std::iter::once(opcode)
        .chain(operands.iter().copied())
        .map(|byte| format!("{:02x}", byte))
        .collect::<Vec<String>>();

    format!("({})", bytes.join(" "))
}

fn format_operands(kinds: &[OperandKind], operands: &[u8]) -> String {
    kinds
        .iter()
        .zip(operands.iter())
        .map(|(kind, value)| match kind {
            OperandKind::Register => format!("R{}", value),
            OperandKind::Immediate => format!("#0x{:02x}", value),
        })
        .collect::<Vec<String>>()
        .join(", ")
}

pub struct CPUInstruction {
    pub address: usize,
    pub opcode: u8,
    pub mnemonic: String,
    pub operand_kinds: &'static [OperandKind],
    pub operands: Vec<u8>,
    pub microcode: BoxedMicrocode,
}

impl CPUInstruction {
    pub fn new(
        address: usize,
        opcode: u8,
        mnemonic: &str,
        operand_kinds: &'static [OperandKind],
        operands: Vec<u8>,
        microcode: impl Fn(&mut Memory, &mut Registers, &CPUInstruction) -> MicrocodeResult<LogLine>
            + 'static,
    ) -> CPUInstruction {
        CPUInstruction {
            address,
            opcode,
            mnemonic: mnemonic.to_owned(),
            operand_kinds,
            operands,
            microcode: Box::new(microcode),
        }
    }

    pub fn execute(
        &self,
        memory: &mut Memory,
        registers: &mut Registers,
    ) -> MicrocodeResult<LogLine> {
        (self.microcode)(memory, registers, self)
    }

    pub fn operand(&self, position: usize) -> MicrocodeResult<u8> {
        self.operands
            .get(position)
            .copied()
            .ok_or(ExecutionError::MissingOperand(self.address, position))
    }

    /*
     * size
     * opcode plus operands, this is how far the program counter moves for
     * instructions that do not set it themselves.
     */
    pub fn size(&self) -> usize {
        1 + self.operands.len()
    }

    fn text(&self) -> String {
        format!(
            "#0x{:02X}: {: <11}{: <5}{: <16}",
            self.address,
            format_bytes(self.opcode, &self.operands),
            self.mnemonic,
            format_operands(self.operand_kinds, &self.operands)
        )
    }
}

impl fmt::Display for CPUInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text().trim_end())
    }
}

impl fmt::Debug for CPUInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CPUInstruction {{ {} }}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub address: usize,
    pub opcode: u8,
    pub mnemonic: String,
    pub text: String,
    pub outcome: String,
    pub side_effect: Option<SideEffect>,
}

impl LogLine {
    pub fn new(cpu_instruction: &CPUInstruction, outcome: String) -> LogLine {
        LogLine {
            address: cpu_instruction.address,
            opcode: cpu_instruction.opcode,
            mnemonic: cpu_instruction.mnemonic.clone(),
            text: cpu_instruction.text(),
            outcome,
            side_effect: None,
        }
    }

    pub fn with_side_effect(self, side_effect: SideEffect) -> LogLine {
        LogLine {
            side_effect: Some(side_effect),
            ..self
        }
    }
}

impl fmt::Display for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format!("{}{}", self.text, self.outcome).trim_end())
    }
}
