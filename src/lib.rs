mod alu;
mod cpu_instruction;
mod disassembler;
pub mod loader;
pub mod memory;
mod processing_unit;
mod registers;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use alu::{alu, AluError, AluOperation, AluOutcome};
pub use cpu_instruction::{
    is_alu_operation, operand_count, sets_program_counter, CPUInstruction, ExecutionError, LogLine,
    OperandKind, SideEffect, ADD, CALL, CMP, HLT, JEQ, JMP, JNE, LDI, MUL, POP, PRN, PUSH, RET,
};
pub use disassembler::disassemble;
pub use memory::AddressableIO;
pub use memory::RAM as Memory;
pub use processing_unit::*;
pub use registers::{RegisterError, Registers, STACK_POINTER, STACK_TOP};

/*
 * execute
 * Run the processor until it halts and keep the log line of every executed
 * instruction.
 */
pub fn execute(
    processor: &mut Processor,
    configuration: &ExecutionConfiguration,
    sink: &mut dyn OutputSink,
) -> (Vec<LogLine>, HaltReason) {
    let mut logs: Vec<LogLine> = vec![];
    let reason = processor.run_with(configuration, sink, |log_line| logs.push(log_line));

    (logs, reason)
}
