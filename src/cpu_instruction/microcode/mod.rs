mod error;
pub use error::{ExecutionError, Result};

use crate::alu::{alu, AluOutcome};
use crate::cpu_instruction::{CPUInstruction, LogLine, SideEffect};
use crate::memory::MemoryError;
use crate::memory::RAM as Memory;
use crate::registers::Registers;

mod add;
mod call;
mod cmp;
mod hlt;
mod jeq;
mod jmp;
mod jne;
mod ldi;
mod mul;
mod pop;
mod prn;
mod push;
mod ret;

pub use add::add;
pub use call::call;
pub use cmp::cmp;
pub use hlt::hlt;
pub use jeq::jeq;
pub use jmp::jmp;
pub use jne::jne;
pub use ldi::ldi;
pub use mul::mul;
pub use pop::pop;
pub use prn::prn;
pub use push::push;
pub use ret::ret;

/*
 * alu_store
 * Run the instruction's ALU operation on its two register operands and
 * store the result in the first one.
 */
fn alu_store(registers: &mut Registers, cpu_instruction: &CPUInstruction) -> Result<(u8, u8)> {
    let register_a = cpu_instruction.operand(0)?;
    let value_a = registers.get(register_a)?;
    let value_b = registers.get(cpu_instruction.operand(1)?)?;

    match alu(cpu_instruction.opcode, value_a, value_b)? {
        AluOutcome::Value(result) => {
            registers.set(register_a, result)?;
            Ok((register_a, result))
        }
        AluOutcome::Comparison { .. } => Err(ExecutionError::UnsupportedAluOperation(
            cpu_instruction.opcode,
        )),
    }
}

/*
 * next_address
 * Address of the instruction that follows in memory. It must stay within the
 * address space, otherwise the instruction faults before changing anything.
 */
fn next_address(registers: &Registers, cpu_instruction: &CPUInstruction) -> Result<u8> {
    let address = registers.program_counter + cpu_instruction.size();

    u8::try_from(address).map_err(|_| MemoryError::Unaddressable(address).into())
}

fn jump_target(registers: &Registers, cpu_instruction: &CPUInstruction) -> Result<usize> {
    Ok(registers.get(cpu_instruction.operand(0)?)? as usize)
}
