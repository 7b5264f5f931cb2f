use crate::cpu_instruction::microcode::Result;
use crate::cpu_instruction::CPUInstruction;
use crate::memory::RAM as Memory;
use crate::processing_unit::resolve_opcode;

/*
 * disassemble
 * Decode the instructions laid out from `start` up to `end` (excluded)
 * without executing them.
 */
pub fn disassemble(start: usize, end: usize, memory: &Memory) -> Result<Vec<CPUInstruction>> {
    let mut output: Vec<CPUInstruction> = vec![];
    let mut address = start;

    while address < end {
        let cpu_instruction = resolve_opcode(address, memory)?;
        address += cpu_instruction.size();
        output.push(cpu_instruction);
    }

    Ok(output)
}
