use super::*;

pub fn push(
    memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let value = registers.get(cpu_instruction.operand(0)?)?;
    let next = next_address(registers, cpu_instruction)?;

    registers.stack_push(memory, value)?;
    registers.program_counter = next as usize;

    Ok(LogLine::new(
        cpu_instruction,
        format!("[SP=0x{:02x}]", registers.stack_pointer()),
    ))
}
