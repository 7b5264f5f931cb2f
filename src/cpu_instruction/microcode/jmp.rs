use super::*;

pub fn jmp(
    _memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    registers.program_counter = jump_target(registers, cpu_instruction)?;

    Ok(LogLine::new(
        cpu_instruction,
        format!("[PC=0x{:02x}]", registers.program_counter),
    ))
}
