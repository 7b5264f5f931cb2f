use super::*;

pub fn ldi(
    _memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let register = cpu_instruction.operand(0)?;
    let value = cpu_instruction.operand(1)?;
    let next = next_address(registers, cpu_instruction)?;

    registers.set(register, value)?;
    registers.program_counter = next as usize;

    Ok(LogLine::new(
        cpu_instruction,
        format!("[R{}=0x{:02x}]", register, value),
    ))
}
