use super::*;

pub fn jeq(
    _memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    if registers.e_flag_is_set() {
        registers.program_counter = jump_target(registers, cpu_instruction)?;
    } else {
        registers.program_counter = next_address(registers, cpu_instruction)? as usize;
    }

    Ok(LogLine::new(
        cpu_instruction,
        format!("[PC=0x{:02x}]", registers.program_counter),
    ))
}
