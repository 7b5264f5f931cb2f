use super::*;

pub fn prn(
    _memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let value = registers.get(cpu_instruction.operand(0)?)?;
    registers.program_counter = next_address(registers, cpu_instruction)? as usize;

    Ok(LogLine::new(cpu_instruction, format!("[OUT={}]", value))
        .with_side_effect(SideEffect::Output(value)))
}
