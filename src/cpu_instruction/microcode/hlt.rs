use super::*;

pub fn hlt(
    _memory: &mut Memory,
    _registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    Ok(LogLine::new(cpu_instruction, String::new()).with_side_effect(SideEffect::Halt))
}
