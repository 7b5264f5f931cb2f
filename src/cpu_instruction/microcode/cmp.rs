use super::*;

pub fn cmp(
    _memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let value_a = registers.get(cpu_instruction.operand(0)?)?;
    let value_b = registers.get(cpu_instruction.operand(1)?)?;
    let next = next_address(registers, cpu_instruction)?;

    match alu(cpu_instruction.opcode, value_a, value_b)? {
        AluOutcome::Comparison {
            equal,
            greater,
            less,
        } => registers.set_compare(equal, greater, less),
        AluOutcome::Value(_) => {
            return Err(ExecutionError::UnsupportedAluOperation(
                cpu_instruction.opcode,
            ))
        }
    }
    registers.program_counter = next as usize;

    Ok(LogLine::new(
        cpu_instruction,
        format!("[FL={}]", registers.format_status()),
    ))
}
