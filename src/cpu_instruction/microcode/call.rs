use super::*;

pub fn call(
    memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    registers.get(cpu_instruction.operand(0)?)?;
    let return_address = next_address(registers, cpu_instruction)?;

    registers.stack_push(memory, return_address)?;
    registers.program_counter = jump_target(registers, cpu_instruction)?;

    Ok(LogLine::new(
        cpu_instruction,
        format!(
            "[PC=0x{:02x}][SP=0x{:02x}]",
            registers.program_counter,
            registers.stack_pointer()
        ),
    ))
}
