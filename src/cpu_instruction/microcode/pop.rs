use super::*;

pub fn pop(
    memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let register = cpu_instruction.operand(0)?;
    registers.get(register)?;
    let next = next_address(registers, cpu_instruction)?;
    let value = registers.stack_pull(memory)?;

    registers.set(register, value)?;
    registers.program_counter = next as usize;

    Ok(LogLine::new(
        cpu_instruction,
        format!(
            "[R{}=0x{:02x}][SP=0x{:02x}]",
            register,
            value,
            registers.stack_pointer()
        ),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu_instruction::cpu_instruction::tests::get_stuff;
    use crate::cpu_instruction::{ONE_REGISTER, POP};
    use crate::memory::AddressableIO;
    use crate::registers::STACK_POINTER;

    #[test]
    fn test_pop() {
        let cpu_instruction = CPUInstruction::new(0x00, POP, "POP", ONE_REGISTER, vec![0x02], pop);
        let (mut memory, mut registers) = get_stuff(0x00, vec![POP, 0x02]);
        memory.write_byte(0xf3, 0x2a).unwrap();
        registers.set(STACK_POINTER, 0xf3).unwrap();
        let log_line = cpu_instruction
            .execute(&mut memory, &mut registers)
            .unwrap();
        assert_eq!(0x2a, registers.get(2).unwrap());
        assert_eq!(0xf4, registers.stack_pointer());
        assert_eq!(0x02, registers.program_counter);
        assert_eq!(
            "#0x00: (46 02)    POP  R2              [R2=0x2a][SP=0xf4]",
            log_line.to_string()
        );
    }

    #[test]
    fn test_pop_empty_stack() {
        let cpu_instruction = CPUInstruction::new(0x00, POP, "POP", ONE_REGISTER, vec![0x00], pop);
        let (mut memory, mut registers) = get_stuff(0x00, vec![POP, 0x00]);
        assert_eq!(
            ExecutionError::StackUnderflow(0xf4),
            cpu_instruction
                .execute(&mut memory, &mut registers)
                .unwrap_err()
        );
        assert_eq!(0x00, registers.program_counter);
    }

    #[test]
    fn test_pop_invalid_register() {
        let cpu_instruction = CPUInstruction::new(0x00, POP, "POP", ONE_REGISTER, vec![0x09], pop);
        let (mut memory, mut registers) = get_stuff(0x00, vec![POP, 0x09]);
        memory.write_byte(0xf3, 0x2a).unwrap();
        registers.set(STACK_POINTER, 0xf3).unwrap();
        assert_eq!(
            ExecutionError::InvalidRegister(0x09),
            cpu_instruction
                .execute(&mut memory, &mut registers)
                .unwrap_err()
        );
        assert_eq!(0xf3, registers.stack_pointer());
        assert_eq!(0x00, registers.program_counter);
    }
}
