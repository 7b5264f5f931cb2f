use super::*;

pub fn ret(
    memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    registers.program_counter = registers.stack_pull(memory)? as usize;

    Ok(LogLine::new(
        cpu_instruction,
        format!(
            "[PC=0x{:02x}][SP=0x{:02x}]",
            registers.program_counter,
            registers.stack_pointer()
        ),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu_instruction::cpu_instruction::tests::get_stuff;
    use crate::cpu_instruction::microcode::call;
    use crate::cpu_instruction::{CALL, NO_OPERAND, ONE_REGISTER, RET};
    use crate::memory::AddressableIO;
    use crate::registers::STACK_POINTER;

    #[test]
    fn test_ret() {
        let cpu_instruction = CPUInstruction::new(0x20, RET, "RET", NO_OPERAND, vec![], ret);
        let (mut memory, mut registers) = get_stuff(0x20, vec![RET]);
        memory.write_byte(0xf3, 0x06).unwrap();
        registers.set(STACK_POINTER, 0xf3).unwrap();
        let log_line = cpu_instruction
            .execute(&mut memory, &mut registers)
            .unwrap();
        assert_eq!(0x06, registers.program_counter);
        assert_eq!(0xf4, registers.stack_pointer());
        assert_eq!(
            "#0x20: (11)       RET                  [PC=0x06][SP=0xf4]",
            log_line.to_string()
        );
    }

    #[test]
    fn test_ret_with_call() {
        let call_instruction =
            CPUInstruction::new(0x10, CALL, "CALL", ONE_REGISTER, vec![0x03], call);
        let (mut memory, mut registers) = get_stuff(0x10, vec![CALL, 0x03]);
        registers.set(3, 0x40).unwrap();
        call_instruction
            .execute(&mut memory, &mut registers)
            .unwrap();

        let ret_instruction = CPUInstruction::new(0x40, RET, "RET", NO_OPERAND, vec![], ret);
        ret_instruction
            .execute(&mut memory, &mut registers)
            .unwrap();
        assert_eq!(0x12, registers.program_counter);
        assert_eq!(0xf4, registers.stack_pointer());
    }

    #[test]
    fn test_ret_empty_stack() {
        let cpu_instruction = CPUInstruction::new(0x20, RET, "RET", NO_OPERAND, vec![], ret);
        let (mut memory, mut registers) = get_stuff(0x20, vec![RET]);
        assert_eq!(
            ExecutionError::StackUnderflow(0xf4),
            cpu_instruction
                .execute(&mut memory, &mut registers)
                .unwrap_err()
        );
        assert_eq!(0x20, registers.program_counter);
    }
}
