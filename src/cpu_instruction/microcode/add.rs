use super::*;

pub fn add(
    _memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let next = next_address(registers, cpu_instruction)?;
    let (register, result) = alu_store(registers, cpu_instruction)?;
    registers.program_counter = next as usize;

    Ok(LogLine::new(
        cpu_instruction,
        format!("[R{}=0x{:02x}]", register, result),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu_instruction::cpu_instruction::tests::get_stuff;
    use crate::cpu_instruction::{ADD, MUL, TWO_REGISTERS};

    #[test]
    fn test_add() {
        let cpu_instruction =
            CPUInstruction::new(0x00, ADD, "ADD", TWO_REGISTERS, vec![0x00, 0x01], add);
        let (mut memory, mut registers) = get_stuff(0x00, vec![ADD, 0x00, 0x01]);
        registers.set(0, 0x28).unwrap();
        registers.set(1, 0x0a).unwrap();
        let log_line = cpu_instruction
            .execute(&mut memory, &mut registers)
            .unwrap();
        assert_eq!("ADD".to_owned(), log_line.mnemonic);
        assert_eq!(0x32, registers.get(0).unwrap());
        assert_eq!(0x0a, registers.get(1).unwrap());
        assert_eq!(0x03, registers.program_counter);
    }

    #[test]
    fn test_add_wraps() {
        let cpu_instruction =
            CPUInstruction::new(0x00, ADD, "ADD", TWO_REGISTERS, vec![0x02, 0x02], add);
        let (mut memory, mut registers) = get_stuff(0x00, vec![ADD, 0x02, 0x02]);
        registers.set(2, 0x80).unwrap();
        cpu_instruction
            .execute(&mut memory, &mut registers)
            .unwrap();
        assert_eq!(0x00, registers.get(2).unwrap());
    }

    #[test]
    fn test_add_with_foreign_opcode() {
        // the ALU picks the operation from the opcode, not the mnemonic
        let cpu_instruction =
            CPUInstruction::new(0x00, MUL, "ADD", TWO_REGISTERS, vec![0x00, 0x01], add);
        let (mut memory, mut registers) = get_stuff(0x00, vec![MUL, 0x00, 0x01]);
        registers.set(0, 0x03).unwrap();
        registers.set(1, 0x04).unwrap();
        cpu_instruction
            .execute(&mut memory, &mut registers)
            .unwrap();
        assert_eq!(0x0c, registers.get(0).unwrap());
    }

    #[test]
    fn test_add_unsupported_operation() {
        let cpu_instruction =
            CPUInstruction::new(0x00, 0xa1, "SUB", TWO_REGISTERS, vec![0x00, 0x01], add);
        let (mut memory, mut registers) = get_stuff(0x00, vec![0xa1, 0x00, 0x01]);
        registers.set(0, 0x03).unwrap();
        assert_eq!(
            ExecutionError::UnsupportedAluOperation(0xa1),
            cpu_instruction
                .execute(&mut memory, &mut registers)
                .unwrap_err()
        );
        assert_eq!(0x03, registers.get(0).unwrap());
        assert_eq!(0x00, registers.program_counter);
    }
}
