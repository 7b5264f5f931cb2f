use super::*;

pub fn mul(
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
    use crate::cpu_instruction::{CMP, MUL, TWO_REGISTERS};

    #[test]
    fn test_mul() {
        let cpu_instruction =
            CPUInstruction::new(0x06, MUL, "MUL", TWO_REGISTERS, vec![0x00, 0x01], mul);
        let (mut memory, mut registers) = get_stuff(0x06, vec![MUL, 0x00, 0x01]);
        registers.set(0, 8).unwrap();
        registers.set(1, 9).unwrap();
        let log_line = cpu_instruction
            .execute(&mut memory, &mut registers)
            .unwrap();
        assert_eq!(72, registers.get(0).unwrap());
        assert_eq!(0x09, registers.program_counter);
        assert_eq!(
            "#0x06: (a2 00 01) MUL  R0, R1          [R0=0x48]",
            log_line.to_string()
        );
    }

    #[test]
    fn test_mul_wraps() {
        let cpu_instruction =
            CPUInstruction::new(0x00, MUL, "MUL", TWO_REGISTERS, vec![0x03, 0x04], mul);
        let (mut memory, mut registers) = get_stuff(0x00, vec![MUL, 0x03, 0x04]);
        registers.set(3, 0x20).unwrap();
        registers.set(4, 0x09).unwrap();
        cpu_instruction
            .execute(&mut memory, &mut registers)
            .unwrap();
        assert_eq!(0x20, registers.get(3).unwrap());
    }

    #[test]
    fn test_mul_with_comparison_opcode() {
        let cpu_instruction =
            CPUInstruction::new(0x00, CMP, "MUL", TWO_REGISTERS, vec![0x00, 0x01], mul);
        let (mut memory, mut registers) = get_stuff(0x00, vec![CMP, 0x00, 0x01]);
        assert_eq!(
            ExecutionError::UnsupportedAluOperation(CMP),
            cpu_instruction
                .execute(&mut memory, &mut registers)
                .unwrap_err()
        );
    }
}
