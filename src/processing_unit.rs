use super::cpu_instruction::microcode::{self, ExecutionError, Result as MicrocodeResult};
use super::cpu_instruction::*;
use super::memory::RAM as Memory;
use super::memory::{AddressableIO, MemoryError};
use super::registers::Registers;
use log::{debug, info, warn};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

type Microcode = fn(&mut Memory, &mut Registers, &CPUInstruction) -> MicrocodeResult<LogLine>;

#[derive(Clone, Copy)]
pub struct OpcodeDefinition {
    pub mnemonic: &'static str,
    pub operand_kinds: &'static [OperandKind],
    pub microcode: Microcode,
}

impl OpcodeDefinition {
    fn new(
        mnemonic: &'static str,
        operand_kinds: &'static [OperandKind],
        microcode: Microcode,
    ) -> Self {
        Self {
            mnemonic,
            operand_kinds,
            microcode,
        }
    }
}

/*
 * lookup
 * The dispatch table. Any byte that is not listed here, 0x00 included, is
 * not an instruction.
 */
pub fn lookup(opcode: u8) -> Option<OpcodeDefinition> {
    let definition = match opcode {
        HLT => OpcodeDefinition::new("HLT", NO_OPERAND, microcode::hlt),
        LDI => OpcodeDefinition::new("LDI", REGISTER_IMMEDIATE, microcode::ldi),
        PRN => OpcodeDefinition::new("PRN", ONE_REGISTER, microcode::prn),
        ADD => OpcodeDefinition::new("ADD", TWO_REGISTERS, microcode::add),
        MUL => OpcodeDefinition::new("MUL", TWO_REGISTERS, microcode::mul),
        CMP => OpcodeDefinition::new("CMP", TWO_REGISTERS, microcode::cmp),
        PUSH => OpcodeDefinition::new("PUSH", ONE_REGISTER, microcode::push),
        POP => OpcodeDefinition::new("POP", ONE_REGISTER, microcode::pop),
        CALL => OpcodeDefinition::new("CALL", ONE_REGISTER, microcode::call),
        RET => OpcodeDefinition::new("RET", NO_OPERAND, microcode::ret),
        JMP => OpcodeDefinition::new("JMP", ONE_REGISTER, microcode::jmp),
        JEQ => OpcodeDefinition::new("JEQ", ONE_REGISTER, microcode::jeq),
        JNE => OpcodeDefinition::new("JNE", ONE_REGISTER, microcode::jne),
        _ => return None,
    };

    Some(definition)
}

pub fn resolve_opcode(address: usize, memory: &Memory) -> MicrocodeResult<CPUInstruction> {
    let opcode = memory.read_byte(address)?;
    let definition = lookup(opcode).ok_or(ExecutionError::InvalidOpcode(opcode, address))?;
    let operands = memory.read(address + 1, definition.operand_kinds.len())?;

    Ok(CPUInstruction::new(
        address,
        opcode,
        definition.mnemonic,
        definition.operand_kinds,
        operands,
        definition.microcode,
    ))
}

/*
 * OutputSink
 * Receives the values printed by PRN, in execution order.
 */
pub trait OutputSink {
    fn emit(&mut self, value: u8);
}

impl OutputSink for Vec<u8> {
    fn emit(&mut self, value: u8) {
        self.push(value);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HaltReason {
    Normal,
    Fault(ExecutionError),
    StepLimitReached(usize),
    Interrupted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessorState {
    Fetching,
    Dispatching(u8),
    Halted(HaltReason),
}

#[derive(Debug, Default, Clone)]
pub struct ExecutionConfiguration {
    max_steps: Option<usize>,
    stop_flag: Option<Arc<AtomicBool>>,
}

impl ExecutionConfiguration {
    pub fn with_max_steps(self, max_steps: usize) -> Self {
        Self {
            max_steps: Some(max_steps),
            ..self
        }
    }

    pub fn with_stop_flag(self, stop_flag: Arc<AtomicBool>) -> Self {
        Self {
            stop_flag: Some(stop_flag),
            ..self
        }
    }

    pub fn max_steps(&self) -> Option<usize> {
        self.max_steps
    }

    fn is_stopped(&self) -> bool {
        self.stop_flag
            .as_ref()
            .map(|flag| flag.load(Ordering::SeqCst))
            .unwrap_or(false)
    }
}

#[derive(Debug)]
pub struct Processor {
    memory: Memory,
    registers: Registers,
    state: ProcessorState,
    steps: usize,
}

impl Processor {
    pub fn new(memory: Memory) -> Self {
        Self {
            memory,
            registers: Registers::new(0x00),
            state: ProcessorState::Fetching,
            steps: 0,
        }
    }

    pub fn from_program(program: &[u8]) -> Result<Self, MemoryError> {
        Ok(Self::new(Memory::with_program(program)?))
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn registers(&self) -> &Registers {
        &self.registers
    }

    pub fn registers_mut(&mut self) -> &mut Registers {
        &mut self.registers
    }

    pub fn state(&self) -> ProcessorState {
        self.state
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn is_halted(&self) -> bool {
        matches!(self.state, ProcessorState::Halted(_))
    }

    fn halt(&mut self, reason: HaltReason) {
        match reason {
            HaltReason::Normal => info!("processor halted after {} steps", self.steps),
            HaltReason::Fault(e) => warn!("processor fault after {} steps: {}", self.steps, e),
            HaltReason::StepLimitReached(limit) => warn!("step limit of {} reached", limit),
            HaltReason::Interrupted => warn!("execution interrupted after {} steps", self.steps),
        }
        self.state = ProcessorState::Halted(reason);
    }

    fn fault(&mut self, error: ExecutionError) -> ExecutionError {
        self.halt(HaltReason::Fault(error));

        error
    }

    /*
     * step
     * One fetch → dispatch → execute cycle. The microcode is responsible for
     * moving the program counter. Any error halts the processor.
     */
    pub fn step(&mut self, sink: &mut dyn OutputSink) -> MicrocodeResult<Option<LogLine>> {
        if self.is_halted() {
            return Ok(None);
        }

        let address = self.registers.program_counter;
        let opcode = self
            .memory
            .read_byte(address)
            .map_err(|e| self.fault(e.into()))?;
        self.state = ProcessorState::Dispatching(opcode);

        let cpu_instruction =
            resolve_opcode(address, &self.memory).map_err(|e| self.fault(e))?;
        let log_line = cpu_instruction
            .execute(&mut self.memory, &mut self.registers)
            .map_err(|e| self.fault(e))?;
        self.steps += 1;
        debug!("{}", log_line);

        match log_line.side_effect {
            Some(SideEffect::Output(value)) => sink.emit(value),
            Some(SideEffect::Halt) => {
                self.halt(HaltReason::Normal);
                return Ok(Some(log_line));
            }
            None => {}
        }
        self.state = ProcessorState::Fetching;

        Ok(Some(log_line))
    }

    pub fn run_with(
        &mut self,
        configuration: &ExecutionConfiguration,
        sink: &mut dyn OutputSink,
        mut on_step: impl FnMut(LogLine),
    ) -> HaltReason {
        let start = self.steps;

        loop {
            if let ProcessorState::Halted(reason) = self.state {
                break reason;
            }

            if configuration.is_stopped() {
                self.halt(HaltReason::Interrupted);
                continue;
            }

            if let Some(limit) = configuration.max_steps {
                if self.steps - start >= limit {
                    self.halt(HaltReason::StepLimitReached(limit));
                    continue;
                }
            }

            if let Ok(Some(log_line)) = self.step(sink) {
                on_step(log_line);
            }
        }
    }

    pub fn run(
        &mut self,
        configuration: &ExecutionConfiguration,
        sink: &mut dyn OutputSink,
    ) -> HaltReason {
        self.run_with(configuration, sink, |_| {})
    }
}
