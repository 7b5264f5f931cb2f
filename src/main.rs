/*
 * This is the CLI frontend for the LS-8 library.
 */
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use ansi_term::Colour;
use anyhow::{anyhow, Context, Result};
use clap::Parser;
use log::{info, LevelFilter};
use simple_logger::SimpleLogger;

use ls8::loader::load_program;
use ls8::memory::hexdump;
use ls8::{disassemble, ExecutionConfiguration, HaltReason, Memory, OutputSink, Processor};

/// LS-8 emulator
/// This program runs an LS-8 program image, one binary byte per line,
/// and prints the values emitted by the PRN instruction.
#[derive(Debug, Parser)]
#[command(version = ls8::VERSION, about, long_about = None)]
pub struct CommandLineArguments {
    /// Program file location
    filepath: PathBuf,

    /// Stop the execution after this number of instructions
    #[arg(short, long)]
    max_steps: Option<usize>,

    /// Log every executed instruction
    #[arg(short, long)]
    trace: bool,

    /// Display the program listing instead of running it
    #[arg(short, long)]
    disassemble: bool,

    /// Display a hex dump of the memory once the execution is over
    #[arg(long)]
    dump_memory: bool,

    /// Display the processor state when it halts
    #[arg(short, long)]
    verbose: bool,
}

struct Console;

impl OutputSink for Console {
    fn emit(&mut self, value: u8) {
        println!("{}", value);
    }
}

fn main() -> Result<()> {
    let arguments = CommandLineArguments::parse();
    let level = if arguments.trace {
        LevelFilter::Debug
    } else if arguments.verbose {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    };
    SimpleLogger::new()
        .with_level(level)
        .without_timestamps()
        .init()?;

    let program = load_program(&arguments.filepath)?;
    let memory = Memory::with_program(&program).with_context(|| {
        format!(
            "program '{}' does not fit in memory",
            arguments.filepath.display()
        )
    })?;

    if arguments.disassemble {
        for cpu_instruction in disassemble(0x00, memory.program_len(), &memory)? {
            println!("{}", cpu_instruction);
        }

        return Ok(());
    }

    let stop_flag = Arc::new(AtomicBool::new(false));
    let handler_flag = stop_flag.clone();
    ctrlc::set_handler(move || handler_flag.store(true, Ordering::SeqCst))?;

    let mut configuration = ExecutionConfiguration::default().with_stop_flag(stop_flag);
    if let Some(max_steps) = arguments.max_steps {
        configuration = configuration.with_max_steps(max_steps);
    }

    let mut processor = Processor::new(memory);
    let reason = processor.run(&configuration, &mut Console);
    info!("{:?}", processor.registers());

    if arguments.dump_memory {
        for line in hexdump(processor.memory())? {
            println!("{}", line);
        }
    }

    match reason {
        HaltReason::Normal => {
            if arguments.verbose {
                eprintln!(
                    "{}",
                    Colour::Green.paint(format!("halted after {} steps", processor.steps()))
                );
            }

            Ok(())
        }
        HaltReason::Fault(e) => Err(anyhow!(
            "{}",
            Colour::Red.paint(format!(
                "fault at PC=#0x{:02X}: {}",
                processor.registers().program_counter,
                e
            ))
        )),
        HaltReason::StepLimitReached(limit) => Err(anyhow!(
            "{}",
            Colour::Yellow.paint(format!("stopped after {} steps", limit))
        )),
        HaltReason::Interrupted => Err(anyhow!(
            "{}",
            Colour::Yellow.paint(format!("interrupted after {} steps", processor.steps()))
        )),
    }
}
