use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context};
use pest::Parser;
use pest_derive::Parser;

pub type AppResult<T> = anyhow::Result<T>;

#[derive(Parser)]
#[grammar = "../rules.pest"]
struct ProgramParser;

/*
 * parse_program
 * Turn the textual program image into the bytes to be written in memory
 * from address 0.
 */
pub fn parse_program(source: &str) -> AppResult<Vec<u8>> {
    let program = ProgramParser::parse(Rule::program, source)
        .map_err(|e| anyhow!("invalid program image:\n{}", e))?
        .next()
        .ok_or_else(|| anyhow!("empty parse result for program image"))?;

    let mut bytes: Vec<u8> = vec![];

    for pair in program.into_inner() {
        match pair.as_rule() {
            Rule::byte => {
                let (line, _) = pair.as_span().start_pos().line_col();
                let byte = u8::from_str_radix(pair.as_str(), 2).with_context(|| {
                    format!("line {}: '{}' is not a byte", line, pair.as_str())
                })?;
                bytes.push(byte);
            }
            Rule::EOI => {}
            rule => return Err(anyhow!("unexpected rule {:?} in program image", rule)),
        }
    }

    Ok(bytes)
}

pub fn load_program(path: &Path) -> AppResult<Vec<u8>> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("could not read program file '{}'", path.display()))?;

    parse_program(&source).with_context(|| format!("could not load '{}'", path.display()))
}
