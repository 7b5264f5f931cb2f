mod error;
mod ram;

pub use error::MemoryError;
pub use ram::RAM;

pub const MEMMAX: usize = 0xff;
pub const MEMORY_SIZE: usize = MEMMAX + 1;

/*
 * AddressableIO
 * this trait defines the interface for all memory systems
 */
pub trait AddressableIO {
    fn read(&self, addr: usize, len: usize) -> Result<Vec<u8>, MemoryError>;
    fn write(&mut self, location: usize, data: &[u8]) -> Result<(), MemoryError>;
    fn get_size(&self) -> usize;

    fn read_byte(&self, addr: usize) -> Result<u8, MemoryError> {
        Ok(self.read(addr, 1)?[0])
    }

    fn write_byte(&mut self, addr: usize, value: u8) -> Result<(), MemoryError> {
        self.write(addr, &[value])
    }
}

/*
 * hexdump
 * One line per 8 bytes: `#0x08: 0a0b0c0d0e0f1011`
 */
pub fn hexdump(memory: &impl AddressableIO) -> Result<Vec<String>, MemoryError> {
    let bytes = memory.read(0, memory.get_size())?;

    Ok(bytes
        .chunks(8)
        .enumerate()
        .map(|(index, chunk)| format!("#0x{:02X}: {}", index * 8, hex::encode(chunk)))
        .collect())
}
