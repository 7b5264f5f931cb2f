use super::*;
use range_map::Range;
use std::fmt;

pub struct RAM {
    ram: Box<[u8; MEMORY_SIZE]>,
    program_range: Option<Range<usize>>,
}

impl Default for RAM {
    fn default() -> Self {
        Self {
            ram: Box::new([0x00; MEMORY_SIZE]),
            program_range: None,
        }
    }
}

impl RAM {
    pub fn with_program(program: &[u8]) -> Result<Self, MemoryError> {
        let mut ram = Self::default();
        ram.load(program)?;

        Ok(ram)
    }

    /*
     * load
     * Write a program image at address 0 and remember the address range it
     * occupies so the stack can not silently grow into it.
     */
    pub fn load(&mut self, program: &[u8]) -> Result<(), MemoryError> {
        self.write(0x00, program)?;
        self.program_range = match program.len() {
            0 => None,
            len => Some(Range::new(0, len - 1)),
        };

        Ok(())
    }

    pub fn program_len(&self) -> usize {
        self.program_range
            .as_ref()
            .map(|range| range.end + 1)
            .unwrap_or(0)
    }

    pub fn is_program_address(&self, addr: usize) -> bool {
        self.program_range
            .as_ref()
            .map(|range| range.contains(addr))
            .unwrap_or(false)
    }
}

impl AddressableIO for RAM {
    fn read(&self, addr: usize, len: usize) -> Result<Vec<u8>, MemoryError> {
        if self.ram.len() >= addr + len {
            Ok(self.ram[addr..addr + len].to_vec())
        } else {
            Err(MemoryError::ReadOverflow(len, addr))
        }
    }

    fn write(&mut self, location: usize, data: &[u8]) -> Result<(), MemoryError> {
        if location + data.len() > self.ram.len() {
            Err(MemoryError::WriteOverflow(data.len(), location))
        } else {
            self.ram[location..location + data.len()].copy_from_slice(data);

            Ok(())
        }
    }

    fn get_size(&self) -> usize {
        self.ram.len()
    }
}

impl fmt::Debug for RAM {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.program_range.as_ref() {
            Some(range) => write!(
                f,
                "RAM {} bytes, program #0x{:02X} → #0x{:02X}",
                self.get_size(),
                range.start,
                range.end
            ),
            None => write!(f, "RAM {} bytes, no program", self.get_size()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_program() {
        let ram = RAM::with_program(&[0x82, 0x00, 0x08, 0x01]).unwrap();
        assert_eq!(vec![0x82, 0x00, 0x08, 0x01], ram.read(0x00, 4).unwrap());
        assert_eq!(4, ram.program_len());
        assert!(ram.is_program_address(0x00));
        assert!(ram.is_program_address(0x03));
        assert!(!ram.is_program_address(0x04));
        assert!(!ram.is_program_address(0xf3));
    }

    #[test]
    fn test_empty_program() {
        let ram = RAM::with_program(&[]).unwrap();
        assert_eq!(0, ram.program_len());
        assert!(!ram.is_program_address(0x00));
    }

    #[test]
    fn test_program_too_large() {
        let program = vec![0x01; MEMORY_SIZE + 1];
        assert_eq!(
            MemoryError::WriteOverflow(MEMORY_SIZE + 1, 0x00),
            RAM::with_program(&program).unwrap_err()
        );
    }

    #[test]
    fn test_write_is_indexed() {
        let mut ram = RAM::default();
        ram.write(0x10, &[0x05, 0x05]).unwrap();
        ram.write(0x11, &[0x07]).unwrap();
        assert_eq!(vec![0x05, 0x07], ram.read(0x10, 2).unwrap());
    }
}
