use std::error;
use std::fmt;

#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
pub enum MemoryError {
    ReadOverflow(usize, usize),  // read len, address
    WriteOverflow(usize, usize), // write len, address
    Unaddressable(usize),        // computed address that does not fit on 8 bits
}

impl fmt::Display for MemoryError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            MemoryError::ReadOverflow(read_len, addr) => write!(
                f,
                "Could not READ {} bytes at address 0x{:02X}, address max is 0x{:02X}.",
                read_len,
                addr,
                super::MEMMAX
            ),
            MemoryError::WriteOverflow(write_len, addr) => write!(
                f,
                "Could not WRITE {} bytes at address 0x{:02X}, address max is 0x{:02X}.",
                write_len,
                addr,
                super::MEMMAX
            ),
            MemoryError::Unaddressable(addr) => {
                write!(f, "Address 0x{:04X} can not be represented on 8 bits.", addr)
            }
        }
    }
}

impl error::Error for MemoryError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        None
    }
}
