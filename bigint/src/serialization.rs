use std::io::{Error as IoError, ErrorKind, Read, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::big_int::BigInt;
use crate::sign::Sign;

pub trait WriterTo {
    fn write_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()>;
}

pub trait ReaderFrom {
    fn read_from<R: Read>(&mut self, reader: &mut R) -> std::io::Result<()>;
}

impl WriterTo for BigInt {
    fn write_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        let sig: usize = self.significant_words();
        writer.write_u8(self.sign() as u8)?;
        writer.write_u64::<LittleEndian>(sig as u64)?;
        for i in 0..sig {
            writer.write_u64::<LittleEndian>(self.mag[i])?;
        }
        Ok(())
    }
}

impl ReaderFrom for BigInt {
    fn read_from<R: Read>(&mut self, reader: &mut R) -> std::io::Result<()> {
        let sign: u8 = reader.read_u8()?;
        if sign > 1 {
            return Err(IoError::new(
                ErrorKind::InvalidData,
                format!("invalid sign tag {}", sign),
            ));
        }
        let sig: usize = reader.read_u64::<LittleEndian>()? as usize;
        self.set_zero();
        // the declared count alone never allocates: growth tracks the words
        // actually delivered, so a truncated or hostile stream fails first
        for i in 0..sig {
            let w: u64 = reader.read_u64::<LittleEndian>()?;
            self.grow_to(i + 1)
                .map_err(|e| IoError::new(ErrorKind::OutOfMemory, e.to_string()))?;
            self.mag[i] = w;
        }
        self.sign = Sign::from_u8(sign);
        self.canonicalize();
        Ok(())
    }
}
