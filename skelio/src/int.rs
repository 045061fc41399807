use crate::error::{Error, Result};
use std::io::{self, Read, Write};

/// Width in bytes of every integer in the skeleton formats.
pub const INT_SIZE: usize = 8;

fn short_read(error: io::Error, what: &'static str) -> Error {
	if error.kind() == io::ErrorKind::UnexpectedEof {
		Error::ShortRead { what }
	} else {
		Error::Io(error)
	}
}

/// Reads one native-endian integer. `what` names the field for error reporting.
pub fn read_int<R>(input: &mut R, what: &'static str) -> Result<i64> where R: Read {
	let mut bytes = [0u8; INT_SIZE];
	input.read_exact(&mut bytes).map_err(|e| short_read(e, what))?;

	Ok(i64::from_ne_bytes(bytes))
}

/// Reads `count` native-endian integers.
pub fn read_ints<R>(input: &mut R, count: usize, what: &'static str) -> Result<Vec<i64>> where R: Read {
	let len = count.checked_mul(INT_SIZE).ok_or(Error::ShortRead { what })?;

	// Grow as data arrives so a corrupt count cannot force a huge allocation up front.
	let mut bytes = Vec::new();
	input.by_ref().take(len as u64).read_to_end(&mut bytes)?;

	if bytes.len() != len {
		return Err(Error::ShortRead { what });
	}

	Ok(bytes.chunks_exact(INT_SIZE).map(|chunk| {
		let mut word = [0u8; INT_SIZE];
		word.copy_from_slice(chunk);

		i64::from_ne_bytes(word)
	}).collect())
}

/// Reads a non-negative count.
pub(crate) fn read_count<R>(input: &mut R, what: &'static str) -> Result<usize> where R: Read {
	let value = read_int(input, what)?;

	if value < 0 {
		return Err(Error::Negative { what, value });
	}

	Ok(value as usize)
}

pub fn write_int<W>(out: &mut W, value: i64) -> Result<()> where W: Write {
	out.write_all(&value.to_ne_bytes())?;

	Ok(())
}

pub fn write_ints<W>(out: &mut W, values: &[i64]) -> Result<()> where W: Write {
	let mut bytes = Vec::with_capacity(values.len() * INT_SIZE);

	for value in values {
		bytes.extend_from_slice(&value.to_ne_bytes());
	}

	out.write_all(&bytes)?;

	Ok(())
}
