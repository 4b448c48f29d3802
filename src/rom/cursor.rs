use crate::error::RomError;
use nom::{
    IResult,
    bytes::complete::take,
};
use tracing::debug;

/// ROM bytes read so far, along with the offset of the next unread byte.
///
/// The offset only ever moves forward and never passes the end of the buffer.
#[derive(Debug)]
pub struct RomData<'a> {
    data: &'a [u8],
    offset: usize,
    trace_reads: bool,
}

impl<'a> RomData<'a> {
    /// Wrap `data` with the offset at 0.
    pub fn new(data: &'a [u8]) -> RomData<'a> {
        RomData {
            data,
            offset: 0,
            trace_reads: false,
        }
    }

    /// Emit a debug event after every successful read.
    pub fn with_trace_reads(mut self, trace_reads: bool) -> RomData<'a> {
        self.trace_reads = trace_reads;
        self
    }

    /// Return the next `size` bytes and advance past them.
    ///
    /// Fails with [`RomError::TruncatedInput`] without moving the offset if fewer than `size`
    /// bytes are left.
    pub fn read(&mut self, size: usize) -> Result<&'a [u8], RomError> {
        let rest = self.remaining();
        let data: &'a [u8] = self.data;
        let result: IResult<&'a [u8], &'a [u8]> = take(size)(&data[self.offset..]);
        let (_, chunk) = result.map_err(|_| RomError::TruncatedInput {
            requested: size,
            remaining: rest,
        })?;

        self.offset += size;
        if self.trace_reads {
            debug!(total = self.data.len(), offset = self.offset, "read {} bytes", size);
        }

        Ok(chunk)
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Number of bytes not yet read.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.offset
    }
}
