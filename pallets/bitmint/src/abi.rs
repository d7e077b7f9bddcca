//! Wire encoding for call results and arguments.
//!
//! Integers are 32-byte big-endian words. Strings and byte blobs carry a 4-byte
//! big-endian length prefix followed by the raw bytes.

use sp_core::U256;
use sp_std::prelude::*;

use crate::ContractError;

/// Width of an encoded `U256`.
pub const WORD_LEN: usize = 32;

/// Width of a length prefix.
pub const LENGTH_PREFIX_LEN: usize = 4;

/// Builds the byte response returned by a handler.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResponseWriter {
    buf: Vec<u8>,
}

impl ResponseWriter {
    pub fn new() -> Self {
        Self::with_capacity(WORD_LEN)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { buf: Vec::with_capacity(capacity) }
    }

    pub fn write_u256(&mut self, value: U256) {
        self.buf.extend_from_slice(&value.to_big_endian());
    }

    pub fn write_bytes_with_length(&mut self, bytes: &[u8]) -> Result<(), ContractError> {
        let len = u32::try_from(bytes.len()).map_err(|_| ContractError::ValueTooLong)?;
        self.buf.extend_from_slice(&len.to_be_bytes());
        self.buf.extend_from_slice(bytes);
        Ok(())
    }

    /// Strings are stored as raw UTF-8 bytes, so the framing is the same as for blobs.
    pub fn write_string_with_length(&mut self, text: &[u8]) -> Result<(), ContractError> {
        self.write_bytes_with_length(text)
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.buf
    }
}

/// Sequential reader over call arguments or an encoded response.
#[derive(Clone, Debug)]
pub struct CalldataReader<'a> {
    input: &'a [u8],
}

impl<'a> CalldataReader<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self { input }
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8], ContractError> {
        if self.input.len() < len {
            return Err(ContractError::InvalidCalldata);
        }
        let (head, tail) = self.input.split_at(len);
        self.input = tail;
        Ok(head)
    }

    pub fn read_u256(&mut self) -> Result<U256, ContractError> {
        self.take(WORD_LEN).map(U256::from_big_endian)
    }

    pub fn read_bytes_with_length(&mut self) -> Result<&'a [u8], ContractError> {
        let mut prefix = [0u8; LENGTH_PREFIX_LEN];
        prefix.copy_from_slice(self.take(LENGTH_PREFIX_LEN)?);
        let len = u32::from_be_bytes(prefix) as usize;
        self.take(len)
    }

    pub fn read_string_with_length(&mut self) -> Result<&'a [u8], ContractError> {
        self.read_bytes_with_length()
    }

    pub fn remaining(&self) -> usize {
        self.input.len()
    }
}
