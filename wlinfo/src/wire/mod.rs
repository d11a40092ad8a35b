//! Fixed-stride binary record buffers.
//!
//! List queries can cross the backend boundary as a flat byte buffer holding
//! zero or more records of one type, back to back, with no header. Every
//! record type has a fixed stride, so a buffer of `N * STRIDE` bytes holds
//! exactly `N` records. All integers are little-endian and there is no padding.
//!
//! [`decode_records`] validates the length up front and hands out a borrowed,
//! lazily decoded view. [`encode_records`] and [`encode_records_into`] go the
//! other way for producers.

mod layout;

use log::warn;
use std::marker::PhantomData;

use crate::api::models::WireError;

/// A record with a fixed wire size.
pub trait Record: Sized {
    /// Size of one encoded record in bytes.
    const STRIDE: usize;

    /// Reads one record. The reader holds exactly `STRIDE` bytes.
    fn decode(r: &mut WireReader<'_>) -> Self;

    /// Appends exactly `STRIDE` bytes.
    fn encode(&self, w: &mut WireWriter);
}

/// Cursor over the bytes of a single record.
///
/// Reads past the end yield zeroes; the decoder only ever hands out readers
/// sized to the record stride, so that only happens for a mis-declared layout.
pub struct WireReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> WireReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    pub fn bytes<const N: usize>(&mut self) -> [u8; N] {
        let mut out = [0u8; N];
        if let Some(src) = self.data.get(self.pos..self.pos + N) {
            out.copy_from_slice(src);
        }
        self.pos += N;
        out
    }

    pub fn u8(&mut self) -> u8 {
        self.bytes::<1>()[0]
    }

    pub fn i8(&mut self) -> i8 {
        i8::from_le_bytes(self.bytes())
    }

    pub fn bool(&mut self) -> bool {
        self.u8() != 0
    }

    pub fn u16(&mut self) -> u16 {
        u16::from_le_bytes(self.bytes())
    }

    pub fn u32(&mut self) -> u32 {
        u32::from_le_bytes(self.bytes())
    }

    pub fn u64(&mut self) -> u64 {
        u64::from_le_bytes(self.bytes())
    }

    /// Reads a NUL-padded string field of `N` bytes.
    ///
    /// Text stops at the first NUL; invalid UTF-8 is replaced.
    pub fn cstr<const N: usize>(&mut self) -> String {
        let raw = self.bytes::<N>();
        let end = raw.iter().position(|&b| b == 0).unwrap_or(N);
        String::from_utf8_lossy(&raw[..end]).into_owned()
    }
}

/// Growable output for record encoding.
#[derive(Debug, Default)]
pub struct WireWriter {
    buf: Vec<u8>,
}

impl WireWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
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

    pub fn bytes(&mut self, data: &[u8]) {
        self.buf.extend_from_slice(data);
    }

    pub fn u8(&mut self, v: u8) {
        self.buf.push(v);
    }

    pub fn i8(&mut self, v: i8) {
        self.bytes(&v.to_le_bytes());
    }

    pub fn bool(&mut self, v: bool) {
        self.u8(v as u8);
    }

    pub fn u16(&mut self, v: u16) {
        self.bytes(&v.to_le_bytes());
    }

    pub fn u32(&mut self, v: u32) {
        self.bytes(&v.to_le_bytes());
    }

    pub fn u64(&mut self, v: u64) {
        self.bytes(&v.to_le_bytes());
    }

    /// Writes `s` into an `N`-byte NUL-padded field, truncating so that at
    /// least one NUL remains.
    pub fn cstr<const N: usize>(&mut self, s: &str) {
        let mut field = [0u8; N];
        let take = s.len().min(N.saturating_sub(1));
        field[..take].copy_from_slice(&s.as_bytes()[..take]);
        self.bytes(&field);
    }
}

/// A validated, borrowed view of a record buffer.
///
/// Decoding is lazy: records are rebuilt from their offset on every pass, so
/// the view can be iterated any number of times.
#[derive(Debug)]
pub struct Records<'a, T> {
    buf: &'a [u8],
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for Records<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Records<'_, T> {}

impl<'a, T: Record> Records<'a, T> {
    /// Number of records in the buffer.
    pub fn len(&self) -> usize {
        self.buf.len() / T::STRIDE
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Decodes the record at `index`.
    pub fn get(&self, index: usize) -> Option<T> {
        let start = index.checked_mul(T::STRIDE)?;
        let chunk = self.buf.get(start..start + T::STRIDE)?;
        Some(T::decode(&mut WireReader::new(chunk)))
    }

    /// Iterates the records in offset order.
    pub fn iter(&self) -> RecordIter<'a, T> {
        RecordIter {
            chunks: self.buf.chunks_exact(T::STRIDE),
            _marker: PhantomData,
        }
    }

    /// Decodes every record into an owned vector.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }
}

impl<'a, T: Record> IntoIterator for Records<'a, T> {
    type Item = T;
    type IntoIter = RecordIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T: Record> IntoIterator for &Records<'a, T> {
    type Item = T;
    type IntoIter = RecordIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the records of a [`Records`] view.
pub struct RecordIter<'a, T> {
    chunks: std::slice::ChunksExact<'a, u8>,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Record> Iterator for RecordIter<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.chunks
            .next()
            .map(|chunk| T::decode(&mut WireReader::new(chunk)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl<T: Record> ExactSizeIterator for RecordIter<'_, T> {}

/// Interprets `buf` as a sequence of `T` records.
///
/// Fails with [`WireError::ContractViolation`] unless `buf.len()` is an exact
/// multiple of `T::STRIDE`. An empty buffer is a valid empty list.
pub fn decode_records<T: Record>(buf: &[u8]) -> Result<Records<'_, T>, WireError> {
    if buf.len() % T::STRIDE != 0 {
        warn!(
            "rejecting {}-byte list buffer: not a multiple of the {}-byte stride of {}",
            buf.len(),
            T::STRIDE,
            std::any::type_name::<T>()
        );
        return Err(WireError::ContractViolation {
            len: buf.len(),
            stride: T::STRIDE,
        });
    }
    Ok(Records {
        buf,
        _marker: PhantomData,
    })
}

/// Encodes `records` back to back into a new buffer.
pub fn encode_records<T: Record>(records: &[T]) -> Vec<u8> {
    let mut w = WireWriter::with_capacity(records.len() * T::STRIDE);
    for record in records {
        record.encode(&mut w);
    }
    w.into_inner()
}

/// Encodes `records` into a caller-allocated buffer and returns the number of
/// bytes written.
///
/// The buffer is never grown: if the records do not fit, nothing is written
/// and [`WireError::BufferTooSmall`] is returned.
pub fn encode_records_into<T: Record>(records: &[T], out: &mut [u8]) -> Result<usize, WireError> {
    let needed = records.len() * T::STRIDE;
    if needed > out.len() {
        return Err(WireError::BufferTooSmall {
            needed,
            capacity: out.len(),
        });
    }
    let encoded = encode_records(records);
    out[..needed].copy_from_slice(&encoded);
    Ok(needed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Pair {
        a: u8,
        b: u16,
    }

    impl Record for Pair {
        const STRIDE: usize = 3;

        fn decode(r: &mut WireReader<'_>) -> Self {
            Pair {
                a: r.u8(),
                b: r.u16(),
            }
        }

        fn encode(&self, w: &mut WireWriter) {
            w.u8(self.a);
            w.u16(self.b);
        }
    }

    #[test]
    fn decodes_in_offset_order() {
        let buf = [1, 0x34, 0x12, 2, 0x78, 0x56];
        let records = decode_records::<Pair>(&buf).expect("valid buffer");
        assert_eq!(records.len(), 2);
        assert_eq!(
            records.to_vec(),
            vec![Pair { a: 1, b: 0x1234 }, Pair { a: 2, b: 0x5678 }]
        );
    }

    #[test]
    fn empty_buffer_is_empty_list() {
        let records = decode_records::<Pair>(&[]).expect("empty is valid");
        assert!(records.is_empty());
        assert_eq!(records.iter().count(), 0);
    }

    #[test]
    fn view_is_restartable() {
        let buf = [1, 0, 0, 2, 0, 0, 3, 0, 0];
        let records = decode_records::<Pair>(&buf).expect("valid buffer");
        let first: Vec<_> = records.iter().map(|p| p.a).collect();
        let second: Vec<_> = records.into_iter().map(|p| p.a).collect();
        assert_eq!(first, vec![1, 2, 3]);
        assert_eq!(first, second);
    }

    #[test]
    fn rejects_partial_record() {
        let buf = [1, 0, 0, 2];
        assert_eq!(
            decode_records::<Pair>(&buf).unwrap_err(),
            WireError::ContractViolation { len: 4, stride: 3 }
        );
    }

    #[test]
    fn get_by_index() {
        let buf = encode_records(&[Pair { a: 9, b: 1 }, Pair { a: 8, b: 2 }]);
        let records = decode_records::<Pair>(&buf).expect("valid buffer");
        assert_eq!(records.get(1), Some(Pair { a: 8, b: 2 }));
        assert_eq!(records.get(2), None);
    }

    #[test]
    fn encode_into_fixed_buffer() {
        let mut out = [0xffu8; 8];
        let n = encode_records_into(&[Pair { a: 7, b: 0x0102 }, Pair { a: 6, b: 0 }], &mut out)
            .expect("fits");
        assert_eq!(n, 6);
        assert_eq!(&out[..6], &[7, 0x02, 0x01, 6, 0, 0]);
        assert_eq!(&out[6..], &[0xff, 0xff]);
    }

    #[test]
    fn encode_into_never_grows() {
        let mut out = [0u8; 5];
        let err = encode_records_into(&[Pair { a: 1, b: 1 }, Pair { a: 2, b: 2 }], &mut out)
            .unwrap_err();
        assert_eq!(
            err,
            WireError::BufferTooSmall {
                needed: 6,
                capacity: 5
            }
        );
        assert_eq!(out, [0u8; 5]);
    }

    #[test]
    fn cstr_stops_at_nul_and_truncates() {
        let mut w = WireWriter::new();
        w.cstr::<4>("abcdef");
        let bytes = w.into_inner();
        assert_eq!(bytes, b"abc\0");
        assert_eq!(WireReader::new(&bytes).cstr::<4>(), "abc");
    }

    #[test]
    fn reader_zero_fills_past_end() {
        let mut r = WireReader::new(&[0xaa]);
        assert_eq!(r.u8(), 0xaa);
        assert_eq!(r.u32(), 0);
        assert_eq!(r.remaining(), 0);
    }
}
