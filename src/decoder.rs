//! Sans-IO response decoder.

use bytes::{Buf, BufMut, Bytes, BytesMut};
use serde::de::DeserializeOwned;
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::response::Response;

/// Sans-IO decoder for API response bodies.
///
/// The decoder performs no I/O. Feed it the bytes of one or more response
/// bodies as they arrive from your transport, then pull complete documents
/// out with [`decode_response`](Self::decode_response) or
/// [`decode`](Self::decode).
///
/// A document is consumed from the buffer once it is complete, even if it
/// then fails to decode, so one bad document does not block the ones after it.
pub struct Decoder {
    read_buffer: BytesMut,
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder {
    /// Create a new decoder with an empty buffer.
    pub fn new() -> Self {
        Self {
            read_buffer: BytesMut::new(),
        }
    }

    /// Feed received data into the decoder.
    ///
    /// The buffer grows until a complete document arrives. Callers reading
    /// from an untrusted source should bound [`buffered_len`](Self::buffered_len)
    /// and [`clear`](Self::clear) the decoder when it is exceeded.
    pub fn feed_bytes(&mut self, data: &[u8]) {
        self.read_buffer.put_slice(data);
    }

    /// Try to decode a complete response from buffered data.
    ///
    /// Returns `Ok(Some(response))` if a complete document is available,
    /// `Ok(None)` if more data is needed, or an error if it does not decode.
    ///
    /// If the buffer does not start with `{` or `[`, the bytes before the
    /// next `{` or `[` are discarded and an error is returned; the following
    /// call resumes from there.
    pub fn decode_response(&mut self) -> Result<Option<Response>> {
        match self.extract_complete_value()? {
            Some(document) => Response::parse(&document).map(Some),
            None => Ok(None),
        }
    }

    /// Try to decode a complete document from buffered data as `T`.
    ///
    /// Use this when the caller knows the response shape, for example
    /// `decode::<Listing>()` for a listing endpoint.
    pub fn decode<T: DeserializeOwned>(&mut self) -> Result<Option<T>> {
        match self.extract_complete_value()? {
            Some(document) => Ok(Some(serde_json::from_slice(&document)?)),
            None => Ok(None),
        }
    }

    /// Number of buffered bytes not yet consumed.
    pub fn buffered_len(&self) -> usize {
        self.read_buffer.len()
    }

    /// Check if the buffer holds nothing but whitespace.
    pub fn is_empty(&self) -> bool {
        self.read_buffer.iter().all(u8::is_ascii_whitespace)
    }

    /// Discard all buffered data.
    pub fn clear(&mut self) {
        self.read_buffer.clear();
    }

    fn extract_complete_value(&mut self) -> Result<Option<Bytes>> {
        match find_value_end(&self.read_buffer) {
            Ok(Some(end)) => {
                trace!(len = end, "extracted complete document");
                Ok(Some(self.read_buffer.split_to(end).freeze()))
            }
            Ok(None) => Ok(None),
            Err(err) => {
                let skip = garbage_len(&self.read_buffer);
                debug!(skip, "discarding bytes before next document");
                self.read_buffer.advance(skip);
                Err(err)
            }
        }
    }
}

/// Find the end (exclusive) of the first top-level JSON object or array in
/// `data`, skipping leading whitespace.
///
/// Only nesting and string boundaries are tracked. Whatever lies between is
/// validated later by the JSON parser.
fn find_value_end(data: &[u8]) -> Result<Option<usize>> {
    let Some(start) = data.iter().position(|b| !b.is_ascii_whitespace()) else {
        return Ok(None);
    };
    if !matches!(data[start], b'{' | b'[') {
        return Err(Error::Decode(format!(
            "expected a JSON object or array, found byte 0x{:02x}",
            data[start]
        )));
    }

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, &byte) in data.iter().enumerate().skip(start) {
        if in_string {
            if escaped {
                escaped = false;
            } else if byte == b'\\' {
                escaped = true;
            } else if byte == b'"' {
                in_string = false;
            }
            continue;
        }

        match byte {
            b'"' => in_string = true,
            b'{' | b'[' => depth += 1,
            b'}' | b']' => {
                depth -= 1;
                if depth == 0 {
                    return Ok(Some(i + 1));
                }
            }
            _ => {}
        }
    }

    Ok(None)
}

/// Length of the prefix before the next `{` or `[` after the first
/// non-whitespace byte, or the whole buffer if there is none.
fn garbage_len(data: &[u8]) -> usize {
    let start = data
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(data.len());
    data[start..]
        .iter()
        .skip(1)
        .position(|b| matches!(b, b'{' | b'['))
        .map_or(data.len(), |pos| start + 1 + pos)
}
