use thiserror::Error;

pub const MAX_RESPONSE_BYTES: usize = 4 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum LimitError {
    #[error("response too large: {actual} bytes (max {max})")]
    TooLarge { max: usize, actual: usize },
}

pub type LimitResult<T> = Result<T, LimitError>;

pub fn enforce_max_response_size(len: usize) -> LimitResult<()> {
    if len > MAX_RESPONSE_BYTES {
        return Err(LimitError::TooLarge { max: MAX_RESPONSE_BYTES, actual: len });
    }
    Ok(())
}

/// Response body collected chunk by chunk under a byte cap.
///
/// `push` fails on the first chunk that takes the total past the cap, so a
/// caller streaming from the network stops reading there instead of
/// buffering the whole body first.
#[derive(Debug)]
pub struct CappedBody {
    max: usize,
    buf: Vec<u8>,
}

impl CappedBody {
    pub fn new(max: usize) -> Self {
        Self { max, buf: Vec::new() }
    }

    /// Check a length announced up front (e.g. `Content-Length`) and reserve
    /// room for it.
    pub fn expect_len(&mut self, declared: u64) -> LimitResult<()> {
        let declared = usize::try_from(declared).unwrap_or(usize::MAX);
        if declared > self.max {
            return Err(LimitError::TooLarge { max: self.max, actual: declared });
        }
        self.buf.reserve(declared);
        Ok(())
    }

    pub fn push(&mut self, chunk: &[u8]) -> LimitResult<()> {
        let total = self.buf.len().saturating_add(chunk.len());
        if total > self.max {
            return Err(LimitError::TooLarge { max: self.max, actual: total });
        }
        self.buf.extend_from_slice(chunk);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_stops_at_first_chunk_over_cap() {
        let mut body = CappedBody::new(10);
        body.push(b"12345").unwrap();
        body.push(b"67890").unwrap();
        match body.push(b"x") {
            Err(LimitError::TooLarge { max, actual }) => {
                assert_eq!(max, 10);
                assert_eq!(actual, 11);
            }
            other => panic!("unexpected {other:?}"),
        }
        // rejected chunk is not kept
        assert_eq!(body.len(), 10);
        assert_eq!(body.into_bytes(), b"1234567890");
    }

    #[test]
    fn declared_length_over_cap_is_rejected_before_reading() {
        let mut body = CappedBody::new(10);
        assert!(body.expect_len(10).is_ok());
        assert!(matches!(
            body.expect_len(u64::MAX),
            Err(LimitError::TooLarge { max: 10, .. })
        ));
        assert!(body.is_empty());
    }
}
