use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

/// Bounded capture buffer shared between an output pump and its reader.
/// Keeps the newest `cap` bytes.
#[derive(Debug)]
pub struct RingBytes {
    inner: Mutex<VecDeque<u8>>,
    cap: usize,
}

impl RingBytes {
    pub fn new(cap: usize) -> Arc<Self> {
        Arc::new(Self {
            inner: Mutex::new(VecDeque::with_capacity(cap.min(64 * 1024))),
            cap,
        })
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<u8>> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn push(&self, data: &[u8]) {
        let mut g = self.lock();
        let data = if data.len() > self.cap {
            &data[data.len() - self.cap..]
        } else {
            data
        };
        let overflow = g.len().saturating_add(data.len()).saturating_sub(self.cap);
        if overflow > 0 {
            g.drain(..overflow);
        }
        g.extend(data);
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Captured bytes decoded lossily; a multi-byte char cut at the front becomes U+FFFD.
    pub fn to_string_lossy(&self) -> String {
        let g = self.lock();
        let (a, b) = g.as_slices();
        let mut vec = Vec::with_capacity(a.len() + b.len());
        vec.extend_from_slice(a);
        vec.extend_from_slice(b);
        String::from_utf8_lossy(&vec).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_newest_bytes() {
        let ring = RingBytes::new(5);
        ring.push(b"abc");
        ring.push(b"defg");
        assert_eq!(ring.to_string_lossy(), "cdefg");
        assert_eq!(ring.len(), 5);
    }

    #[test]
    fn oversized_push_is_truncated_from_the_front() {
        let ring = RingBytes::new(3);
        ring.push(b"0123456789");
        assert_eq!(ring.to_string_lossy(), "789");
    }

    #[test]
    fn zero_capacity_captures_nothing() {
        let ring = RingBytes::new(0);
        ring.push(b"data");
        assert!(ring.is_empty());
    }
}
