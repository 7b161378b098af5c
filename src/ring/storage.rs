//! Backing storage for the ring buffer.
//!
//! The buffer either owns its storage (allocated once at construction,
//! released on drop) or borrows it from the caller (the caller keeps
//! ownership and the drop leaves it untouched). Modeling the two modes
//! as an enum ties the release behavior to the variant instead of a
//! flag that release code has to honor.

/// Fixed-length byte storage, owned or borrowed.
///
/// The length is fixed for the life of the buffer. Owned storage lives
/// on the heap and is freed when the buffer drops; borrowed storage is a
/// plain mutable reborrow of caller memory and never touches the
/// allocator.
#[derive(Debug)]
pub enum Storage<'a> {
    /// Heap allocation owned by the buffer.
    Owned(Box<[u8]>),
    /// Caller-supplied region; the caller retains ownership.
    Borrowed(&'a mut [u8]),
}

impl Storage<'_> {
    /// Storage length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Storage::Owned(buf) => buf.len(),
            Storage::Borrowed(buf) => buf.len(),
        }
    }

    /// Check if the storage is zero-length.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Immutable view of the full storage region.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        match self {
            Storage::Owned(buf) => buf,
            Storage::Borrowed(buf) => buf,
        }
    }

    /// Mutable view of the full storage region.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        match self {
            Storage::Owned(buf) => buf,
            Storage::Borrowed(buf) => buf,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owned_len() {
        let storage = Storage::Owned(vec![0u8; 32].into_boxed_slice());
        assert_eq!(storage.len(), 32);
        assert!(!storage.is_empty());
    }

    #[test]
    fn test_borrowed_len() {
        let mut backing = [0u8; 16];
        let storage = Storage::Borrowed(&mut backing);
        assert_eq!(storage.len(), 16);
    }

    #[test]
    fn test_borrowed_writes_reach_caller_memory() {
        let mut backing = [0u8; 4];
        {
            let mut storage = Storage::Borrowed(&mut backing);
            storage.as_mut_slice()[0] = 0xAB;
            storage.as_mut_slice()[3] = 0xCD;
        }
        assert_eq!(backing[0], 0xAB);
        assert_eq!(backing[3], 0xCD);
    }

    #[test]
    fn test_empty_storage() {
        let storage = Storage::Owned(Vec::new().into_boxed_slice());
        assert!(storage.is_empty());
        assert_eq!(storage.as_slice().len(), 0);
    }
}
