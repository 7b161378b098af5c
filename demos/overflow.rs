//! Overflow policies - rejecting vs. evicting when the buffer is full.
//!
//! This example demonstrates:
//! - The all-or-nothing failure of a non-overwriting add
//! - Oldest-data eviction with `overwrite` set
//! - Left-truncation when the input exceeds the whole capacity
//!
//! # Running
//!
//! ```sh
//! cargo run --example overflow
//! ```

use ringstage::{RingBuffer, RingError};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut rb = RingBuffer::new(8)?;
    rb.add(b"ABCDEFGH", false)?;
    println!("filled: used={} free={}", rb.used(), rb.free());

    // Without overwrite the add is refused and nothing changes.
    match rb.add(b"I", false) {
        Err(RingError::BufferFull { needed, free }) => {
            println!("rejected: needed {} with {} free", needed, free)
        }
        other => return Err(format!("expected BufferFull, got {:?}", other).into()),
    }

    // With overwrite the oldest byte makes room.
    rb.add_byte(b'I', true)?;
    let mut content = [0u8; 8];
    rb.read(&mut content);
    println!("after eviction: {}", String::from_utf8_lossy(&content));

    // An oversized input leaves only its final `capacity` bytes.
    rb.add(b"0123456789ABCDEF", true)?;
    let mut tail = [0u8; 8];
    rb.read(&mut tail);
    println!("after truncating overwrite: {}", String::from_utf8_lossy(&tail));

    Ok(())
}
