//! # ringstage
//!
//! Fixed-capacity byte staging between a transport/protocol engine and
//! stream consumers.
//!
//! This crate provides the buffering layer for memory-constrained stream
//! sessions: an external engine (e.g. an SSH transport decrypting a
//! channel) pushes raw bytes in on one side, and a consumer (terminal
//! session, channel multiplexer) drains them on the other.
//!
//! ## Architecture
//!
//! - **Ring buffer** ([`RingBuffer`]): circular staging over owned or
//!   caller-borrowed storage, with all-or-nothing adds, optional
//!   oldest-data eviction under overflow, and zero-copy inspection of
//!   pending data.
//! - **Severity gate** ([`log`]): a process-wide syslog-style threshold
//!   filtering which log calls reach the sink, kept entirely outside the
//!   buffer itself.
//!
//! ## Example
//!
//! ```
//! use ringstage::RingBuffer;
//!
//! let mut rb = RingBuffer::new(1024).unwrap();
//!
//! // Transport side: stage decrypted channel bytes.
//! rb.add(b"ls -la\n", false).unwrap();
//!
//! // Consumer side: inspect without disturbing, then drain.
//! assert_eq!(rb.peek(6), b"ls -la");
//! let mut line = [0u8; 7];
//! assert_eq!(rb.read(&mut line), 7);
//! ```

pub mod error;
pub mod log;
pub mod ring;

pub use error::{Result, RingError};
pub use ring::{Direction, RingBuffer, Storage};
