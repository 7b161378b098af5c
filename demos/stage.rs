//! Staging loop - bytes flowing transport -> buffer -> terminal.
//!
//! This example demonstrates:
//! - Creating a buffer over caller-supplied (borrowed) storage
//! - A session loop alternating between network-side and terminal-side
//!   transfers
//! - Zero-copy inspection with `peek` before draining
//! - The severity gate in front of tracing
//!
//! # Running
//!
//! ```sh
//! cargo run --example stage
//! ```

use ringstage::log::{self, Severity};
use ringstage::RingBuffer;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();
    log::set_threshold(Severity::Debug);

    // A static region the way an embedded target would provide one.
    let mut region = [0u8; 64];
    let mut inbound = RingBuffer::with_storage(&mut region)?;

    // Chunks as a transport engine would hand them over after
    // decrypting a channel.
    let chunks: [&[u8]; 4] = [b"Welcome to ", b"the session.", b"\r\n$ ", b"exit\r\n"];
    let mut terminal = Vec::new();

    for chunk in chunks {
        inbound.add(chunk, false)?;
        log::emit(
            Severity::Debug,
            format_args!("staged {} bytes, {} free", chunk.len(), inbound.free()),
        );

        // Terminal side: consume the pending window zero-copy via peek,
        // run by run (peek never spans the physical wrap), then advance.
        while !inbound.is_empty() {
            let run = inbound.peek(inbound.used());
            terminal.extend_from_slice(run);
            let mut scratch = vec![0u8; run.len()];
            inbound.read(&mut scratch);
        }
    }

    log::emit(
        Severity::Notice,
        format_args!("session drained {} bytes total", terminal.len()),
    );
    print!("{}", String::from_utf8_lossy(&terminal));
    Ok(())
}
