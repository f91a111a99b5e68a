//! Minimal end-to-end example: build quantities from literals, derive new ones and convert them.
//!
//! ```bash
//! RUST_LOG=debug cargo run -p rquantity --example quickstart
//! ```

use std::env;

use rquantity::{cm, inch, kg, mps2, sec, QForce, QSpeed, KMPH, MPS, NEWTON, POUND_FORCE};
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

fn main() {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(false)
        .init();

    let travelled = inch(120) + cm(50);
    let elapsed = sec(2.5);
    let v: QSpeed = travelled / elapsed;
    debug!(%travelled, %elapsed, "raw inputs");
    info!(speed = %v, mps = v.convert(MPS), kmph = v.convert(KMPH), "average speed");

    let f: QForce = kg(8) * mps2(1.5);
    info!(newtons = f.convert(NEWTON), pound_force = f.convert(POUND_FORCE), "force on the carriage");
}
