//! Angle helpers example: wrapping, separation and trigonometry.

use std::env;

use rquantity::{deg, number, rad, QAngle, DEGREE};
use tracing::{info, Level};
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

    let a = deg(370).wrap_signed();
    info!(degrees = a.convert(DEGREE), "370° wrapped into (-180°, 180°]");

    let sep = deg(45).signed_separation(deg(350));
    info!(degrees = sep.convert(DEGREE), "shortest turn from 350° to 45°");

    let half = QAngle::HALF_TURN.wrap_pos();
    info!(radians = half.value(), "half turn in [0, 2π)");

    let (s, c) = rad(1.0).sin_cos();
    info!(sin = s.value(), cos = c.value(), "trig on an angle returns numbers");

    let back = number(0.5).asin();
    info!(degrees = back.convert(DEGREE), "asin returns an angle");
}
