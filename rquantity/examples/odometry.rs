//! Dead-reckoning example: integrate wheel travel and heading into a field position.
//!
//! A differential drive reports left/right wheel travel each tick; the heading change is the difference divided by
//! the track width, and the robot advances along the mean of the two.

use std::env;

use rquantity::{deg, inch, ms, rpm, to_radius, QAngle, QLength, V2Position, DEGREE, INCH, RADIAN, TILE};
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

const TRACK_WIDTH: QLength = INCH.mul_scalar(12.0);

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

    let wheel = to_radius(inch(2));
    let tick = ms(10);

    let mut position = V2Position::default();
    let mut heading: QAngle = deg(90);

    // Left wheel slightly slower: a gentle left-hand arc.
    for step in 0..500 {
        let left: QLength = rpm(190) * wheel * tick;
        let right: QLength = rpm(200) * wheel * tick;

        let turn: QAngle = RADIAN * f64::from((right - left) / TRACK_WIDTH);
        let forward = (left + right) / 2.0;
        heading = (heading + turn).wrap_signed();
        position += V2Position::from_polar(heading, forward);

        if step % 100 == 0 {
            debug!(step, %position, heading = heading.convert(DEGREE), "tick");
        }
    }

    info!(
        x_tiles = position.x().convert(TILE),
        y_tiles = position.y().convert(TILE),
        heading = heading.convert(DEGREE),
        displacement_in = position.magnitude().convert(INCH),
        "final pose"
    );
}
