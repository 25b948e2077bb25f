//! Clock-face geometry. Angles are degrees measured from 3 o'clock, clockwise
//! positive (SVG y axis points down), offset by -90° so zero points at 12.

use once_cell::sync::Lazy;

use super::value_objects::{ClockTime, DialMark, Hand, HandAngles, Point};

pub const DIAL_CENTER: Point = Point { x: 100.0, y: 100.0 };
pub const DIAL_RADIUS: f64 = 95.0;
pub const TICK_OUTER_RADIUS: f64 = 85.0;
pub const TICK_INNER_RADIUS: f64 = 75.0;
pub const NUMERAL_RADIUS: f64 = 62.0;
pub const HUB_RADIUS: f64 = 5.0;

const DIAL_POSITIONS: u8 = 12;
const DEGREES_PER_POSITION: f64 = 30.0;
const TWELVE_O_CLOCK_OFFSET: f64 = -90.0;

/// Hand angles for a 12-hour dial reading. Minute and hour hands creep with
/// the smaller unit instead of jumping.
pub fn hand_angles(hours12: u32, minutes: u32, seconds: u32) -> HandAngles {
    let (h, m, s) = (hours12 as f64, minutes as f64, seconds as f64);
    HandAngles {
        hour: h * 30.0 + m * 0.5 + TWELVE_O_CLOCK_OFFSET,
        minute: m * 6.0 + s * 0.1 + TWELVE_O_CLOCK_OFFSET,
        second: s * 6.0 + TWELVE_O_CLOCK_OFFSET,
    }
}

pub fn hand_angles_for(time: &ClockTime) -> HandAngles {
    hand_angles(time.hours12() as u32, time.minute() as u32, time.second() as u32)
}

/// Point at `radius` from the dial centre along `angle` degrees.
pub fn polar_point(angle: f64, radius: f64) -> Point {
    let radians = angle.to_radians();
    Point::new(
        DIAL_CENTER.x + radius * radians.cos(),
        DIAL_CENTER.y + radius * radians.sin(),
    )
}

pub fn hand_tip(hand: Hand, angles: &HandAngles) -> Point {
    polar_point(angles.of(hand), hand.length())
}

static DIAL_MARKS: Lazy<Vec<DialMark>> = Lazy::new(|| {
    (0..DIAL_POSITIONS)
        .map(|index| {
            let angle = index as f64 * DEGREES_PER_POSITION + TWELVE_O_CLOCK_OFFSET;
            DialMark {
                index,
                angle,
                tick_outer: polar_point(angle, TICK_OUTER_RADIUS),
                tick_inner: polar_point(angle, TICK_INNER_RADIUS),
                numeral_at: polar_point(angle, NUMERAL_RADIUS),
                label: if index == 0 { "12".to_string() } else { index.to_string() },
            }
        })
        .collect()
});

/// The twelve static tick/numeral positions, computed once.
pub fn dial_marks() -> &'static [DialMark] {
    &DIAL_MARKS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn noon_points_every_hand_up() {
        let angles = hand_angles(12, 0, 0);
        assert!(close(angles.second, -90.0));
        assert!(close(angles.minute, -90.0));
        assert!(close(angles.hour, 270.0));
    }

    #[test]
    fn quarter_past_three() {
        let angles = hand_angles(3, 15, 0);
        assert!(close(angles.minute, 0.0));
        assert!(close(angles.hour, 7.5));
    }

    #[test]
    fn hands_creep_with_smaller_units() {
        let angles = hand_angles(12, 30, 45);
        assert!(close(angles.second, 180.0));
        assert!(close(angles.minute, 94.5));
        assert!(close(angles.hour, 285.0));
    }

    #[test]
    fn second_tip_at_twelve_is_straight_up() {
        let tip = hand_tip(Hand::Second, &hand_angles(12, 0, 0));
        assert!(close(tip.x, 100.0));
        assert!(close(tip.y, 30.0));
    }

    #[test]
    fn dial_has_twelve_marks_starting_at_twelve() {
        let marks = dial_marks();
        assert_eq!(marks.len(), 12);
        assert_eq!(marks[0].label, "12");
        assert_eq!(marks[3].label, "3");
        assert!(close(marks[0].tick_outer.y, 15.0));
        assert!(close(marks[0].tick_inner.y, 25.0));
        assert!(close(marks[3].numeral_at.x, 162.0));
        assert!(close(marks[3].numeral_at.y, 100.0));
    }
}
