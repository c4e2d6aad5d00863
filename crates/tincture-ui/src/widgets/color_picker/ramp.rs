/// RGB channel ramped by one phase of the hue sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Rising,
    Falling,
}

impl Direction {
    #[inline]
    pub const fn sign(self) -> f64 {
        match self {
            Direction::Rising => 1.0,
            Direction::Falling => -1.0,
        }
    }
}

/// One entry of the gradient step table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RampStep {
    pub channel: Channel,
    pub direction: Direction,
}

impl RampStep {
    const fn new(channel: Channel, direction: Direction) -> Self {
        Self { channel, direction }
    }
}

/// Hue wheel traversal order starting from pure red:
/// red → yellow → green → cyan → blue → magenta → red.
pub const STEPS: [RampStep; 6] = [
    RampStep::new(Channel::Green, Direction::Rising),
    RampStep::new(Channel::Red, Direction::Falling),
    RampStep::new(Channel::Blue, Direction::Rising),
    RampStep::new(Channel::Green, Direction::Falling),
    RampStep::new(Channel::Red, Direction::Rising),
    RampStep::new(Channel::Blue, Direction::Falling),
];

/// Running state of the hue sweep across swatch columns.
///
/// Starts at pure red. Each [`advance`](Self::advance) moves the channel named
/// by the current step by `step` in the step's direction; once that channel
/// reaches 0 or 255 it is clamped and the sweep moves to the next step. After
/// the sixth step completes the ramp is done and stops changing.
#[derive(Debug, Clone, PartialEq)]
pub struct HueRamp {
    rgb: [f64; 3],
    phase: usize,
    step: f64,
}

impl HueRamp {
    /// Ramp sized so the six phases span `hue_width` columns: each column
    /// moves `256 / (hue_width / 6)` channel units.
    pub fn new(hue_width: f64) -> Self {
        Self { rgb: [255.0, 0.0, 0.0], phase: 0, step: 256.0 / (hue_width / 6.0) }
    }

    /// Current base color, unrounded.
    #[inline]
    pub fn color(&self) -> [f64; 3] {
        self.rgb
    }

    /// Index into [`STEPS`]; equals `STEPS.len()` once done.
    #[inline]
    pub fn phase(&self) -> usize {
        self.phase
    }

    #[inline]
    pub fn step_size(&self) -> f64 {
        self.step
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.phase >= STEPS.len()
    }

    #[inline]
    pub fn current_step(&self) -> Option<RampStep> {
        STEPS.get(self.phase).copied()
    }

    pub fn advance(&mut self) {
        let Some(step) = self.current_step() else { return };
        let ch = step.channel.index();
        let value = self.rgb[ch] + self.step * step.direction.sign();
        self.rgb[ch] = value;
        if value <= 0.0 || value >= 255.0 {
            self.rgb[ch] = value.clamp(0.0, 255.0);
            self.phase += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_phase(ramp: &mut HueRamp) -> [f64; 3] {
        let phase = ramp.phase();
        while ramp.phase() == phase {
            ramp.advance();
        }
        ramp.color()
    }

    #[test]
    fn starts_at_red() {
        let ramp = HueRamp::new(600.0);
        assert_eq!(ramp.color(), [255.0, 0.0, 0.0]);
        assert_eq!(ramp.phase(), 0);
        assert_eq!(ramp.step_size(), 2.56);
    }

    #[test]
    fn phases_visit_the_hue_wheel_in_order() {
        let mut ramp = HueRamp::new(600.0);
        let expected = [
            [255.0, 255.0, 0.0], // yellow
            [0.0, 255.0, 0.0],   // green
            [0.0, 255.0, 255.0], // cyan
            [0.0, 0.0, 255.0],   // blue
            [255.0, 0.0, 255.0], // magenta
            [255.0, 0.0, 0.0],   // red again
        ];
        for want in expected {
            assert_eq!(run_phase(&mut ramp), want);
        }
        assert!(ramp.is_done());
    }

    #[test]
    fn each_advance_changes_only_the_step_channel() {
        let mut ramp = HueRamp::new(90.0);
        while let Some(step) = ramp.current_step() {
            let before = ramp.color();
            ramp.advance();
            let after = ramp.color();
            for ch in 0..3 {
                if ch == step.channel.index() {
                    let moved = (after[ch] - before[ch]) * step.direction.sign();
                    assert!(moved > 0.0, "channel {ch} did not move with the step");
                } else {
                    assert_eq!(after[ch], before[ch]);
                }
            }
        }
    }

    #[test]
    fn done_ramp_stops_changing() {
        let mut ramp = HueRamp::new(6.0);
        for _ in 0..64 {
            ramp.advance();
        }
        assert!(ramp.is_done());
        let frozen = ramp.clone();
        ramp.advance();
        assert_eq!(ramp, frozen);
    }

    #[test]
    fn wide_step_completes_phase_in_one_column() {
        let mut ramp = HueRamp::new(1.0);
        ramp.advance();
        assert_eq!(ramp.phase(), 1);
        assert_eq!(ramp.color(), [255.0, 255.0, 0.0]);
    }
}
