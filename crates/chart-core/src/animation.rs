// File: crates/chart-core/src/animation.rs
// Summary: Entry animation timeline for a line chart (progressive line, fades).
// Notes:
// - The plan is data only. Backends either translate it into declarative
//   animation (SVG) or sample it per frame (raster), so nothing here owns timers.

use crate::geometry::clamp;

/// One tween on the timeline, in seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Phase {
    pub begin: f32,
    pub duration: f32,
}

impl Phase {
    pub const fn new(begin: f32, duration: f32) -> Self { Self { begin, duration } }

    pub fn end(&self) -> f32 { self.begin + self.duration }

    /// 0 before `begin`, 1 from `end` onward, linear in between.
    pub fn progress(&self, t: f32) -> f32 {
        if t >= self.end() {
            return 1.0;
        }
        if self.duration <= 0.0 || t <= self.begin {
            return 0.0;
        }
        clamp((t - self.begin) / self.duration, 0.0, 1.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationPlan {
    /// Dash offset runs from the full line length to zero.
    pub line_draw: Phase,
    pub line_fade: Phase,
    pub area_fade: Phase,
    /// Starts once the line has finished drawing.
    pub marker_fade: Phase,
    pub line_length: f32,
}

impl AnimationPlan {
    pub fn for_line(line_length: f32) -> Self {
        let line_draw = Phase::new(0.0, 1.0);
        Self {
            line_draw,
            line_fade: Phase::new(0.0, 0.3),
            area_fade: Phase::new(0.0, 1.0),
            marker_fade: Phase::new(line_draw.end(), 0.3),
            line_length,
        }
    }

    pub fn total_duration(&self) -> f32 {
        [self.line_draw, self.line_fade, self.area_fade, self.marker_fade]
            .iter()
            .map(Phase::end)
            .fold(0.0, f32::max)
    }

    pub fn sample(&self, t: f32) -> FrameState {
        FrameState {
            line_reveal: self.line_draw.progress(t),
            line_opacity: self.line_fade.progress(t),
            area_opacity: self.area_fade.progress(t),
            marker_opacity: self.marker_fade.progress(t),
        }
    }
}

/// Visibility of each layer at one instant; 1.0 everywhere is the settled chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameState {
    /// Fraction of the line length drawn so far.
    pub line_reveal: f32,
    pub line_opacity: f32,
    pub area_opacity: f32,
    pub marker_opacity: f32,
}

impl FrameState {
    pub const FINAL: FrameState = FrameState {
        line_reveal: 1.0,
        line_opacity: 1.0,
        area_opacity: 1.0,
        marker_opacity: 1.0,
    };

    /// Dash offset for a line of `length` pixels at this frame.
    pub fn dash_offset(&self, length: f32) -> f32 {
        length * (1.0 - self.line_reveal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden_and_settles_to_final() {
        let plan = AnimationPlan::for_line(120.0);
        let start = plan.sample(0.0);
        assert_eq!(start.line_reveal, 0.0);
        assert_eq!(start.line_opacity, 0.0);
        assert_eq!(start.marker_opacity, 0.0);
        assert_eq!(plan.sample(plan.total_duration()), FrameState::FINAL);
        assert_eq!(plan.sample(10.0), FrameState::FINAL);
    }

    #[test]
    fn markers_wait_for_the_line() {
        let plan = AnimationPlan::for_line(120.0);
        let mid = plan.sample(0.5);
        assert!(mid.line_reveal > 0.0 && mid.line_reveal < 1.0);
        assert_eq!(mid.marker_opacity, 0.0);
        assert_eq!(plan.sample(plan.line_draw.end()).marker_opacity, 0.0);
        assert!(plan.sample(1.15).marker_opacity > 0.0);
        assert_eq!(mid.dash_offset(120.0), 60.0);
    }

    #[test]
    fn zero_length_phase_is_a_step() {
        let p = Phase::new(1.0, 0.0);
        assert_eq!(p.progress(0.5), 0.0);
        assert_eq!(p.progress(1.0), 1.0);
    }
}
