/// A point on the element paired with a point on the viewport, both as
/// fractions of their height (`0.0` = top edge, `1.0` = bottom edge).
/// Progress is measured between the scroll positions at which the two
/// points line up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollOffset {
    pub element: f64,
    pub viewport: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollRange {
    pub start: ScrollOffset,
    pub end: ScrollOffset,
}

impl ScrollRange {
    /// From the element's top entering at the bottom of the viewport until its
    /// bottom leaves through the top.
    pub const ENTER_TO_EXIT: ScrollRange = ScrollRange {
        start: ScrollOffset { element: 0.0, viewport: 1.0 },
        end: ScrollOffset { element: 1.0, viewport: 0.0 },
    };

    /// Normalized progress in `[0, 1]` for an element whose bounding box top
    /// is `top` (viewport coordinates) and whose height is `height`.
    pub fn progress(&self, top: f64, height: f64, viewport_height: f64) -> f64 {
        // Element top at which each offset pair lines up.
        let top_at_start = self.start.viewport * viewport_height - self.start.element * height;
        let top_at_end = self.end.viewport * viewport_height - self.end.element * height;
        let span = top_at_start - top_at_end;

        if span <= f64::EPSILON {
            return if top <= top_at_end { 1.0 } else { 0.0 };
        }
        ((top_at_start - top) / span).clamp(0.0, 1.0)
    }
}

/// Piecewise-linear mapping, clamped to the first/last output outside the
/// input range. `input` must be ascending and the same length as `output`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Keyframes {
    pub input: &'static [f64],
    pub output: &'static [f64],
}

impl Keyframes {
    pub fn sample(&self, x: f64) -> f64 {
        let pairs = self.input.len().min(self.output.len());
        if pairs == 0 {
            return 0.0;
        }
        if x <= self.input[0] {
            return self.output[0];
        }
        if x >= self.input[pairs - 1] {
            return self.output[pairs - 1];
        }
        for i in 1..pairs {
            let (x0, x1) = (self.input[i - 1], self.input[i]);
            if x <= x1 {
                let (y0, y1) = (self.output[i - 1], self.output[i]);
                if x1 - x0 <= f64::EPSILON {
                    return y1;
                }
                return y0 + (y1 - y0) * (x - x0) / (x1 - x0);
            }
        }
        self.output[pairs - 1]
    }
}

/// Rise, hold, fall.
pub const SHOWCASE_OPACITY: Keyframes = Keyframes {
    input: &[0.0, 0.3, 0.6, 1.0],
    output: &[0.0, 1.0, 1.0, 0.0],
};

/// Vertical drift in px across the tracked range.
pub const SHOWCASE_OFFSET: Keyframes = Keyframes {
    input: &[0.0, 1.0],
    output: &[100.0, -100.0],
};

/// Offset and opacity applied to the gameplay showcase for a given progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxFrame {
    pub offset_y: f64,
    pub opacity: f64,
}

impl ParallaxFrame {
    pub fn at(progress: f64) -> Self {
        ParallaxFrame {
            offset_y: SHOWCASE_OFFSET.sample(progress),
            opacity: SHOWCASE_OPACITY.sample(progress),
        }
    }

    pub fn style(&self) -> String {
        format!(
            "transform: translate3d(0, {:.2}px, 0); opacity: {:.3};",
            self.offset_y, self.opacity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn opacity_hits_keyframes() {
        for (progress, expected) in [(0.0, 0.0), (0.3, 1.0), (0.6, 1.0), (1.0, 0.0)] {
            let opacity = SHOWCASE_OPACITY.sample(progress);
            assert!(close(opacity, expected), "progress {progress}: {opacity}");
        }
    }

    #[test]
    fn opacity_interpolates_between_keyframes() {
        assert!(close(SHOWCASE_OPACITY.sample(0.15), 0.5));
        assert!(close(SHOWCASE_OPACITY.sample(0.45), 1.0));
        assert!(close(SHOWCASE_OPACITY.sample(0.8), 0.5));
    }

    #[test]
    fn sample_clamps_outside_input() {
        assert!(close(SHOWCASE_OPACITY.sample(-0.5), 0.0));
        assert!(close(SHOWCASE_OPACITY.sample(1.5), 0.0));
        assert!(close(SHOWCASE_OFFSET.sample(2.0), -100.0));
    }

    #[test]
    fn offset_is_linear() {
        assert!(close(SHOWCASE_OFFSET.sample(0.0), 100.0));
        assert!(close(SHOWCASE_OFFSET.sample(0.5), 0.0));
        assert!(close(SHOWCASE_OFFSET.sample(1.0), -100.0));
    }

    #[test]
    fn progress_runs_from_entry_to_exit() {
        let range = ScrollRange::ENTER_TO_EXIT;
        let (height, viewport) = (400.0, 800.0);

        // Top edge just touching the viewport bottom.
        assert!(close(range.progress(800.0, height, viewport), 0.0));
        // Bottom edge just leaving through the viewport top.
        assert!(close(range.progress(-400.0, height, viewport), 1.0));
        // Halfway through the 1200px of travel.
        assert!(close(range.progress(200.0, height, viewport), 0.5));
    }

    #[test]
    fn progress_is_clamped() {
        let range = ScrollRange::ENTER_TO_EXIT;
        assert!(close(range.progress(5000.0, 400.0, 800.0), 0.0));
        assert!(close(range.progress(-5000.0, 400.0, 800.0), 1.0));
    }

    #[test]
    fn bottom_to_top_alignment_range() {
        // 0 when the element's bottom meets the viewport bottom,
        // 1 when its top meets the viewport top.
        let range = ScrollRange {
            start: ScrollOffset { element: 1.0, viewport: 1.0 },
            end: ScrollOffset { element: 0.0, viewport: 0.0 },
        };
        assert!(close(range.progress(600.0, 200.0, 800.0), 0.0));
        assert!(close(range.progress(0.0, 200.0, 800.0), 1.0));
        assert!(close(range.progress(300.0, 200.0, 800.0), 0.5));
    }

    #[test]
    fn empty_range_snaps_instead_of_dividing_by_zero() {
        let range = ScrollRange {
            start: ScrollOffset { element: 0.0, viewport: 0.0 },
            end: ScrollOffset { element: 0.0, viewport: 0.0 },
        };
        assert_eq!(range.progress(10.0, 100.0, 800.0), 0.0);
        assert_eq!(range.progress(-10.0, 100.0, 800.0), 1.0);
    }

    #[test]
    fn frame_combines_both_curves() {
        let frame = ParallaxFrame::at(0.3);
        assert!(close(frame.opacity, 1.0));
        assert!(close(frame.offset_y, 40.0));
        assert_eq!(frame.style(), "transform: translate3d(0, 40.00px, 0); opacity: 1.000;");
    }
}
