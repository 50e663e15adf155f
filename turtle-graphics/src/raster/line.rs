//! Integer line rasterization.

/// Inclusive pixel rectangle that lines are clipped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ClipRect {
    pub min_col: i64,
    pub min_row: i64,
    pub max_col: i64,
    pub max_row: i64,
}

/// Plot the pixels of the segment from `(x0, y0)` to `(x1, y1)` that lie
/// inside `clip`, and return how many pixels of the segment fell outside.
///
/// The pixels are the ones Bresenham's algorithm visits for the whole
/// segment, both endpoints included. The error term starts biased toward
/// whichever axis has the larger delta, so that axis advances on every step
/// and the other only when the accumulated error crosses over. The visible
/// run of steps is found directly rather than by walking, so the cost is
/// bounded by the clip rectangle and not by the segment length.
pub(crate) fn bresenham(
    x0: i64,
    y0: i64,
    x1: i64,
    y1: i64,
    clip: ClipRect,
    mut plot: impl FnMut(i64, i64),
) -> u64 {
    let line = Line::new(x0, y0, x1, y1);
    let total = line.long + 1;
    let Some((first, last)) = line.visible_steps(clip) else {
        return u64::try_from(total).unwrap_or(u64::MAX);
    };
    for step in first..=last {
        let (x, y) = line.point(step);
        plot(x, y);
    }
    u64::try_from(total - (last - first + 1)).unwrap_or(u64::MAX)
}

/// A segment in major/minor axis form.
///
/// The major axis advances one pixel per step. After `k` steps the minor
/// axis has advanced `ceil((k * short - long / 2) / long)` pixels, clamped
/// at zero, which is exactly where the stepping error term puts it.
#[derive(Debug)]
struct Line {
    x_major: bool,
    major_start: i128,
    major_dir: i128,
    minor_start: i128,
    minor_dir: i128,
    long: u128,
    short: u128,
}

impl Line {
    fn new(x0: i64, y0: i64, x1: i64, y1: i64) -> Self {
        let (x0, y0, x1, y1) = (
            i128::from(x0),
            i128::from(y0),
            i128::from(x1),
            i128::from(y1),
        );
        let dx = (x1 - x0).unsigned_abs();
        let dy = (y1 - y0).unsigned_abs();
        let dir_x = if x0 < x1 { 1 } else { -1 };
        let dir_y = if y0 < y1 { 1 } else { -1 };
        if dx > dy {
            Self {
                x_major: true,
                major_start: x0,
                major_dir: dir_x,
                minor_start: y0,
                minor_dir: dir_y,
                long: dx,
                short: dy,
            }
        } else {
            Self {
                x_major: false,
                major_start: y0,
                major_dir: dir_y,
                minor_start: x0,
                minor_dir: dir_x,
                long: dy,
                short: dx,
            }
        }
    }

    fn minor_offset(&self, step: u128) -> u128 {
        let half = self.long / 2;
        // Both factors are below 2^64, so the product fits.
        let num = step * self.short;
        if num <= half {
            0
        } else {
            (num - half).div_ceil(self.long)
        }
    }

    /// Pixel reached after `step` steps. Only called for visible steps, whose
    /// coordinates lie inside the clip rectangle.
    fn point(&self, step: u128) -> (i64, i64) {
        let major = self.major_start + self.major_dir * step as i128;
        let minor = self.minor_start + self.minor_dir * self.minor_offset(step) as i128;
        let (x, y) = if self.x_major {
            (major, minor)
        } else {
            (minor, major)
        };
        (x as i64, y as i64)
    }

    /// First and last step inside `clip`, or None if the segment misses it.
    fn visible_steps(&self, clip: ClipRect) -> Option<(u128, u128)> {
        let (major_lo, major_hi, minor_lo, minor_hi) = if self.x_major {
            (clip.min_col, clip.max_col, clip.min_row, clip.max_row)
        } else {
            (clip.min_row, clip.max_row, clip.min_col, clip.max_col)
        };
        let (step_lo, step_hi) = steps_within(self.major_start, self.major_dir, major_lo, major_hi);
        let (offset_lo, offset_hi) =
            steps_within(self.minor_start, self.minor_dir, minor_lo, minor_hi);

        // The minor offset never decreases, so each bound is one search.
        let first = step_lo
            .max(0)
            .max(self.first_step(|offset| offset >= offset_lo) as i128);
        let last = step_hi
            .min(self.long as i128)
            .min(self.first_step(|offset| offset > offset_hi) as i128 - 1);
        (first <= last).then(|| (first as u128, last as u128))
    }

    /// Smallest step in `0..=long + 1` whose minor offset satisfies `pred`.
    fn first_step(&self, pred: impl Fn(i128) -> bool) -> u128 {
        let (mut lo, mut hi) = (0u128, self.long + 1);
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if pred(self.minor_offset(mid) as i128) {
                hi = mid;
            } else {
                lo = mid + 1;
            }
        }
        lo
    }
}

/// Step counts `t` for which `start + dir * t` lies in `lo..=hi`.
fn steps_within(start: i128, dir: i128, lo: i64, hi: i64) -> (i128, i128) {
    let (lo, hi) = (i128::from(lo), i128::from(hi));
    if dir > 0 {
        (lo - start, hi - start)
    } else {
        (start - hi, start - lo)
    }
}
