/// Raw scroll metrics read from the window on every scroll or resize.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollState {
    pub scroll_offset: f64,
    pub viewport_height: f64,
    pub document_height: f64,
}

impl ScrollState {
    pub fn new(scroll_offset: f64, viewport_height: f64, document_height: f64) -> Self {
        Self {
            scroll_offset,
            viewport_height,
            document_height,
        }
    }

    pub fn progress(&self) -> f64 {
        compute_progress(self.scroll_offset, self.viewport_height, self.document_height)
    }

    /// Largest reachable scroll offset, 0 for pages that do not scroll.
    pub fn max_offset(&self) -> f64 {
        let range = self.document_height - self.viewport_height;
        if range.is_finite() && range > 0.0 {
            range
        } else {
            0.0
        }
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new(0.0, 1.0, 1.0)
    }
}

/// Normalized scroll position, 0 at the top and 1 fully scrolled.
///
/// Pages shorter than the viewport have no scrollable range and report 0.
/// Over-scroll (rubber banding) and stale measurements are clamped, so the
/// result is always inside `[0, 1]` and never NaN.
pub fn compute_progress(scroll_offset: f64, viewport_height: f64, document_height: f64) -> f64 {
    let range = document_height - viewport_height;
    if !range.is_finite() || range <= 0.0 {
        return 0.0;
    }
    (sanitize(scroll_offset) / range.max(1.0)).clamp(0.0, 1.0)
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
