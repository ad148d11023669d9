/// Value Object - value range of a vertical axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisDomain {
    pub min: f64,
    pub max: f64,
}

impl AxisDomain {
    /// Fraction of the data range added above and below
    pub const PADDING_RATIO: f64 = 0.05;

    /// "auto" domain: data min..max with padding. A flat series is widened
    /// around its value. `None` when there is nothing finite to plot.
    pub fn auto(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        let (min, max) = values
            .into_iter()
            .filter(|v| v.is_finite())
            .fold(None, |acc: Option<(f64, f64)>, v| match acc {
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
                None => Some((v, v)),
            })?;

        let range = max - min;
        let pad = if range > 0.0 {
            range * Self::PADDING_RATIO
        } else if min != 0.0 {
            min.abs() * Self::PADDING_RATIO
        } else {
            1.0
        };
        Some(Self { min: min - pad, max: max + pad })
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Position of `value` in 0.0 (min) ..= 1.0 (max)
    pub fn normalize(&self, value: f64) -> f64 {
        if self.span() <= 0.0 {
            return 0.5;
        }
        (value - self.min) / self.span()
    }

    /// `count` evenly spaced values from min to max inclusive
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        match count {
            0 => Vec::new(),
            1 => vec![self.min],
            _ => {
                let step = self.span() / (count - 1) as f64;
                (0..count).map(|i| self.min + step * i as f64).collect()
            }
        }
    }
}

/// Value Object - drawable rectangle inside a canvas, in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    /// Canvas minus margins; the left margin holds the value axis.
    pub fn inside(canvas_width: f64, canvas_height: f64, axis_width: f64, margin: f64) -> Self {
        Self {
            left: axis_width,
            top: margin,
            width: (canvas_width - axis_width - margin).max(0.0),
            height: (canvas_height - margin * 2.0).max(0.0),
        }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Horizontal center of slot `index` out of `count` equal slots
    pub fn slot_center(&self, index: usize, count: usize) -> f64 {
        if count == 0 {
            return self.left;
        }
        self.left + self.width * (index as f64 + 0.5) / count as f64
    }

    pub fn slot_width(&self, count: usize) -> f64 {
        if count == 0 {
            return 0.0;
        }
        self.width / count as f64
    }

    /// Pixel row of `value` on `domain`; larger values sit higher.
    pub fn y_for(&self, value: f64, domain: &AxisDomain) -> f64 {
        self.bottom() - domain.normalize(value) * self.height
    }
}

/// Every n-th label is drawn so at most `max_labels` appear
pub fn label_stride(count: usize, max_labels: usize) -> usize {
    if max_labels == 0 || count <= max_labels {
        return 1;
    }
    count.div_ceil(max_labels)
}
