/// An opaque sRGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Color of every group other than the selected one.
    pub const NEUTRAL: Self = Self::rgb(128, 128, 128);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Cyclic rainbow: a cubehelix sweep where `t` and `t + 1` map to the same
/// hue.
pub fn rainbow(t: f64) -> Color {
    let t = if (0.0..=1.0).contains(&t) {
        t
    } else {
        t - t.floor()
    };
    let ts = (t - 0.5).abs();

    cubehelix(360.0 * t - 100.0, 1.5 - 1.5 * ts, 0.8 - 0.9 * ts)
}

fn cubehelix(hue_degrees: f64, saturation: f64, lightness: f64) -> Color {
    const A: f64 = -0.14861;
    const B: f64 = 1.78277;
    const C: f64 = -0.29227;
    const D: f64 = -0.90649;
    const E: f64 = 1.97294;

    let hue = (hue_degrees + 120.0).to_radians();
    let amplitude = saturation * lightness * (1.0 - lightness);
    let (sin, cos) = hue.sin_cos();

    let channel = |value: f64| (value * 255.0).round().clamp(0.0, 255.0) as u8;

    Color::rgb(
        channel(lightness + amplitude * (A * cos + B * sin)),
        channel(lightness + amplitude * (C * cos + D * sin)),
        channel(lightness + amplitude * (E * cos)),
    )
}

/// Group id to color mapping for one grouping.
///
/// The scale's domain is `[0, group_count]`, so it must be rebuilt with
/// [`Palette::assign`] whenever the grouping is recomputed. A focused
/// palette keeps the focused group's own color and greys out the rest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    group_count: usize,
    focus: Option<usize>,
}

impl Palette {
    pub fn assign(group_count: usize) -> Self {
        Self {
            group_count,
            focus: None,
        }
    }

    pub fn focused(self, group: usize) -> Self {
        Self {
            focus: Some(group),
            ..self
        }
    }

    pub fn group_count(self) -> usize {
        self.group_count
    }

    pub fn color(self, group: usize) -> Color {
        match self.focus {
            Some(focus) if focus != group => Color::NEUTRAL,
            _ => self.base_color(group),
        }
    }

    fn base_color(self, group: usize) -> Color {
        let span = self.group_count.max(1) as f64;
        rainbow(group as f64 / span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rainbow_endpoints() {
        assert_eq!(rainbow(0.0), Color::rgb(110, 64, 170));
        assert_eq!(rainbow(0.5), Color::rgb(175, 240, 91));
        assert_eq!(rainbow(1.0), rainbow(0.0));
        assert_eq!(rainbow(1.5), rainbow(0.5));
    }

    #[test]
    fn neighbouring_groups_get_distinct_colors() {
        let palette = Palette::assign(4);
        let colors = (0..4).map(|group| palette.color(group)).collect::<Vec<_>>();

        for (index, color) in colors.iter().enumerate() {
            assert!(!colors[index + 1..].contains(color));
        }
    }

    #[test]
    fn zero_groups_does_not_divide_by_zero() {
        let palette = Palette::assign(0);
        assert_eq!(palette.color(0), rainbow(0.0));
    }

    #[test]
    fn stale_palette_differs_after_regrouping() {
        assert_ne!(Palette::assign(2).color(1), Palette::assign(5).color(1));
    }

    #[test]
    fn focus_keeps_own_color_and_greys_the_rest() {
        let palette = Palette::assign(3);
        let focused = palette.focused(1);

        assert_eq!(focused.color(1), palette.color(1));
        assert_eq!(focused.color(0), Color::NEUTRAL);
        assert_eq!(focused.color(2), Color::NEUTRAL);
        assert_eq!(Palette::assign(3), palette);
    }

    #[test]
    fn hex_formatting() {
        assert_eq!(Color::rgb(110, 64, 170).to_hex(), "#6e40aa");
    }
}
