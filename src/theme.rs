use eframe::egui::{self, Color32};
use palette::{LinSrgb, Mix, Srgb};

// ---------------------------------------------------------------------------
// Theme – fixed dark look of the trajectory view
// ---------------------------------------------------------------------------

/// Colours, line width and title of the trajectory view.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Window, panel and plot background.
    pub background: Color32,
    /// Accent colour of the trajectory line.
    pub line: Color32,
    /// Title, axis labels, ticks and box edges.
    pub text: Color32,
    pub line_width: f32,
    pub title: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color32::from_rgb(0x1e, 0x1e, 0x2e),
            line: Color32::from_rgb(0xfa, 0xb3, 0x87),
            text: Color32::from_rgb(0xcd, 0xd6, 0xf4),
            line_width: 2.0,
            title: "Projectile Trajectory".to_string(),
        }
    }
}

impl Theme {
    /// Colour for the bounding-box edges: text faded into the background.
    pub fn grid(&self) -> Color32 {
        mix(self.background, self.text, 0.35)
    }

    /// Install the theme into egui's dark visuals.
    pub fn apply(&self, ctx: &egui::Context) {
        let mut visuals = egui::Visuals::dark();
        visuals.panel_fill = self.background;
        visuals.window_fill = self.background;
        visuals.extreme_bg_color = self.background;
        visuals.faint_bg_color = self.background;
        visuals.override_text_color = Some(self.text);
        ctx.set_visuals(visuals);
    }
}

/// Blend `a` towards `b` by `factor` in linear RGB.
pub fn mix(a: Color32, b: Color32, factor: f32) -> Color32 {
    let a = to_linear(a);
    let b = to_linear(b);
    let mixed: Srgb<u8> = Srgb::<f32>::from_linear(a.mix(b, factor.clamp(0.0, 1.0))).into_format();
    Color32::from_rgb(mixed.red, mixed.green, mixed.blue)
}

fn to_linear(c: Color32) -> LinSrgb {
    Srgb::<u8>::new(c.r(), c.g(), c.b()).into_format::<f32>().into_linear()
}
