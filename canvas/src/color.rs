///
/// Representation of a colour
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub enum Color {
    Rgba(f32, f32, f32, f32)
}

impl Color {
    ///
    /// Returns this colour as RGBA components
    ///
    pub fn to_rgba(&self) -> (f32, f32, f32, f32) {
        match self {
            &Color::Rgba(r, g, b, a) => (r, g, b, a)
        }
    }

    ///
    /// Returns a new colour that's the same as this one except with a different alpha value
    ///
    pub fn with_alpha(&self, new_alpha: f32) -> Color {
        match self {
            &Color::Rgba(r, g, b, _) => Color::Rgba(r, g, b, new_alpha)
        }
    }

    ///
    /// Formats this colour as a CSS-style hex string (eg, '#ff8000')
    ///
    pub fn to_hex(&self) -> String {
        let (r, g, b, _)    = self.to_rgba();
        let to_byte         = |component: f32| (component.max(0.0).min(1.0) * 255.0).round() as u8;

        format!("#{:02x}{:02x}{:02x}", to_byte(r), to_byte(g), to_byte(b))
    }
}
