use serde::{Deserialize, Serialize};

/// One layout element. The serialized form carries exactly `id`, `x`, `y`,
/// `w`, `h`; the `overlaps` flag only exists at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default = "default_size")]
    pub w: f64,
    #[serde(default = "default_size")]
    pub h: f64,
    #[serde(skip)]
    pub overlaps: bool,
}

fn default_size() -> f64 {
    50.0
}

impl Rect {
    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }
}
