pub mod layout;
pub mod overlap;
pub mod rect;
pub mod sample;

pub use layout::{default_layout_dir, load_layout, save_layout};
pub use overlap::compute_overlaps;
pub use rect::Rect;
pub use sample::sample_rects;
