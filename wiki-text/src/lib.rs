pub mod encode;
pub mod normalize;
pub mod style;

pub use encode::encode;
pub use normalize::normalize;
pub use style::{classify_line, style, style_lines, StyledLine};
