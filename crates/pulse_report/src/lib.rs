pub mod linkedin;
pub mod text;
pub mod youtube;

/// Display width for share text in rendered reports. Display only; ranking
/// and sums always use the full text.
pub const SHARE_TEXT_WIDTH: usize = 50;
