pub mod line_segment;
pub mod rectangle;
pub mod vector;
