mod comment;
mod image;
mod product;
mod similar;

pub use comment::*;
pub use image::*;
pub use product::*;
pub use similar::*;
