pub mod surface;
pub mod viewer2d;
