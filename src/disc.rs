pub mod boundary;
pub mod burgers2d;
pub mod grid;
