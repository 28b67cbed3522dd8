pub mod check;
pub mod shift;
