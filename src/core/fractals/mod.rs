pub mod collatz;
pub mod escape_time;
pub mod kinds;
pub mod polynomial;
