pub mod clock;
pub mod console;
