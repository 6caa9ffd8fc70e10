pub mod indicator;
pub mod input;
pub mod session;

pub use session::run;
