pub mod reveal;
pub mod session;
