pub mod ballistics;
pub mod chart;
pub mod entry;
pub mod export;
pub mod input;
pub mod reveal;
pub mod session;
pub mod surface;
pub mod window;
