// Library exports for plan-coder
// This allows the modules to be imported in tests and external code

pub mod approval;
pub mod architect;
pub mod config;
pub mod editor;
pub mod git;
pub mod io;
pub mod session;
