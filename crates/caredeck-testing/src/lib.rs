//! Testing harness for Caredeck cards.

mod robot;

pub use robot::*;
