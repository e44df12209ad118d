//! Dealing shuffled playing cards onto a 3D tabletop rendered with CSS
//! transforms.

#[macro_use]
mod macros;

pub mod card;
pub mod config;
pub mod dealer;
pub mod deck;
pub mod io;
pub mod run;
pub mod table;
