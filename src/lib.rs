#![warn(clippy::all, clippy::pedantic, clippy::cargo)]
#![allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::explicit_iter_loop)]

pub mod error;
pub mod initialization;
pub mod math;
pub mod matrix;
pub mod vector;

pub use error::*;
pub use initialization::*;
pub use math::*;
pub use matrix::*;
pub use vector::*;
