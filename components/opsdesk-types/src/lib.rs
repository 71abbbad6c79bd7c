#![deny(warnings)]

pub mod assets;
pub mod monitoring;
pub mod tasks;
