#![no_std]

pub mod drivers;
pub mod platform;
