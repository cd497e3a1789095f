#![allow(dead_code)]

pub mod routine;
pub mod synthetic_image;
