#![allow(dead_code)]

pub mod entities;
