#![allow(dead_code)]

pub mod fetcher;
pub mod pages;

pub use pages::*;
