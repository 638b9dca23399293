#[path = "../common/mod.rs"]
mod common;

mod engine;
mod reconstruct;
