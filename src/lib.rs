pub mod harness;
pub mod ring;
