mod generate;

pub use generate::{generate, generate_in, Generated};
