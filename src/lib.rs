pub mod config;
pub mod count;
pub mod error;
pub mod output;
pub mod permutation;
pub mod seed;

pub use config::GeneratorConfig;
pub use count::parse_count;
pub use error::{Error, Result};
pub use output::{print_sequence, write_sequence, OUTPUT_BUFFER_SIZE};
pub use permutation::Sequence;
pub use seed::SeedSource;
