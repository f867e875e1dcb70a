use crate::count::parse_count;
use crate::error::Result;
use crate::permutation::Sequence;
use crate::seed::SeedSource;
use log::debug;

/// Fully resolved run: how many values to permute and how to seed the
/// shuffle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub count: usize,
    pub seed: SeedSource,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            count: 0,
            seed: SeedSource::Entropy,
        }
    }
}

impl GeneratorConfig {
    pub fn new(count: usize, seed: SeedSource) -> Self {
        GeneratorConfig { count, seed }
    }

    /// Resolves raw command-line arguments. Only `count` can fail; the seed
    /// is best-effort.
    pub fn from_args(count: &str, seed: Option<&str>) -> Result<Self> {
        let count = parse_count(count)?;
        let seed = SeedSource::from_arg(seed);
        debug!("generating {count} values, seed source {seed:?}");
        Ok(GeneratorConfig { count, seed })
    }

    pub fn generate(&self) -> Sequence {
        let mut rng = self.seed.rng();
        Sequence::generate(self.count, &mut rng)
    }
}
