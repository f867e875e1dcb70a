use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Where the shuffle's randomness comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeedSource {
    /// Deterministic: same seed, same permutation.
    Fixed(i64),
    /// Fresh OS entropy on every run.
    #[default]
    Entropy,
}

impl SeedSource {
    /// Best-effort seed parsing. A missing, malformed or out-of-range seed is
    /// not an error; it falls back to [`SeedSource::Entropy`].
    pub fn from_arg(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            debug!("no seed given, using OS entropy");
            return SeedSource::Entropy;
        };
        match raw.trim().parse::<i64>() {
            Ok(seed) => SeedSource::Fixed(seed),
            Err(err) => {
                debug!("ignoring seed {raw:?} ({err}), using OS entropy");
                SeedSource::Entropy
            }
        }
    }

    pub fn is_fixed(&self) -> bool {
        matches!(self, SeedSource::Fixed(_))
    }

    pub fn rng(&self) -> StdRng {
        match *self {
            SeedSource::Fixed(seed) => {
                debug!("seeding rng with {seed}");
                StdRng::seed_from_u64(seed as u64)
            }
            SeedSource::Entropy => StdRng::from_os_rng(),
        }
    }
}
