//! Seeded synthetic record generation.
//!
//! Generation is driven by an explicit [`GeneratorConfig`] rather than shared
//! run state: the same seed and batch size always yield the same records.
mod records;


use fake::Fake;
use fake::faker::internet::en::{FreeEmailProvider, Password};
use fake::faker::name::en::{FirstName, LastName};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::error::GeneratorError;

pub use records::{CredentialRecord, SyntheticRecord, UserRecord};

/// Upper bound on records produced by a single generation call.
pub const DEFAULT_CEILING: usize = 1_000_000;
/// Password length bounds (inclusive).
const PASSWORD_MIN_LEN: usize = 8;
const PASSWORD_MAX_LEN: usize = 72;
/// Largest numeric suffix appended to generated email local parts.
const EMAIL_SUFFIX_MAX: u32 = 99;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub seed: u64,
    pub ceiling: usize,
}

impl GeneratorConfig {
    /// Seeds with the batch size, matching the default used by the CLI.
    #[must_use]
    pub fn for_total(total: usize) -> Self {
        Self {
            seed: u64::try_from(total).unwrap_or(u64::MAX),
            ceiling: DEFAULT_CEILING,
        }
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub const fn with_ceiling(mut self, ceiling: usize) -> Self {
        self.ceiling = ceiling;
        self
    }

    /// Checks that a batch of `total` records can be generated.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::NotSeeded`] for a zero seed, and a size
    /// error when `total` is zero or above the ceiling.
    pub const fn validate(&self, total: usize) -> Result<(), GeneratorError> {
        if self.seed == 0 {
            return Err(GeneratorError::NotSeeded);
        }
        if total == 0 {
            return Err(GeneratorError::EmptyBatch);
        }
        if total > self.ceiling {
            return Err(GeneratorError::CeilingExceeded {
                total,
                ceiling: self.ceiling,
            });
        }
        Ok(())
    }
}

struct Person {
    first: String,
    last: String,
}

pub struct RecordGenerator {
    rng: StdRng,
}

impl RecordGenerator {
    /// Builds a generator from an explicit seed.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::NotSeeded`] when the seed is zero.
    pub fn seeded(seed: u64) -> Result<Self, GeneratorError> {
        if seed == 0 {
            return Err(GeneratorError::NotSeeded);
        }
        debug!("Seeding user entropy: {}", seed);
        Ok(Self {
            rng: StdRng::seed_from_u64(seed),
        })
    }

    fn person(&mut self) -> Person {
        Person {
            first: FirstName().fake_with_rng(&mut self.rng),
            last: LastName().fake_with_rng(&mut self.rng),
        }
    }

    /// Email derived from the person's name on a free provider domain.
    fn email(&mut self, person: &Person) -> String {
        let first = local_part(&person.first);
        let last = local_part(&person.last);
        let provider: String = FreeEmailProvider().fake_with_rng(&mut self.rng);
        let local = match self.rng.gen_range(0..3u8) {
            0 => format!("{}.{}", first, last),
            1 => format!("{}_{}", first, last),
            _ => format!(
                "{}{}{}",
                first,
                last,
                self.rng.gen_range(0..=EMAIL_SUFFIX_MAX)
            ),
        };
        format!("{}@{}", local, provider).to_lowercase()
    }

    fn password(&mut self) -> String {
        Password(PASSWORD_MIN_LEN..PASSWORD_MAX_LEN.saturating_add(1)).fake_with_rng(&mut self.rng)
    }

    pub fn user(&mut self) -> UserRecord {
        let person = self.person();
        let email = self.email(&person);
        UserRecord {
            name: format!("{} {}", person.first, person.last),
            email,
            password: self.password(),
        }
    }

    pub fn credentials(&mut self) -> CredentialRecord {
        let person = self.person();
        let email = self.email(&person);
        CredentialRecord {
            email,
            password: self.password(),
        }
    }
}

/// Keeps only characters valid in an unquoted email local part.
fn local_part(name: &str) -> String {
    name.chars().filter(char::is_ascii_alphanumeric).collect()
}

/// Generates `total` user records (name, email, password).
///
/// # Errors
///
/// Returns a [`GeneratorError`] when the config is unseeded or the batch size
/// is zero or above the ceiling.
pub fn generate_users(
    total: usize,
    config: &GeneratorConfig,
) -> Result<Vec<UserRecord>, GeneratorError> {
    config.validate(total)?;
    let mut generator = RecordGenerator::seeded(config.seed)?;
    debug!("Creating {} user(s)", total);
    Ok((0..total).map(|_| generator.user()).collect())
}

/// Generates `total` credential records (email, password).
///
/// # Errors
///
/// Returns a [`GeneratorError`] when the config is unseeded or the batch size
/// is zero or above the ceiling.
pub fn generate_credentials(
    total: usize,
    config: &GeneratorConfig,
) -> Result<Vec<CredentialRecord>, GeneratorError> {
    config.validate(total)?;
    let mut generator = RecordGenerator::seeded(config.seed)?;
    debug!("Creating {} credential(s)", total);
    Ok((0..total).map(|_| generator.credentials()).collect())
}
