use std::collections::BTreeMap;

use serde::Deserialize;
use solana_pubkey::Pubkey;
use strum::VariantNames;

use crate::error::Error;
use crate::types::parse_pubkey;

pub const MPL_CORE_PROGRAM_ID: &str = "CoREENxT6tW1HoK8ypY1SxRMZTcVPm7R94rH4PZNhX7d";
pub const SPL_NOOP_PROGRAM_ID: &str = "noopb9bkMVfRPU8AsbpTUg8AQkHtKwMYZiFUjNRtMmV";

/// Programs this crate builds instructions for, keyed by their registry name.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
    strum_macros::VariantNames,
)]
#[strum(serialize_all = "camelCase")]
pub enum KnownProgram {
    MplCore,
    SplNoop,
}

impl KnownProgram {
    pub fn default_program_id(self) -> &'static str {
        match self {
            Self::MplCore => MPL_CORE_PROGRAM_ID,
            Self::SplNoop => SPL_NOOP_PROGRAM_ID,
        }
    }

    /// Resolve this program through `registry`, falling back to its canonical deployment.
    pub fn resolve(self, registry: &dyn ProgramRegistry) -> Result<Pubkey, Error> {
        let fallback = parse_pubkey(self.default_program_id())?;
        Ok(registry.resolve_program_identity(self.as_ref(), fallback))
    }
}

/// Maps program names to deployed addresses.
pub trait ProgramRegistry: Sync {
    /// Address registered under `namespace`, or `fallback` when nothing is registered.
    fn resolve_program_identity(&self, namespace: &str, fallback: Pubkey) -> Pubkey;
}

/// JSON configuration for [`ProgramRepository`]:
/// `{"programs": {"mplCore": "<base58 address>"}}`.
#[derive(Debug, Default, Deserialize)]
pub struct RegistryConfig {
    #[serde(default)]
    pub programs: BTreeMap<String, String>,
}

/// In-memory [`ProgramRegistry`]. Empty by default, so every lookup yields its fallback.
#[derive(Debug, Clone, Default)]
pub struct ProgramRepository {
    programs: BTreeMap<String, Pubkey>,
}

impl ProgramRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a repository from `config`. Every name must be a [`KnownProgram`].
    pub fn from_config(config: &RegistryConfig) -> Result<Self, Error> {
        let mut repository = Self::new();
        for (name, address) in &config.programs {
            if !KnownProgram::VARIANTS.contains(&name.as_str()) {
                return Err(Error::UnknownProgram {
                    name: name.clone(),
                    known: KnownProgram::VARIANTS.join(", "),
                });
            }
            repository.register(name, parse_pubkey(address)?);
        }
        Ok(repository)
    }

    pub fn from_json(json: &str) -> Result<Self, Error> {
        let config: RegistryConfig = serde_json::from_str(json)?;
        Self::from_config(&config)
    }

    pub fn register(&mut self, name: &str, program_id: Pubkey) -> Option<Pubkey> {
        tracing::debug!(program = name, "registering program override");
        self.programs.insert(name.to_string(), program_id)
    }

    pub fn get(&self, name: &str) -> Option<Pubkey> {
        self.programs.get(name).copied()
    }
}

impl ProgramRegistry for ProgramRepository {
    fn resolve_program_identity(&self, namespace: &str, fallback: Pubkey) -> Pubkey {
        self.get(namespace).unwrap_or(fallback)
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "test assertions")]
mod tests {
    use super::*;
    use crate::types::pubkey_to_string;

    #[test]
    fn known_program_names_are_camel_case() {
        assert_eq!(KnownProgram::MplCore.as_ref(), "mplCore");
        assert_eq!(KnownProgram::SplNoop.to_string(), "splNoop");
        assert_eq!(
            "mplCore".parse::<KnownProgram>().ok(),
            Some(KnownProgram::MplCore)
        );
        assert_eq!("mpl_core".parse::<KnownProgram>().ok(), None);
    }

    #[test]
    fn empty_repository_falls_back_to_canonical_address() {
        let repository = ProgramRepository::new();
        let resolved = KnownProgram::MplCore.resolve(&repository).unwrap();
        assert_eq!(pubkey_to_string(&resolved), MPL_CORE_PROGRAM_ID);
    }

    #[test]
    fn registered_program_overrides_fallback() {
        let custom = Pubkey::new_from_array([9; 32]);
        let mut repository = ProgramRepository::new();
        assert_eq!(repository.register("mplCore", custom), None);
        assert_eq!(KnownProgram::MplCore.resolve(&repository).unwrap(), custom);
        let noop = KnownProgram::SplNoop.resolve(&repository).unwrap();
        assert_eq!(pubkey_to_string(&noop), SPL_NOOP_PROGRAM_ID);
    }

    #[test]
    fn repository_loads_from_json_config() {
        let custom = pubkey_to_string(&Pubkey::new_from_array([5; 32]));
        let json = serde_json::json!({ "programs": { "mplCore": custom } }).to_string();
        let repository = ProgramRepository::from_json(&json).unwrap();
        assert_eq!(
            repository.get("mplCore"),
            Some(Pubkey::new_from_array([5; 32]))
        );
        assert!(ProgramRepository::from_json("{}").unwrap().get("mplCore").is_none());
    }

    #[test]
    fn repository_rejects_bad_config() {
        assert!(matches!(
            ProgramRepository::from_json(r#"{"programs": {"mplCore": "not-an-address"}}"#),
            Err(Error::InvalidAddress { .. })
        ));
        assert!(matches!(
            ProgramRepository::from_json("not json"),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn repository_rejects_unknown_program_name() {
        let address = pubkey_to_string(&Pubkey::new_from_array([5; 32]));
        let json = serde_json::json!({ "programs": { "mpl_core": address } }).to_string();
        let err = ProgramRepository::from_json(&json).unwrap_err();
        assert!(matches!(&err, Error::UnknownProgram { name, .. } if name == "mpl_core"));
        assert_eq!(
            err.to_string(),
            "unknown program \"mpl_core\" in registry config (expected one of: mplCore, splNoop)"
        );
        assert_eq!(KnownProgram::VARIANTS, &["mplCore", "splNoop"]);
    }
}
