//! Dynamically registered command-line flags
//!
//! Hosts register `--name <value>` flags at runtime with [`FlagSet::set_flag`]
//! before parsing. Parsed values land in a [`FlagStore`], which is read-only
//! afterwards. The `config` flag is always registered.

use crate::error::Result;
use clap::{Arg, ArgMatches, Command};
use std::collections::HashMap;
use std::ffi::OsString;

/// Name of the flag that points at the default config file
pub const CONFIG_FLAG: &str = "config";

#[derive(Debug, Clone, PartialEq)]
pub struct FlagSpec {
    pub name: String,
    pub default: String,
    pub usage: String,
}

/// Registered flag definitions
#[derive(Debug, Clone)]
pub struct FlagSet {
    specs: Vec<FlagSpec>,
}

impl Default for FlagSet {
    fn default() -> Self {
        Self::new()
    }
}

impl FlagSet {
    /// Create a flag set with the built-in `config` flag
    pub fn new() -> Self {
        let mut flags = Self { specs: Vec::new() };
        flags.set_flag(CONFIG_FLAG, "", "Location of the config file");
        flags
    }

    /// Register a string flag. Registering an existing name replaces it.
    pub fn set_flag<N, V, U>(&mut self, name: N, default: V, usage: U) -> &mut Self
    where
        N: Into<String>,
        V: Into<String>,
        U: Into<String>,
    {
        let spec = FlagSpec {
            name: name.into(),
            default: default.into(),
            usage: usage.into(),
        };

        match self.specs.iter_mut().find(|s| s.name == spec.name) {
            Some(existing) => *existing = spec,
            None => self.specs.push(spec),
        }
        self
    }

    pub fn specs(&self) -> &[FlagSpec] {
        &self.specs
    }

    /// Add every registered flag to `cmd` as a global long option
    pub fn augment(&self, mut cmd: Command) -> Command {
        for spec in &self.specs {
            let mut arg = Arg::new(spec.name.clone())
                .long(spec.name.clone())
                .value_name("VALUE")
                .help(spec.usage.clone())
                .global(true);
            if !spec.default.is_empty() {
                arg = arg.default_value(spec.default.clone());
            }
            cmd = cmd.arg(arg);
        }
        cmd
    }

    /// Parse a standalone command line (first item is the program name)
    pub fn parse_from<I, T>(&self, args: I) -> Result<FlagStore>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self
            .augment(Command::new(env!("CARGO_PKG_NAME")))
            .try_get_matches_from(args)?;
        Ok(self.store_from_matches(&matches))
    }

    /// Pull the registered flags out of already parsed matches
    pub fn store_from_matches(&self, matches: &ArgMatches) -> FlagStore {
        let values = self
            .specs
            .iter()
            .filter_map(|spec| {
                matches
                    .try_get_one::<String>(&spec.name)
                    .ok()
                    .flatten()
                    .map(|value| (spec.name.clone(), value.clone()))
            })
            .collect();
        FlagStore { values }
    }
}

/// Parsed flag values
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlagStore {
    values: HashMap<String, String>,
}

impl FlagStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Value of flag `name`, or an empty string if it was never set
    pub fn flag(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn is_set(&self, name: &str) -> bool {
        !self.flag(name).is_empty()
    }
}
