//! Repository configuration collected from the user

use crate::error::ScaffoldError;
use std::fmt;
use std::str::FromStr;

/// UI frameworks with dedicated lint and transpile fragments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Framework {
    React,
    #[value(alias = "vuejs")]
    Vue,
}

impl Framework {
    pub const ALL: [Framework; 2] = [Framework::React, Framework::Vue];

    pub fn display_name(&self) -> &'static str {
        match self {
            Framework::React => "React",
            Framework::Vue => "VueJS",
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Framework {
    type Err = ScaffoldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "react" => Ok(Framework::React),
            "vue" | "vuejs" => Ok(Framework::Vue),
            _ => Err(ScaffoldError::UnknownFramework {
                input: s.to_string(),
                available: "react, vue".to_string(),
            }),
        }
    }
}

/// Answers that drive every template selection
///
/// Built once per run and passed by reference from the prompts to the
/// resolver; nothing downstream mutates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RepoConfig {
    pub use_type_checking: bool,
    pub framework: Framework,
}

impl RepoConfig {
    pub fn new(use_type_checking: bool, framework: Framework) -> Self {
        Self {
            use_type_checking,
            framework,
        }
    }

    /// Every combination of answers, handy for exhaustive checks
    pub fn all() -> Vec<RepoConfig> {
        let mut configs = Vec::new();
        for framework in Framework::ALL {
            for use_type_checking in [false, true] {
                configs.push(RepoConfig::new(use_type_checking, framework));
            }
        }
        configs
    }
}
