//! Entity classes recognized by the platform.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Wire name of the proxy entity class.
pub const ENTITY_PROXY_CLASS: &str = "proxy";

/// Wire name of the agent entity class.
pub const ENTITY_AGENT_CLASS: &str = "agent";

/// A category of monitored entity.
///
/// The set is closed: parsing any other name fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityClass {
    /// Entity created on behalf of a resource that runs no agent.
    Proxy,
    /// Entity backed by a running agent.
    Agent,
}

impl EntityClass {
    /// All recognized classes.
    pub const ALL: [EntityClass; 2] = [EntityClass::Proxy, EntityClass::Agent];

    /// Returns the wire name of this class.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Proxy => ENTITY_PROXY_CLASS,
            Self::Agent => ENTITY_AGENT_CLASS,
        }
    }
}

impl fmt::Display for EntityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityClass {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ENTITY_PROXY_CLASS => Ok(Self::Proxy),
            ENTITY_AGENT_CLASS => Ok(Self::Agent),
            other => Err(Error::UnsupportedEntityClass(other.to_string())),
        }
    }
}
