//! WebNN context options.
//!
//! These mirror the `MLContextOptions` a host passes when creating the
//! context the graph is built against. The only capability the builders
//! consult today is int64 support, which depends on the device type unless
//! explicitly overridden.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Device the WebNN context runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    /// CPU backend.
    #[default]
    Cpu,
    /// GPU backend.
    Gpu,
    /// NPU backend.
    Npu,
}

/// Power preference hint for the host creating the context.
///
/// Carried with the options so a single document describes the context; the
/// builders do not read it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PowerPreference {
    /// Let the implementation decide.
    #[default]
    Default,
    /// Prefer throughput.
    HighPerformance,
    /// Prefer battery life.
    LowPower,
}

/// Options for the context a model is built against.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContextOptions {
    /// Target device.
    pub device_type: DeviceType,
    /// Power preference, left to the host.
    pub power_preference: PowerPreference,
    /// Explicit int64 support; derived from the device type when unset.
    pub int64_supported: Option<bool>,
}

impl ContextOptions {
    /// Create options with default settings (CPU).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the device type.
    pub fn with_device_type(mut self, device_type: DeviceType) -> Self {
        self.device_type = device_type;
        self
    }

    /// Set the power preference.
    pub fn with_power_preference(mut self, preference: PowerPreference) -> Self {
        self.power_preference = preference;
        self
    }

    /// Force int64 support on or off.
    pub fn with_int64_supported(mut self, supported: bool) -> Self {
        self.int64_supported = Some(supported);
        self
    }

    /// Whether int64 operands can be created in this context.
    pub fn is_int64_supported(&self) -> bool {
        self.int64_supported
            .unwrap_or(self.device_type == DeviceType::Cpu)
    }

    /// Parse options from a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load options from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }
}
