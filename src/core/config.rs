// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Simulator configuration
//!
//! Configuration is a small TOML document covering the memory layout, the
//! entry point, and the default step budget. Every field has a default, so
//! an empty document (or no configuration file at all) yields a working
//! simulator.
//!
//! # Example
//!
//! ```
//! use mipsim::core::config::SimConfig;
//!
//! let config = SimConfig::parse(
//!     r#"
//!     entry = 0x00400000
//!     step_limit = 10000
//!
//!     [memory]
//!     text_size = 0x00200000
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.entry, 0x0040_0000);
//! assert_eq!(config.memory.text_size, 0x0020_0000);
//! ```

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, SimError};

/// Segment bases and sizes of the simulated address space
///
/// Sizes are in bytes and should be whole numbers of words; a word that
/// would straddle the end of a segment is treated as unmapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryLayout {
    /// Base address of the data segment
    pub data_base: u32,
    /// Size of the data segment in bytes
    pub data_size: u32,
    /// Base address of the text segment
    pub text_base: u32,
    /// Size of the text segment in bytes
    pub text_size: u32,
    /// Address one past the highest stack byte
    pub stack_top: u32,
    /// Size of the stack segment in bytes
    pub stack_size: u32,
}

impl MemoryLayout {
    /// Lowest address of the stack segment
    pub fn stack_base(&self) -> u32 {
        self.stack_top - self.stack_size
    }
}

impl Default for MemoryLayout {
    fn default() -> Self {
        Self {
            data_base: 0x0000_0000,
            data_size: 0x0010_0000,
            text_base: 0x0040_0000,
            text_size: 0x0010_0000,
            stack_top: 0x7FF0_0000,
            stack_size: 0x0010_0000,
        }
    }
}

/// Top-level simulator configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Address programs are loaded at and the PC reset value
    pub entry: u32,

    /// Default cap on executed instructions per run
    pub step_limit: u64,

    /// Segment bases and sizes
    pub memory: MemoryLayout,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            entry: 0x0040_0000,
            step_limit: 1_000_000,
            memory: MemoryLayout::default(),
        }
    }
}

impl SimConfig {
    /// Parse a configuration from a TOML document
    ///
    /// Missing fields take their defaults.
    ///
    /// # Arguments
    ///
    /// * `data` - TOML document contents
    ///
    /// # Returns
    ///
    /// - `Ok(SimConfig)` if parsing succeeds
    /// - `Err(SimError::InvalidConfig)` otherwise
    pub fn parse(data: &str) -> Result<Self> {
        toml::from_str(data).map_err(|e| SimError::InvalidConfig {
            message: e.to_string(),
        })
    }

    /// Load a configuration from a TOML file
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration file
    pub fn from_file(path: &str) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Self::parse(&data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SimConfig::default();
        assert_eq!(config.entry, 0x0040_0000);
        assert_eq!(config.step_limit, 1_000_000);
        assert_eq!(config.memory.text_base, 0x0040_0000);
        assert_eq!(config.memory.stack_base(), 0x7FE0_0000);
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = SimConfig::parse("").unwrap();
        assert_eq!(config, SimConfig::default());
    }

    #[test]
    fn test_parse_overrides() {
        let config = SimConfig::parse(
            r#"
            entry = 0x00400100
            step_limit = 42

            [memory]
            data_base = 0x10000000
            data_size = 0x00010000
            "#,
        )
        .unwrap();

        assert_eq!(config.entry, 0x0040_0100);
        assert_eq!(config.step_limit, 42);
        assert_eq!(config.memory.data_base, 0x1000_0000);
        assert_eq!(config.memory.data_size, 0x0001_0000);
        // Untouched fields keep their defaults
        assert_eq!(config.memory.text_base, 0x0040_0000);
    }

    #[test]
    fn test_invalid_document_is_rejected() {
        let err = SimConfig::parse("entry = \"not an address\"").unwrap_err();
        assert!(matches!(err, SimError::InvalidConfig { .. }));
    }
}
