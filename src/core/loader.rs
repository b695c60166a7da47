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

//! Program loading
//!
//! Programs arrive as plain-text listings: one 32-bit instruction word per
//! line, written in hexadecimal, in text-segment order. This is the
//! assembler-dump format the simulator has always consumed.
//!
//! # Listing Format
//!
//! ```text
//! # store 5 to memory and load it back
//! 24020005
//! AC020000
//! 8C030000
//! 0000000C
//! ```
//!
//! Blank lines are skipped and `#` starts a comment that runs to the end
//! of the line. An optional `0x` prefix on each word is accepted.
//!
//! # Example
//!
//! ```
//! use mipsim::core::loader::Program;
//!
//! let program = Program::parse("24020005\nAC020000\n").unwrap();
//! assert_eq!(program.words(), &[0x2402_0005, 0xAC02_0000]);
//! ```

use crate::core::error::{Result, SimError};

/// A parsed program listing
///
/// Holds the instruction words in the order they appear in the listing,
/// which is the order they are placed in the text segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    words: Vec<u32>,
}

impl Program {
    /// Parse a program listing from a string
    ///
    /// # Arguments
    ///
    /// * `source` - Listing contents (one hex word per line)
    ///
    /// # Returns
    ///
    /// - `Ok(Program)` if every word parses
    /// - `Err(SimError::InvalidWord)` naming the first offending line
    pub fn parse(source: &str) -> Result<Self> {
        let mut words = Vec::new();

        for (index, line) in source.lines().enumerate() {
            // Strip comments, then surrounding whitespace
            let token = match line.split_once('#') {
                Some((before, _)) => before.trim(),
                None => line.trim(),
            };

            if token.is_empty() {
                continue;
            }

            let digits = token
                .strip_prefix("0x")
                .or_else(|| token.strip_prefix("0X"))
                .unwrap_or(token);

            let word = u32::from_str_radix(digits, 16).map_err(|_| SimError::InvalidWord {
                line: index + 1,
                token: token.to_string(),
            })?;
            words.push(word);
        }

        Ok(Self { words })
    }

    /// Load a program listing from a file
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the listing
    pub fn from_file(path: &str) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        let program = Self::parse(&source)?;
        log::info!("loaded {} instruction words from {}", program.len(), path);
        Ok(program)
    }

    /// The instruction words in listing order
    pub fn words(&self) -> &[u32] {
        &self.words
    }

    /// Number of instruction words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the listing contained no instruction words
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
