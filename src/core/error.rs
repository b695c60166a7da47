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

//! Simulator error types

use thiserror::Error;

/// Result type for simulator operations
pub type Result<T> = std::result::Result<T, SimError>;

/// Simulator error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    /// The fetched word does not decode to any known primary opcode
    #[error("unrecognized opcode 0x{opcode:02X} at PC=0x{pc:08X}")]
    UnrecognizedOpcode {
        /// The offending opcode field (bits 31..26)
        opcode: u8,
        /// Address of the fetched instruction
        pc: u32,
    },

    /// A SPECIAL instruction carries an unknown function code
    #[error("unrecognized SPECIAL function 0x{funct:02X} at PC=0x{pc:08X}")]
    UnrecognizedFunction {
        /// The offending function field (bits 5..0)
        funct: u8,
        /// Address of the fetched instruction
        pc: u32,
    },

    /// A REGIMM instruction carries an unknown branch code
    #[error("unrecognized REGIMM code 0x{code:02X} at PC=0x{pc:08X}")]
    UnrecognizedRegimm {
        /// The offending rt field (bits 20..16)
        code: u8,
        /// Address of the fetched instruction
        pc: u32,
    },

    /// A program listing contains a token that is not a 32-bit hex word
    #[error("program listing line {line}: invalid instruction word '{token}'")]
    InvalidWord {
        /// 1-based line number in the listing
        line: usize,
        /// The token that failed to parse
        token: String,
    },

    /// A program does not fit in the text segment
    #[error("program of {words} words does not fit in the text segment ({capacity} words free)")]
    ProgramTooLarge {
        /// Number of instruction words in the program
        words: usize,
        /// Remaining word capacity from the entry point
        capacity: usize,
    },

    /// Configuration file error
    #[error("invalid configuration: {message}")]
    InvalidConfig {
        /// Error message
        message: String,
    },

    /// I/O error (file operations)
    #[error("I/O error: {message}")]
    IoError {
        /// Error message
        message: String,
    },
}

impl From<std::io::Error> for SimError {
    fn from(err: std::io::Error) -> Self {
        SimError::IoError {
            message: err.to_string(),
        }
    }
}
