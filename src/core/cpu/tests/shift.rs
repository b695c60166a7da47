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

use super::helpers::*;

#[test]
fn test_sll() {
    let (mut cpu, mut bus) = setup();
    preload_reg(&mut cpu, 2, 0x0000_0001);

    // SLL r3, r2, 4
    execute(&mut cpu, &mut bus, encode_r(0, 2, 3, 4, 0x00));
    assert_eq!(cpu.reg(3), 0x0000_0010);
}

#[test]
fn test_srl_zero_fills() {
    let (mut cpu, mut bus) = setup();
    preload_reg(&mut cpu, 2, 0x8000_0000);

    // SRL r3, r2, 4
    execute(&mut cpu, &mut bus, encode_r(0, 2, 3, 4, 0x02));
    assert_eq!(cpu.reg(3), 0x0800_0000);
}

#[test]
fn test_sra_sign_fills() {
    let (mut cpu, mut bus) = setup();
    preload_reg(&mut cpu, 2, 0x8000_0000);

    // SRA r2, r2, 2
    execute(&mut cpu, &mut bus, encode_r(0, 2, 2, 2, 0x03));
    assert_eq!(cpu.reg(2), 0xE000_0000);
}

#[test]
fn test_sra_positive_operand_zero_fills() {
    let (mut cpu, mut bus) = setup();
    preload_reg(&mut cpu, 2, 0x4000_0000);

    execute(&mut cpu, &mut bus, encode_r(0, 2, 3, 2, 0x03));
    assert_eq!(cpu.reg(3), 0x1000_0000);
}

#[test]
fn test_sra_shift_by_zero_is_identity() {
    let (mut cpu, mut bus) = setup();
    preload_reg(&mut cpu, 2, 0xDEAD_BEEF);

    // SRA r3, r2, 0
    execute(&mut cpu, &mut bus, encode_r(0, 2, 3, 0, 0x03));
    assert_eq!(cpu.reg(3), 0xDEAD_BEEF);
}

#[test]
fn test_sllv_uses_low_five_bits_of_rs() {
    let (mut cpu, mut bus) = setup();
    preload_reg(&mut cpu, 1, 33); // low five bits = 1
    preload_reg(&mut cpu, 2, 0x0000_0001);

    // SLLV r3, r2, r1
    execute(&mut cpu, &mut bus, encode_r(1, 2, 3, 0, 0x04));
    assert_eq!(cpu.reg(3), 0x0000_0002);
}

#[test]
fn test_srlv() {
    let (mut cpu, mut bus) = setup();
    preload_reg(&mut cpu, 1, 8);
    preload_reg(&mut cpu, 2, 0xFF00_0000);

    // SRLV r3, r2, r1
    execute(&mut cpu, &mut bus, encode_r(1, 2, 3, 0, 0x06));
    assert_eq!(cpu.reg(3), 0x00FF_0000);
}

#[test]
fn test_srav_sign_fills() {
    let (mut cpu, mut bus) = setup();
    preload_reg(&mut cpu, 1, 8);
    preload_reg(&mut cpu, 2, 0xFF00_0000);

    // SRAV r3, r2, r1
    execute(&mut cpu, &mut bus, encode_r(1, 2, 3, 0, 0x07));
    assert_eq!(cpu.reg(3), 0xFFFF_0000);
}
