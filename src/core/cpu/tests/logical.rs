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
fn test_and_or_xor_nor() {
    let (mut cpu, mut bus) = setup();
    preload_reg(&mut cpu, 1, 0xF0F0_F0F0);
    preload_reg(&mut cpu, 2, 0xFF00_FF00);

    // AND r3, r1, r2
    execute(&mut cpu, &mut bus, encode_r(1, 2, 3, 0, 0x24));
    assert_eq!(cpu.reg(3), 0xF000_F000);

    // OR r4, r1, r2
    execute(&mut cpu, &mut bus, encode_r(1, 2, 4, 0, 0x25));
    assert_eq!(cpu.reg(4), 0xFFF0_FFF0);

    // XOR r5, r1, r2
    execute(&mut cpu, &mut bus, encode_r(1, 2, 5, 0, 0x26));
    assert_eq!(cpu.reg(5), 0x0FF0_0FF0);

    // NOR r6, r1, r2
    execute(&mut cpu, &mut bus, encode_r(1, 2, 6, 0, 0x27));
    assert_eq!(cpu.reg(6), 0x000F_000F);
}

#[test]
fn test_andi_zero_extends_immediate() {
    let (mut cpu, mut bus) = setup();
    preload_reg(&mut cpu, 1, 0xFFFF_FFFF);

    // ANDI r2, r1, 0xFF00: the immediate does not sign-extend
    execute(&mut cpu, &mut bus, encode_i(0x0C, 1, 2, 0xFF00));
    assert_eq!(cpu.reg(2), 0x0000_FF00);
}

#[test]
fn test_ori_zero_extends_immediate() {
    let (mut cpu, mut bus) = setup();
    preload_reg(&mut cpu, 1, 0x1234_0000);

    // ORI r2, r1, 0x8000
    execute(&mut cpu, &mut bus, encode_i(0x0D, 1, 2, 0x8000));
    assert_eq!(cpu.reg(2), 0x1234_8000);
}

#[test]
fn test_xori_zero_extends_immediate() {
    let (mut cpu, mut bus) = setup();
    preload_reg(&mut cpu, 1, 0x0000_FFFF);

    // XORI r2, r1, 0xF00F
    execute(&mut cpu, &mut bus, encode_i(0x0E, 1, 2, 0xF00F));
    assert_eq!(cpu.reg(2), 0x0000_0FF0);
}

#[test]
fn test_lui_places_immediate_in_upper_half() {
    let (mut cpu, mut bus) = setup();

    // LUI r2, 0x1234
    execute(&mut cpu, &mut bus, encode_i(0x0F, 0, 2, 0x1234));
    assert_eq!(cpu.reg(2), 0x1234_0000);
}

#[test]
fn test_lui_widens_unsigned() {
    let (mut cpu, mut bus) = setup();

    // LUI r2, 0x8000: the high bit must not smear into a sign extension
    execute(&mut cpu, &mut bus, encode_i(0x0F, 0, 2, 0x8000));
    assert_eq!(cpu.reg(2), 0x8000_0000);
}
