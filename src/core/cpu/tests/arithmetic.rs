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
fn test_addu() {
    let (mut cpu, mut bus) = setup();
    preload_reg(&mut cpu, 1, 100);
    preload_reg(&mut cpu, 2, 200);

    // ADDU r3, r1, r2
    execute(&mut cpu, &mut bus, encode_r(1, 2, 3, 0, 0x21));
    assert_eq!(cpu.reg(3), 300);
}

#[test]
fn test_addu_wraps() {
    let (mut cpu, mut bus) = setup();
    preload_reg(&mut cpu, 1, 0xFFFF_FFFF);
    preload_reg(&mut cpu, 2, 1);

    execute(&mut cpu, &mut bus, encode_r(1, 2, 3, 0, 0x21));
    assert_eq!(cpu.reg(3), 0);
}

#[test]
fn test_add_wraps_without_trapping() {
    let (mut cpu, mut bus) = setup();
    preload_reg(&mut cpu, 1, 0x7FFF_FFFF);
    preload_reg(&mut cpu, 2, 1);

    // ADD r3, r1, r2 wraps; overflow traps are not modelled
    execute(&mut cpu, &mut bus, encode_r(1, 2, 3, 0, 0x20));
    assert_eq!(cpu.reg(3), 0x8000_0000);
}

#[test]
fn test_addi_sign_extends_immediate() {
    let (mut cpu, mut bus) = setup();
    preload_reg(&mut cpu, 1, 5);

    // ADDI r2, r1, -1
    execute(&mut cpu, &mut bus, encode_i(0x08, 1, 2, 0xFFFF));
    assert_eq!(cpu.reg(2), 4);
}

#[test]
fn test_addiu_sign_extends_immediate() {
    let (mut cpu, mut bus) = setup();
    preload_reg(&mut cpu, 1, 0);

    // ADDIU r2, r1, -4
    execute(&mut cpu, &mut bus, encode_i(0x09, 1, 2, 0xFFFC));
    assert_eq!(cpu.reg(2), 0xFFFF_FFFC);
}

#[test]
fn test_sub_and_subu_wrap() {
    let (mut cpu, mut bus) = setup();
    preload_reg(&mut cpu, 2, 1);

    // SUB r3, r0, r2
    execute(&mut cpu, &mut bus, encode_r(0, 2, 3, 0, 0x22));
    assert_eq!(cpu.reg(3), 0xFFFF_FFFF);

    // SUBU r4, r0, r2
    execute(&mut cpu, &mut bus, encode_r(0, 2, 4, 0, 0x23));
    assert_eq!(cpu.reg(4), 0xFFFF_FFFF);
}

#[test]
fn test_slt_is_signed() {
    let (mut cpu, mut bus) = setup();
    preload_reg(&mut cpu, 1, 0xFFFF_FFFF); // -1
    preload_reg(&mut cpu, 2, 1);

    // SLT r3, r1, r2 -> -1 < 1
    execute(&mut cpu, &mut bus, encode_r(1, 2, 3, 0, 0x2A));
    assert_eq!(cpu.reg(3), 1);

    // SLT r4, r2, r1 -> 1 < -1 is false
    execute(&mut cpu, &mut bus, encode_r(2, 1, 4, 0, 0x2A));
    assert_eq!(cpu.reg(4), 0);
}

#[test]
fn test_sltu_is_unsigned() {
    let (mut cpu, mut bus) = setup();
    preload_reg(&mut cpu, 1, 0xFFFF_FFFF);
    preload_reg(&mut cpu, 2, 1);

    // SLTU r3, r1, r2 -> 0xFFFFFFFF < 1 is false unsigned
    execute(&mut cpu, &mut bus, encode_r(1, 2, 3, 0, 0x2B));
    assert_eq!(cpu.reg(3), 0);

    // SLTU r4, r2, r1
    execute(&mut cpu, &mut bus, encode_r(2, 1, 4, 0, 0x2B));
    assert_eq!(cpu.reg(4), 1);
}

#[test]
fn test_slti_is_signed() {
    let (mut cpu, mut bus) = setup();
    preload_reg(&mut cpu, 1, 0xFFFF_FFFB); // -5

    // SLTI r2, r1, -1
    execute(&mut cpu, &mut bus, encode_i(0x0A, 1, 2, 0xFFFF));
    assert_eq!(cpu.reg(2), 1);
}

#[test]
fn test_sltiu_sign_extends_then_compares_unsigned() {
    let (mut cpu, mut bus) = setup();
    preload_reg(&mut cpu, 1, 5);

    // SLTIU r2, r1, 0xFFFF: the immediate sign-extends to 0xFFFFFFFF,
    // and 5 < 0xFFFFFFFF unsigned
    execute(&mut cpu, &mut bus, encode_i(0x0B, 1, 2, 0xFFFF));
    assert_eq!(cpu.reg(2), 1);

    // SLTIU r3, r1, 1
    execute(&mut cpu, &mut bus, encode_i(0x0B, 1, 3, 1));
    assert_eq!(cpu.reg(3), 0);
}
