/*
 * SPDX-FileCopyrightText: 2026 The gsst developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

fn main() {
    // Exposes package, target and compiler information to `cli::build_info`
    built::write_built_file().expect("Failed to acquire build-time information");
}
