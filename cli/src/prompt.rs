// SPDX-FileCopyrightText: 2026 Agenda contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

/// A yes/no prompt, injected into destructive commands so their flows can be
/// driven without a terminal.
pub trait Confirm {
    fn confirm(&mut self, message: &str) -> Result<bool, Box<dyn Error>>;
}

/// Interactive confirmation backed by a cliclack prompt. Defaults to "no".
pub struct CliclackConfirm;

impl Confirm for CliclackConfirm {
    fn confirm(&mut self, message: &str) -> Result<bool, Box<dyn Error>> {
        Ok(cliclack::confirm(message).initial_value(false).interact()?)
    }
}
