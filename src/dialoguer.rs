use dialoguer::Confirm;

use crate::error::Result;

/// Asks the user a yes/no question unless confirmations are skipped.
pub fn confirm(skip: bool, prompt: String) -> Result<bool> {
    if skip {
        return Ok(true);
    }

    Ok(Confirm::new().with_prompt(prompt).default(false).interact()?)
}
