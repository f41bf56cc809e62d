//! Working-script validation for human-facing text fields.
//!
//! The field staff writes zone names, sub-unit names and expense notes in
//! Urdu. Text is NFC-normalized first so decomposed sequences coming from
//! different keyboards compare the same way.

use unicode_normalization::UnicodeNormalization;

use crate::{LedgerError, ResultLedger};

const BLOCK_START: char = '\u{0600}';
const BLOCK_END: char = '\u{06FF}';

pub(crate) fn is_working_script(text: &str) -> bool {
    text.nfc()
        .all(|ch| ch.is_whitespace() || (BLOCK_START..=BLOCK_END).contains(&ch))
}

pub(crate) fn ensure_working_script(field: &str, text: &str) -> ResultLedger<()> {
    if !is_working_script(text) {
        return Err(LedgerError::Validation(format!(
            "{field} must be written in Urdu script"
        )));
    }
    Ok(())
}
