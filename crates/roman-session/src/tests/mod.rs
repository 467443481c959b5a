mod proptest_form;

use crate::settings::{parse_settings_toml, DEFAULT_SETTINGS_TOML};
use crate::ConversionForm;

pub(super) fn default_form() -> ConversionForm {
    let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
    ConversionForm::with_settings(&s)
}
