//! `--set-default <template>`

use crate::config::ConfigStore;
use crate::error::GemmitError;

/// Persist `name` as the default template and confirm on stdout.
pub fn run_set_default(store: &ConfigStore, name: &str) -> Result<(), GemmitError> {
    store.set_default_template(name)?;
    println!("Default template set to '{}'.", name);
    Ok(())
}
