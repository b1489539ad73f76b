//! Tiered configuration.
//!
//! Tiers, lowest priority first, merged field by field:
//! 1. **Defaults** - built into the binary
//! 2. **Project** - `$CWD/taskloom/config.yaml`
//! 3. **User** - `~/.taskloom/config.yaml`
//! 4. **Environment** - variables below
//!
//! An explicit file (`--config` or `TASKLOOM_CONFIG_PATH`) replaces tiers 1-3.
//!
//! ## Environment Variables
//! - `TASKLOOM_CONFIG_PATH` - Explicit config file
//! - `TASKLOOM_DB_PATH` - Database path when none is given on the command line
//! - `TASKLOOM_PROMPT` - Command prompt text
//! - `TASKLOOM_NO_BANNER` - `1` or `true` hides the startup banner
//! - `TASKLOOM_USER_DIR` - User config dir (default: `~/.taskloom`)
//! - `TASKLOOM_PROJECT_DIR` - Project config dir (default: `./taskloom`)

mod loader;
mod merge;
mod types;

pub use loader::{CONFIG_FILE, ConfigLoader, ConfigPaths, ConfigTier};
pub use merge::{deep_merge, deep_merge_all};
pub use types::*;
