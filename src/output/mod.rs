//! Output formatting module
//!
//! Renders list results as one name per line, detail views as labeled
//! key/value blocks, and structured output as JSON/YAML dumps.

mod common;
mod modules;
mod organizations;
mod workspaces;

pub use self::common::{output_names, output_raw};
pub use self::modules::{output_module_rows, print_module_detail, ModuleVersionRow};
pub use self::organizations::output_organizations;
pub use self::workspaces::print_workspace_detail;
