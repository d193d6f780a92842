//! Pipeline configuration.
//!
//! File names and tool locations are fixed; only the project root, the local packer directory
//! and (for tests) the tool specs themselves can be overridden.

mod builder;
mod core;

pub use self::builder::SettingsBuilder;
pub use self::core::Settings;

/// Name given to the build artifact (without extension).
pub const PRODUCT_NAME: &str = "Hotkeys";

/// Application entry point handed to the compiler.
pub const ENTRY_SCRIPT: &str = "main.py";

/// Icon embedded into the build artifact, relative to the root.
pub const ICON_PATH: &str = "assets/hotkeys.ico";

/// Auxiliary resource bundled next to the application, relative to the root.
pub const RESOURCE_FILE: &str = "hotkeys.ini";

/// Build output directory, relative to the root.
pub const DIST_DIR: &str = "dist";

/// Packer project descriptor, relative to the root.
pub const PROJECT_FILE: &str = "hotkeys.evb";

/// Appended to the product name to form the boxed artifact name.
pub const BOXED_SUFFIX: &str = "_boxed";

/// Compiler/bundler program looked up on `PATH`.
pub const BUILD_TOOL: &str = "pyinstaller";

/// Packer console executable file name.
pub const PACKER_EXE: &str = "enigmavbconsole.exe";

/// Packer install directory below a Program Files root.
pub const PACKER_INSTALL_DIR: &str = "Enigma Virtual Box";

/// 64-bit Program Files root.
pub const PROGRAM_FILES_VAR: &str = "ProgramFiles";

/// 32-bit (WOW64) Program Files root.
pub const PROGRAM_FILES_X86_VAR: &str = "ProgramFiles(x86)";
