//! # Tool Path Resolver
//!
//! Finds the ffprobe executable:
//! - Explicit path from the configuration
//! - Tools directory set through `VIDEO_RESOLUTION_TOOLS_DIR`
//! - System `PATH`

use std::env;
use std::path::PathBuf;
use tracing::debug;

/// Environment variable pointing at a directory holding bundled tools
pub const TOOLS_DIR_ENV: &str = "VIDEO_RESOLUTION_TOOLS_DIR";

/// Tool path resolver for bundled and system-installed tools
pub struct ToolPathResolver {
    /// Directory where tools are bundled, if any
    tools_dir: Option<PathBuf>,
}

impl ToolPathResolver {
    /// Create a new path resolver
    pub fn new() -> Self {
        let tools_dir = env::var_os(TOOLS_DIR_ENV)
            .map(PathBuf::from)
            .filter(|p| p.is_dir());

        Self::with_tools_dir(tools_dir)
    }

    pub fn with_tools_dir(tools_dir: Option<PathBuf>) -> Self {
        debug!("Tools directory: {:?}", tools_dir);
        Self { tools_dir }
    }

    /// Resolve the path to a specific tool
    pub fn resolve_tool(&self, tool_name: &str) -> Option<PathBuf> {
        if let Some(ref tools_dir) = self.tools_dir {
            let bundled_path = tools_dir.join(executable_name(tool_name));
            if bundled_path.is_file() {
                debug!("Using bundled tool: {} -> {:?}", tool_name, bundled_path);
                return Some(bundled_path);
            }
            debug!("Bundled path does not exist: {:?}", bundled_path);
        }

        if let Some(system_path) = self.find_in_system_path(tool_name) {
            debug!("Using system tool: {} -> {:?}", tool_name, system_path);
            return Some(system_path);
        }

        debug!("Tool not found: {}", tool_name);
        None
    }

    /// Find tool in system PATH
    fn find_in_system_path(&self, tool_name: &str) -> Option<PathBuf> {
        let tool_with_ext = executable_name(tool_name);

        env::split_paths(&env::var_os("PATH")?)
            .map(|dir| dir.join(&tool_with_ext))
            .find(|path| path.is_file())
    }

    /// Check if a tool is available and provide installation instructions if not
    pub fn check_tool_with_instructions(&self, tool_name: &str) -> Result<PathBuf, String> {
        self.resolve_tool(tool_name)
            .ok_or_else(|| missing_tool_message(tool_name))
    }
}

impl Default for ToolPathResolver {
    fn default() -> Self {
        Self::new()
    }
}

fn executable_name(tool_name: &str) -> String {
    let extension = if cfg!(windows) { ".exe" } else { "" };
    format!("{}{}", tool_name, extension)
}

/// Human-readable message for a tool that could not be found or started
pub fn missing_tool_message(tool_name: &str) -> String {
    format!(
        "Tool '{}' not found. Install it with: {}",
        tool_name,
        install_instructions(tool_name)
    )
}

/// Installation instructions for the current platform
pub fn install_instructions(tool_name: &str) -> String {
    match tool_name {
        "ffprobe" | "ffmpeg" => {
            if cfg!(target_os = "macos") {
                "brew install ffmpeg".to_string()
            } else if cfg!(windows) {
                "winget install ffmpeg  # or download from https://ffmpeg.org/download.html".to_string()
            } else {
                "sudo apt-get install ffmpeg".to_string()
            }
        }
        _ => format!("your package manager ({})", tool_name),
    }
}
