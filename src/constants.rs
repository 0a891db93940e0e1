//! Common constants used throughout create-simple-ai.

/// Binary name, also used as the fallback git identity.
pub const CLI_NAME: &str = "create-simple-ai";

/// One-line description shown in `--help`.
pub const CLI_DESCRIPTION: &str = "Create simple AI-powered full-stack applications";

/// Filename suffix marking a file as template source. Stripped from the output path.
pub const TEMPLATE_SUFFIX: &str = "j2";

/// Extensions that are always copied byte-for-byte, never rendered.
pub const BINARY_EXTENSIONS: [&str; 10] =
    ["png", "ico", "svg", "jpg", "jpeg", "gif", "webp", "woff", "woff2", "ttf"];

/// Environment variable that overrides the bundled template root.
pub const TEMPLATE_DIR_ENV: &str = "CREATE_SIMPLE_AI_TEMPLATES";

/// Subdirectories of the template root.
pub const BASE_TEMPLATES_DIR: &str = "base";
pub const FRAMEWORK_TEMPLATES_DIR: &str = "frameworks";
pub const LIBRARY_TEMPLATES_DIR: &str = "libraries";
pub const EXAMPLE_TEMPLATES_DIR: &str = "examples";

/// Project manifest written by the base templates.
pub const MANIFEST_FILE: &str = "package.json";

/// Name used for a project when none is given interactively.
pub const DEFAULT_PROJECT_NAME: &str = "my-app";
