//! CLI argument parsing with clap derive macros.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Keyboard hint mode, run against page descriptions.
///
/// Loads a JSON page model, installs hint mode on it and reports the labels
/// it would draw or what a sequence of key presses would do. Output is JSON
/// on stdout; logs go to stderr (set RUST_LOG=debug for detail).
#[derive(Debug, Parser)]
#[command(name = "hintkit", version)]
pub struct Cli {
    /// JSON config file (alphabet, max_hints, badge style)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the hints a fresh install would label
    #[command(after_help = "\
Examples:
  hintkit labels page.json                      # Default alphabet
  hintkit labels page.json --config hints.json  # Custom alphabet and cap
  HINTKIT_ALPHABET=qwertyuiop hintkit labels page.json")]
    Labels(LabelsArgs),

    /// Install hint mode and replay a key sequence
    #[command(after_long_help = "\
Supported Keys:
  Backspace    Drop the last typed character
  Enter        Activate the hint whose label is exactly what was typed
  Escape       Leave hint mode
  <char>       Any single character (matched case-insensitively)
  Space        A literal space

Examples:
  hintkit replay page.json --keys a             # Type one label character
  hintkit replay page.json --keys \"a s\"         # Two-character label
  hintkit replay page.json --keys \"a Enter\"     # Confirm the one-letter label A
  hintkit replay page.json --keys \"a Backspace\" # Undo, nothing activates
  hintkit replay page.json --keys d --new-tab   # Open link in a new tab")]
    Replay(ReplayArgs),

    /// Show an end-to-end usage example
    Examples,
}

#[derive(Debug, clap::Args)]
pub struct LabelsArgs {
    /// Page description (JSON)
    pub page: PathBuf,
}

#[derive(Debug, clap::Args)]
pub struct ReplayArgs {
    /// Page description (JSON)
    pub page: PathBuf,

    /// Space-separated keys to feed in order (e.g., "a s", "a Enter")
    #[arg(short, long)]
    pub keys: String,

    /// Activate links with target="_blank"
    #[arg(long)]
    pub new_tab: bool,
}

/// End-to-end example text for the `examples` command.
pub const EXAMPLES_TEXT: &str = r##"End-to-end example: follow a link with hint mode

# 1. Describe a page with three links and a text area
cat > /tmp/page.json <<'EOF'
{
  "viewport": { "width": 800, "height": 600 },
  "elements": [
    { "tag": "a", "attributes": { "id": "home", "href": "/" },
      "rect": { "left": 10, "top": 10, "width": 60, "height": 16 } },
    { "tag": "a", "attributes": { "id": "docs", "href": "/docs" },
      "rect": { "left": 80, "top": 10, "width": 60, "height": 16 } },
    { "tag": "a", "attributes": { "id": "blog", "href": "/blog", "target": "main" },
      "rect": { "left": 150, "top": 10, "width": 60, "height": 16 } },
    { "tag": "textarea", "attributes": { "id": "notes" },
      "rect": { "left": 10, "top": 40, "width": 300, "height": 80 } }
  ]
}
EOF

# 2. See which labels hint mode draws (A, D, F, J)
hintkit labels /tmp/page.json

# 3. Type "d" to click the second link
hintkit replay /tmp/page.json --keys d

# 4. Type "j" to focus the text area (final_signal is "mode::insert")
hintkit replay /tmp/page.json --keys j

# 5. Open the third link in a new tab; its target is restored afterwards
hintkit replay /tmp/page.json --keys f --new-tab

# 6. Change your mind: nothing is clicked, hint mode stays installed
hintkit replay /tmp/page.json --keys "a Backspace"
"##;
