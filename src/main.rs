//! CLI tool to generate compositor keybinding configuration from a
//! keybinding definitions file.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::bail;
use clap::Parser;
use genkeys::config::{self, Config, DEFAULT_CONFIG_PATH, DEFAULT_KEYDEFS_PATH};
use genkeys::{Format, compile_file, generate};

const USAGE: &str = "\
USAGE: genkeys <COMP/WM> [KEYDEFS]
Reads a file of keybinding definitions and writes them in the configuration
format of a Wayland compositor or window manager.

    COMP/WM   Output format. One of:
                  sway, i3
                  hyprland
                  all (default)
              Use 'help' instead to print this help.
    KEYDEFS   File with the keybinding definitions. Defaults to
              '~/.config/genkeys.gnks'. See 'genkeys help key_defs'.

Output goes to standard output unless the configuration says otherwise.
See 'genkeys help configuring'.";

const CONFIGURING_USAGE: &str = "\
Configuring:
genkeys reads its configuration from '~/.config/genkeys.json' (or the path
given with --config). The file is JSON:

    {
        \"WriteToFile\": true,
        \"HyprlandPath\": \"~/.config/hypr/keys.conf\",
        \"SwayPath\": \"~/.config/sway/keys.conf\"
    }

WriteToFile             Write output to files instead of standard output.
HyprlandPath/SwayPath   Where each format is written when WriteToFile is set.
                        Files are replaced atomically.";

const KEYBINDINGS_USAGE: &str = "\
Defining keybindings:
Each keybinding is a statement of the form

    bind \"<keys>\" \"<shell command>\"

where <keys> are the keys to press, separated by spaces. Keys are Print,
Super, Shift, Enter, the numpad keys N_1 to N_9, or any single character.
A combination cannot start with a character key or Enter.

Example:
    bind \"Super Shift Print\" \"slurp | grim -g - $(xdg-user-dir PICTURES)/screenshot.png\"";

#[derive(Parser)]
#[command(name = "genkeys", version, about, long_about = None)]
struct Cli {
    /// Output format (sway, i3, hyprland, all) or `help`
    #[arg(default_value = "all")]
    format: String,

    /// Keybinding definitions file, or help page after `help`
    keydefs: Option<String>,

    /// Path to the JSON configuration file
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG_PATH)]
    config: String,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    if cli.format == "help" {
        return print_help(cli.keydefs.as_deref());
    }

    let format: Format = match cli.format.parse() {
        Ok(format) => format,
        Err(e) => {
            eprintln!("{USAGE}\n");
            return Err(e.into());
        }
    };

    let keydefs = cli
        .keydefs
        .as_deref()
        .map_or_else(|| config::expand_path(DEFAULT_KEYDEFS_PATH), PathBuf::from);
    let config = Config::load(&config::expand_path(&cli.config))?;

    let keybindings = compile_file(&keydefs)?;
    generate(format, &keybindings, &config)?;
    Ok(())
}

fn print_help(page: Option<&str>) -> anyhow::Result<()> {
    match page {
        None => println!("{USAGE}"),
        Some("configuring") => println!("{CONFIGURING_USAGE}"),
        Some("key_defs") => println!("{KEYBINDINGS_USAGE}"),
        Some(other) => bail!("unknown help page: `{other}`"),
    }
    Ok(())
}
