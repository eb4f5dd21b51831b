use clap::{Args, Parser, Subcommand, ValueEnum};
use refpath::{Config, Mode, TreeConfig, TreeStyle, Verbosity, DEFAULT_TARGET_PATH};
use std::path::PathBuf;
use std::process::ExitCode;

/// Rewrite hardcoded require() paths after a file has moved, and dump directory structures.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Only print errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
    /// Also print scanned directories and files that are already up to date
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rewrite references to the target file in place
    Fix(RewriteArgs),
    /// Report references that are not up to date, without writing anything
    Check(RewriteArgs),
    /// Write the folder and file names under a directory to a text file
    Tree(TreeArgs),
}

#[derive(Debug, Args)]
struct RewriteArgs {
    /// Directory to scan
    #[arg(default_value = ".")]
    root: PathBuf,
    /// Where the target file is, relative to ROOT
    #[arg(short, long, default_value = DEFAULT_TARGET_PATH)]
    target_path: PathBuf,
    /// File name to look for in references [default: file name of TARGET_PATH]
    #[arg(short = 'n', long)]
    target_name: Option<String>,
    /// Extension of files to scan. Can be repeated
    #[arg(short, long = "ext", default_values = ["js", "ts"])]
    extensions: Vec<String>,
    /// Stop at the first file that cannot be read or written
    #[arg(long)]
    fail_fast: bool,
}

impl RewriteArgs {
    fn into_config(self, mode: Mode, verbosity: Verbosity) -> Config {
        Config {
            root: self.root,
            target_path: self.target_path,
            target_name: self.target_name,
            extensions: self.extensions,
            mode,
            verbosity,
            fail_fast: self.fail_fast,
        }
    }
}

#[derive(Debug, Args)]
struct TreeArgs {
    /// Directory to dump
    #[arg(default_value = ".")]
    root: PathBuf,
    /// File to write the structure to
    #[arg(short, long, default_value = "file_structure.txt")]
    output: PathBuf,
    /// How nesting is drawn
    #[arg(short, long, value_enum, default_value_t = StyleArg::Indent)]
    style: StyleArg,
    /// Leave out directories this deep or deeper [default: none for indent, 6 for branch]
    #[arg(short, long)]
    max_depth: Option<usize>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StyleArg {
    /// Four spaces per level
    Indent,
    /// Box drawing characters
    Branch,
}

impl From<StyleArg> for TreeStyle {
    fn from(style: StyleArg) -> Self {
        match style {
            StyleArg::Indent => TreeStyle::Indent,
            StyleArg::Branch => TreeStyle::Branch,
        }
    }
}

impl TreeArgs {
    fn into_config(self, verbosity: Verbosity) -> TreeConfig {
        let style = TreeStyle::from(self.style);
        TreeConfig {
            root: self.root,
            output: self.output,
            style,
            max_depth: self.max_depth.or_else(|| style.default_max_depth()),
            verbosity,
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let verbosity = if cli.quiet {
        Verbosity::Quiet
    } else if cli.verbose {
        Verbosity::Verbose
    } else {
        Verbosity::Normal
    };

    let result = match cli.command {
        Command::Fix(args) => refpath::refpath(args.into_config(Mode::Fix, verbosity)).map(|_| ()),
        Command::Check(args) => {
            refpath::refpath(args.into_config(Mode::Check, verbosity)).map(|_| ())
        }
        Command::Tree(args) => refpath::tree(args.into_config(verbosity)),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
