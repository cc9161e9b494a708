use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "ampstory", version)]
struct Cli {
    /// Log at debug level.
    #[arg(long, short, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compile a story JSON document into AMP story markup.
    Compile(CompileArgs),
    /// Compile a story and discard the output; exits non-zero on malformed input.
    Validate(ValidateArgs),
}

#[derive(Parser, Debug)]
struct FlagArgs {
    /// JSON file with render flags; command-line flags are added on top.
    #[arg(long)]
    args: Option<PathBuf>,

    /// Attach caption tracks to a page-level captions layer.
    #[arg(long, default_value_t = false)]
    enhanced_captions: bool,

    /// Emit shopping tags and attachments for product elements.
    #[arg(long, default_value_t = false)]
    shopping: bool,

    /// Emit page outlinks.
    #[arg(long, default_value_t = false)]
    page_outlinks: bool,
}

#[derive(Parser, Debug)]
struct CompileArgs {
    /// Input story JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output HTML path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,

    #[command(flatten)]
    flags: FlagArgs,
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Input story JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    #[command(flatten)]
    flags: FlagArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Compile(args) => cmd_compile(args),
        Command::Validate(args) => cmd_validate(args),
    }
}

fn render_args(flags: &FlagArgs) -> anyhow::Result<ampstory::RenderArgs> {
    let base = match &flags.args {
        Some(path) => ampstory::RenderArgs::from_path(path)?,
        None => ampstory::RenderArgs::default(),
    };
    Ok(base.union(ampstory::RenderArgs {
        enhanced_captions: flags.enhanced_captions,
        shopping: flags.shopping,
        page_outlinks: flags.page_outlinks,
    }))
}

fn load(in_path: &Path, flags: &FlagArgs) -> anyhow::Result<ampstory::Document> {
    let story = ampstory::Story::from_path(in_path)?;
    let args = render_args(flags)?;
    ampstory::compile_story(&story, &args)
        .with_context(|| format!("compile story '{}'", in_path.display()))
}

fn cmd_compile(args: CompileArgs) -> anyhow::Result<()> {
    let doc = load(&args.in_path, &args.flags)?;
    match &args.out {
        Some(out) => {
            if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(out, &doc.markup)
                .with_context(|| format!("write html '{}'", out.display()))?;
            eprintln!(
                "wrote {} ({} pages, fingerprint {})",
                out.display(),
                doc.page_count,
                doc.fingerprint()
            );
        }
        None => print!("{}", doc.markup),
    }
    Ok(())
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let doc = load(&args.in_path, &args.flags)?;
    eprintln!("ok: {} ({} pages)", args.in_path.display(), doc.page_count);
    Ok(())
}
