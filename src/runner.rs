use anyhow::{Context, Result, anyhow};
use camino::{Utf8Path, Utf8PathBuf};

use crate::cli::{Cli, Command};
use crate::config::ScaffoldConfig;
use crate::layout::Layout;
use crate::scaffold;

/// Options shared by every command once the CLI has been parsed.
#[derive(Debug)]
struct CliContext {
    chdir: Option<Utf8PathBuf>,
    file: Option<Utf8PathBuf>,
    base: Option<Utf8PathBuf>,
    dry_run: bool,
}

impl CliContext {
    fn from_cli(cli: &Cli) -> Result<Self> {
        Ok(Self {
            chdir: cli.chdir.clone().map(utf8).transpose()?,
            file: cli.file.clone().map(utf8).transpose()?,
            base: cli.base.clone().map(utf8).transpose()?,
            dry_run: cli.dry_run,
        })
    }

    fn apply_chdir(&self) -> Result<()> {
        if let Some(dir) = &self.chdir {
            std::env::set_current_dir(dir)
                .with_context(|| format!("changing directory to {}", dir))?;
        }
        Ok(())
    }

    fn layout(&self, cwd: &Utf8Path) -> Result<Layout> {
        let config = ScaffoldConfig::load(self.file.as_deref(), cwd)?;
        let base = self.base.clone().unwrap_or_else(|| config.base_dir());
        tracing::debug!(base = %base, "resolved scaffold base");
        Ok(Layout::new(cwd.join(base)))
    }
}

fn utf8(path: std::path::PathBuf) -> Result<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(path).map_err(|p| anyhow!("path {} is not valid UTF-8", p.display()))
}

fn current_dir() -> Result<Utf8PathBuf> {
    let cwd = std::env::current_dir().context("determining current directory")?;
    utf8(cwd)
}

pub fn run(cli: Cli) -> Result<()> {
    let ctx = CliContext::from_cli(&cli)?;
    ctx.apply_chdir()?;
    let cwd = current_dir()?;
    execute(&ctx, cli.command.unwrap_or(Command::Generate), &cwd)
}

fn execute(ctx: &CliContext, command: Command, cwd: &Utf8Path) -> Result<()> {
    let layout = ctx.layout(cwd)?;
    match command {
        Command::Generate => handle_generate(&layout, ctx.dry_run),
        Command::List => handle_list(&layout),
    }
}

fn handle_generate(layout: &Layout, dry_run: bool) -> Result<()> {
    let written = scaffold::generate(layout, dry_run)?;
    tracing::info!(base = %layout.base(), files = written.len(), dry_run, "scaffold complete");
    if !dry_run {
        println!("{}", scaffold::NEXT_STEPS);
    }
    Ok(())
}

fn handle_list(layout: &Layout) -> Result<()> {
    let (dirs, files) = scaffold::plan(layout);
    println!("Directories:");
    for dir in dirs {
        println!("  {}", dir);
    }
    println!("Files:");
    for file in files {
        println!("  {}", file);
    }
    Ok(())
}
