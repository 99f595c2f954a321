//! Workspace maintenance tasks: shell completions and man pages.
//!
//! Run via `cargo run -p xtask -- <task>`. Output lands under `target/`
//! by default so generated artifacts never pollute the source tree.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "xtask", about = "Workspace maintenance tasks")]
struct Xtask {
    #[command(subcommand)]
    command: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate shell completion scripts for the nounform binary
    Completions {
        /// Target shell (default: all supported shells)
        #[arg(value_enum)]
        shell: Option<Shell>,

        /// Output directory
        #[arg(long, default_value = "target/completions")]
        out: PathBuf,
    },
    /// Generate man pages for the nounform binary and its subcommands
    Man {
        /// Output directory
        #[arg(long, default_value = "target/man")]
        out: PathBuf,
    },
}

fn main() -> std::io::Result<()> {
    match Xtask::parse().command {
        Task::Completions { shell, out } => completions(shell, &out),
        Task::Man { out } => man_pages(&out),
    }
}

fn completions(shell: Option<Shell>, out: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(out)?;
    let shells = match shell {
        Some(shell) => vec![shell],
        None => Shell::value_variants().to_vec(),
    };
    let mut cmd = nounform::command();
    for shell in shells {
        let path = clap_complete::generate_to(shell, &mut cmd, "nounform", out)?;
        println!("generated {}", path.display());
    }
    Ok(())
}

fn man_pages(out: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(out)?;
    let cmd = nounform::command();
    render_man(cmd.clone(), "nounform", out)?;
    for sub in cmd.get_subcommands() {
        if sub.get_name() == "help" {
            continue;
        }
        let name = format!("nounform-{}", sub.get_name());
        render_man(sub.clone().name(name.clone()), &name, out)?;
    }
    Ok(())
}

fn render_man(cmd: clap::Command, name: &str, out: &Path) -> std::io::Result<()> {
    let man = clap_mangen::Man::new(cmd);
    let mut buf = Vec::new();
    man.render(&mut buf)?;
    let path = out.join(format!("{name}.1"));
    std::fs::write(&path, buf)?;
    println!("generated {}", path.display());
    Ok(())
}
