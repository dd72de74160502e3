//! Build script generating shell completions and a man page from the clap
//! definition in src/cli.rs.

use clap::CommandFactory;
use clap_complete::generate_to;
use clap_complete::shells::{Bash, Fish, Zsh};

include!("src/cli.rs");

fn main() -> std::io::Result<()> {
    println!("cargo:rerun-if-changed=src/cli.rs");

    let out_dir =
        PathBuf::from(std::env::var_os("OUT_DIR").expect("OUT_DIR not set by cargo"));

    let mut cmd = Cli::command();
    generate_to(Bash, &mut cmd, "aurdot", &out_dir)?;
    generate_to(Zsh, &mut cmd, "aurdot", &out_dir)?;
    generate_to(Fish, &mut cmd, "aurdot", &out_dir)?;

    let man = clap_mangen::Man::new(Cli::command());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;
    std::fs::write(out_dir.join("aurdot.1"), buffer)?;

    Ok(())
}
