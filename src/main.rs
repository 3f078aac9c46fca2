use anyhow::{bail, Result};
use clap::Parser;
use sqlite_dbinfo::{db::DbFile, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command.as_str() {
        ".dbinfo" => {
            let mut db = DbFile::from_path(&cli.db_path)?;
            print!("{}", db.info()?);
        }
        cmd => bail!("Missing or invalid command passed: {cmd}"),
    }

    Ok(())
}
