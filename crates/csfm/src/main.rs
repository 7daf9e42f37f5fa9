mod db;

use std::io::{self, Write as _};

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use csfm_errors::{Diagnostic, Renderer, Severity};
use db::{File, check_file};
use salsa::DatabaseImpl;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
enum Options {
    /// Print every token with its byte range and line:column.
    Tokens { path: Utf8PathBuf },
    /// Print the marker tree.
    Tree { path: Utf8PathBuf },
    /// Report malformed markers.
    Check { path: Utf8PathBuf },
}

fn read(path: &Utf8Path) -> anyhow::Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("failed to read `{path}`"))
}

fn main() -> anyhow::Result<()> {
    match Options::parse() {
        Options::Tokens { path } => {
            let bytes = read(&path)?;
            let tokens = csfm_tokenizer::tokenize(&bytes)
                .with_context(|| format!("failed to tokenize `{path}`"))?;

            io::stdout().lock().write_all(tokens.debug_dump(&bytes).as_bytes())?;
            Ok(())
        }
        Options::Tree { path } => {
            let bytes = read(&path)?;
            let document =
                csfm_parse::parse(&bytes).with_context(|| format!("failed to parse `{path}`"))?;

            io::stdout().lock().write_all(document.debug_tree(&bytes).as_bytes())?;
            Ok(())
        }
        Options::Check { path } => {
            let db = DatabaseImpl::default();
            let text = read(&path)?;

            let file = File::new(&db, path, text);
            let diagnostics = check_file::accumulated::<Diagnostic>(&db, file);

            let path = file.path(&db).as_str();
            let renderer = Renderer::styled();

            match std::str::from_utf8(file.text(&db)) {
                Ok(text) => {
                    for diagnostic in &diagnostics {
                        eprintln!("{}", diagnostic.render(&renderer, path, text));
                    }
                }
                Err(_) => {
                    for diagnostic in &diagnostics {
                        eprintln!("{path}@{:?}: {}", diagnostic.range(), diagnostic.message());
                    }
                }
            }

            let errors =
                diagnostics.iter().filter(|diagnostic| diagnostic.severity() == Severity::Error);
            anyhow::ensure!(errors.count() == 0, "`{path}` could not be checked");
            Ok(())
        }
    }
}
