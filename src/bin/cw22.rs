use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use clueweb22_catalog::{
    BUILTIN_CATALOG, DatasetIndex, DocId, NoCitations, RecordFormat, corpus_version,
    find_corpus_root, load_catalog_from_path, render_index, render_page, validate_catalog_file,
    validate_catalog_value,
};
use serde_json::Value;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "cw22",
    about = "Browse and validate the ClueWeb22 dataset catalog."
)]
struct Cli {
    /// Catalog file to use instead of the embedded one.
    #[arg(long, global = true, value_name = "PATH")]
    catalog: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print every dataset id in catalog order.
    List {
        /// Also print each dataset's description.
        #[arg(long, conflicts_with = "html")]
        long: bool,
        /// Emit the HTML index page instead of plain ids.
        #[arg(long)]
        html: bool,
    },
    /// Render the documentation page for one dataset id.
    Show { id: String },
    /// Decompose a document id and print its per-format file paths.
    Doc { doc_id: String },
    /// Check a catalog file against the schema contract and the index
    /// invariants.
    Validate,
    /// Print the version of the locally installed corpus copy.
    Corpus,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::List { long, html } => {
            let index = load_index(cli.catalog.as_deref())?;
            if html {
                print!("{}", render_index(&index));
                return Ok(());
            }
            for entry in index.iter() {
                if long {
                    println!("{}\t{}", entry.id(), entry.description());
                } else {
                    println!("{}", entry.id());
                }
            }
            Ok(())
        }
        Command::Show { id } => {
            let index = load_index(cli.catalog.as_deref())?;
            let Some(entry) = index.get(&id) else {
                let known: Vec<&str> = index.ids().map(|id| id.as_str()).collect();
                bail!("unknown dataset id '{id}'. Known ids: {}", known.join(", "));
            };
            print!("{}", render_page(&entry, &NoCitations));
            Ok(())
        }
        Command::Doc { doc_id } => {
            let doc_id = DocId::parse(&doc_id)?;
            println!("id:           {doc_id}");
            println!("language:     {}", doc_id.language.id());
            println!("stream:       {:02}", doc_id.stream);
            println!("subdirectory: {:02}", doc_id.subdirectory);
            println!("file:         {:02}", doc_id.file);
            println!("doc:          {:05}", doc_id.doc);
            for format in RecordFormat::ALL {
                match doc_id.record_path(format) {
                    Some(path) => println!("{:<8} {}", format.id(), path.display()),
                    None => println!("{:<8} (layout not published)", format.id()),
                }
            }
            Ok(())
        }
        Command::Validate => {
            let index = match cli.catalog.as_deref() {
                Some(path) => {
                    validate_catalog_file(path)?;
                    DatasetIndex::load(path)?
                }
                None => {
                    let value: Value =
                        serde_json::from_str(BUILTIN_CATALOG).context("parsing embedded catalog")?;
                    validate_catalog_value(&value)?;
                    DatasetIndex::builtin()?
                }
            };
            println!("ok: {} datasets in catalog '{}'", index.len(), index.key());
            Ok(())
        }
        Command::Corpus => {
            let root = find_corpus_root()?;
            let version = corpus_version(&root)?;
            println!(
                "{} (category {}, version {}.{})",
                root.display(),
                version.subset.id(),
                version.major,
                version.minor
            );
            Ok(())
        }
    }
}

fn load_index(catalog: Option<&Path>) -> Result<DatasetIndex> {
    match catalog {
        Some(path) => {
            let catalog = load_catalog_from_path(path)?;
            DatasetIndex::from_catalog(catalog)
        }
        None => DatasetIndex::builtin(),
    }
}
