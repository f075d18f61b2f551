#![forbid(unsafe_code)]

mod logging;

use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use datastore_core::codec;
use datastore_core::root::ROOT_ENV;
use datastore_core::{Envelope, Namespace, Outcome};
use datastore_engine::store;
use serde_json::Value;

#[derive(Parser)]
#[command(
    name = "ds",
    version,
    about = "Typed JSON records in per-namespace directories. Unix-friendly."
)]
struct Cli {
    /// Documents root (defaults to the platform documents directory).
    #[arg(long, global = true, env = ROOT_ENV)]
    root: Option<PathBuf>,

    /// Print a {"status", "value" | "error"} envelope on stdout.
    #[arg(long, global = true)]
    json: bool,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Store a JSON document as <namespace>/<file>.
    Put {
        namespace: String,
        file: String,

        /// JSON text (or "-" / omit for stdin).
        #[arg(value_name = "JSON", default_value = "-")]
        document: String,
    },

    /// Print a stored document.
    Get {
        namespace: String,
        file: String,

        /// Indent the output.
        #[arg(long)]
        pretty: bool,
    },

    /// Delete a stored document.
    Rm { namespace: String, file: String },

    /// List documents in a namespace.
    Ls { namespace: String },

    /// Print the directory a namespace resolves to.
    Path { namespace: String },

    /// Exit 0 if the document exists, 1 otherwise.
    Exists { namespace: String, file: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_json);
    tracing::debug!(root = ?cli.root, "starting");

    let ns_for = |name: &str| match &cli.root {
        Some(root) => Namespace::with_root(root, name),
        None => Namespace::new(name),
    };

    match &cli.cmd {
        Cmd::Put {
            namespace,
            file,
            document,
        } => cmd_put(&ns_for(namespace), file, document, cli.json),

        Cmd::Get {
            namespace,
            file,
            pretty,
        } => cmd_get(&ns_for(namespace), file, *pretty, cli.json),

        Cmd::Rm { namespace, file } => cmd_rm(&ns_for(namespace), file, cli.json),

        Cmd::Ls { namespace } => cmd_ls(&ns_for(namespace), cli.json),

        Cmd::Path { namespace } => cmd_path(&ns_for(namespace), cli.json),

        Cmd::Exists { namespace, file } => cmd_exists(&ns_for(namespace), file, cli.json),
    }
}

/// In `--json` mode print the envelope; either way fail on an error outcome.
fn finish<T: serde::Serialize>(outcome: Outcome<T>, json_out: bool) -> Result<Option<T>> {
    if json_out {
        let envelope = Envelope::from(outcome);
        println!("{}", serde_json::to_string(&envelope)?);
        if let Some(error) = envelope.error() {
            bail!("{error}");
        }
        return Ok(None);
    }
    Ok(Some(outcome?))
}

fn read_input(document: &str) -> Result<String> {
    if document == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        Ok(document.to_string())
    }
}

fn cmd_put(ns: &Namespace, file: &str, document: &str, json_out: bool) -> Result<()> {
    let input = read_input(document)?;
    let outcome = codec::decode_from_str::<Value>(&input).and_then(|value| {
        store::save_ref(ns, file, &value)?;
        ns.file(file)
    });
    if let Some(path) = finish(outcome, json_out)? {
        eprintln!("wrote {}", path.display());
    }
    Ok(())
}

fn cmd_get(ns: &Namespace, file: &str, pretty: bool, json_out: bool) -> Result<()> {
    let outcome = store::load::<Value>(ns, file);
    if let Some(value) = finish(outcome, json_out)? {
        let text = if pretty {
            codec::encode_to_string_pretty(&value)?
        } else {
            codec::encode_to_string(&value)?
        };
        println!("{text}");
    }
    Ok(())
}

fn cmd_rm(ns: &Namespace, file: &str, json_out: bool) -> Result<()> {
    if finish(store::delete(ns, file), json_out)?.is_some() {
        eprintln!("deleted {ns}/{file}");
    }
    Ok(())
}

fn cmd_ls(ns: &Namespace, json_out: bool) -> Result<()> {
    if let Some(names) = finish(store::list(ns), json_out)? {
        for name in names {
            println!("{name}");
        }
    }
    Ok(())
}

fn cmd_path(ns: &Namespace, json_out: bool) -> Result<()> {
    if let Some(dir) = finish(ns.resolve(), json_out)? {
        println!("{}", dir.display());
    }
    Ok(())
}

fn cmd_exists(ns: &Namespace, file: &str, json_out: bool) -> Result<()> {
    if let Some(found) = finish(store::exists(ns, file), json_out)? {
        if !found {
            bail!("{file} not found in namespace {ns}");
        }
    }
    Ok(())
}
