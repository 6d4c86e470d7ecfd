//! CLI command implementations
//!
//! `run` parses arguments, loads optional configuration, configures the
//! logger and dispatches on the resolved [`Mode`]. Dispatch is purely
//! sequential.

use std::io::{BufRead, Write};

use crate::catalog::{render_table, Catalog};
use crate::config::Config;
use crate::gallery::render_gallery;
use crate::observability::{log_event, log_event_with_fields, Event, Logger, Severity};

use super::args::{Cli, Mode};
use super::errors::CliResult;
use super::io::Console;
use super::session::Session;

const BANNER: &str = r#"
╔══════════════════════════════════════════════════════════════╗
║           FERRAMENTA DE DORKING v2.0 - BRASIL                ║
║                APENAS TESTES AUTORIZADOS!                    ║
╚══════════════════════════════════════════════════════════════╝
"#;

/// Parse arguments and run against the process stdin/stdout.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let threshold = if cli.verbose {
        Severity::Info
    } else {
        config.log_severity()?
    };
    Logger::set_threshold(threshold);

    if let Some(path) = &cli.config {
        log_event_with_fields(Event::ConfigLoaded, &[("path", &*path.to_string_lossy())]);
    }

    let format = cli.formato.unwrap_or(config.default_format);
    let mut session = Session::new(config, format);
    let mut console = Console::stdio();

    run_mode(cli.mode(), &mut session, &mut console)
}

/// Execute one mode. The banner is printed first in every mode.
pub fn run_mode<R: BufRead, W: Write>(
    mode: Mode,
    session: &mut Session,
    console: &mut Console<R, W>,
) -> CliResult<()> {
    let catalog = Catalog::builtin();
    let base = session.config().search_base_url.clone();

    log_event(Event::CommandStart);
    writeln!(console.out(), "{}", BANNER)?;

    match mode {
        Mode::Table => {
            show_table(catalog, console.out())?;
        }
        Mode::Examples => {
            show_table(catalog, console.out())?;
            show_gallery(&base, console.out())?;
        }
        Mode::Interactive => {
            session.interactive(console)?;
        }
        Mode::Search { tokens, save } => {
            session.demo_search(tokens.as_slice(), console.out())?;
            match save {
                Some(path) => {
                    session.save(Some(path.as_path()), console.out())?;
                }
                None => {
                    session.offer_save(console, "\n💾 Salvar resultados? (s/n): ")?;
                }
            }
        }
        Mode::Overview => {
            writeln!(console.out(), "👋 Bem-vindo à Ferramenta de Dorking BR!")?;
            show_table(catalog, console.out())?;
            show_gallery(&base, console.out())?;
            write_usage(console.out())?;
        }
    }

    log_event(Event::CommandComplete);
    Ok(())
}

fn show_table<W: Write>(catalog: &Catalog, out: &mut W) -> CliResult<()> {
    render_table(catalog, out)?;
    log_event(Event::TableRendered);
    Ok(())
}

fn show_gallery<W: Write>(base: &str, out: &mut W) -> CliResult<()> {
    render_gallery(base, out)?;
    log_event(Event::GalleryRendered);
    Ok(())
}

fn write_usage<W: Write>(out: &mut W) -> CliResult<()> {
    writeln!(out, "\n💡 Use --interativo para criar dorks personalizados!")?;
    writeln!(out, "\n🔥 Comandos rápidos:")?;
    writeln!(out, "   dorkbr --interativo")?;
    writeln!(out, "   dorkbr --exemplos")?;
    writeln!(out, "   dorkbr --busca intitle:admin senha")?;
    Ok(())
}
