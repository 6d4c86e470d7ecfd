//! Session context
//!
//! A `Session` owns the configuration and the result log for one run.
//! Every operation that reads or appends results goes through it.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::observability::{log_event_at, log_event_with_fields, Event, Severity};
use crate::persist::{self, default_filename, Format};
use crate::query::{construct, search_url};
use crate::results::{join_tokens, render_log, QueryResult, ResultLog};

use super::errors::CliResult;
use super::io::Console;

/// State for one invocation.
#[derive(Debug)]
pub struct Session {
    config: Config,
    format: Format,
    log: ResultLog,
}

impl Session {
    pub fn new(config: Config, format: Format) -> Self {
        Self {
            config,
            format,
            log: ResultLog::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn log(&self) -> &ResultLog {
        &self.log
    }

    fn append(&mut self, record: QueryResult) {
        log_event_with_fields(
            Event::ResultAppended,
            &[("operator", record.operator_used.as_str()), ("query", record.query.as_str())],
        );
        self.log.push(record);
    }

    /// Join `tokens` into a query, record one placeholder result for it,
    /// and print the result log. No request is made.
    pub fn demo_search<S: AsRef<str>, W: Write>(
        &mut self,
        tokens: &[S],
        out: &mut W,
    ) -> io::Result<()> {
        let query = join_tokens(tokens);
        let url = search_url(&self.config.search_base_url, &query);

        log_event_with_fields(Event::DemoSearch, &[("query", query.as_str())]);

        writeln!(out, "\n🔍 BUSCA RÁPIDA: {}", query)?;
        writeln!(out, "✅ Dork gerado e pronto para o buscador!")?;
        writeln!(out, "📋 URL: {}", url)?;

        self.append(QueryResult::demo(tokens, Local::now()));

        render_log(&self.log, &self.config.display_limits(), out)
    }

    /// Prompt for operator, keyword, site and file type, print the built
    /// query and its URL, then offer to save.
    pub fn interactive<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> CliResult<()> {
        let catalog = Catalog::builtin();

        writeln!(console.out(), "\n🛠️  CONSTRUTOR DE DORK INTERATIVO")?;
        writeln!(console.out(), "{}", "-".repeat(50))?;
        writeln!(
            console.out(),
            "Operadores disponíveis: {}",
            catalog.names().collect::<Vec<_>>().join(", ")
        )?;

        let operator = console.ask("🔍 Operador: ")?.trim().to_lowercase();
        let keyword = console.ask("📝 Palavra-chave: ")?.trim().to_string();
        let site = console.ask("🌐 Site (ex: target.com.br) [opcional]: ")?;
        let file_type = console.ask("📄 Tipo (pdf/sql/env/txt) [opcional]: ")?;

        if !catalog.contains(&operator) {
            log_event_at(
                Severity::Warn,
                Event::OperatorUnknown,
                &[("operator", operator.as_str())],
            );
        }

        let query = construct(
            catalog,
            &operator,
            &keyword,
            Some(site.trim()),
            Some(file_type.trim()),
        );
        let url = search_url(&self.config.search_base_url, &query);

        log_event_with_fields(
            Event::QueryBuilt,
            &[("operator", operator.as_str()), ("query", query.as_str())],
        );

        writeln!(console.out(), "\n✅ DORK GERADO: {}", query)?;
        writeln!(console.out(), "\n🔗 URL PRONTA: {}", url)?;
        writeln!(console.out(), "\n📋 Copie e cole no buscador!")?;

        self.append(QueryResult::built(&operator, &query, &url, Local::now()));

        self.offer_save(console, "\n💾 Salvar no arquivo? (s/n): ")
    }

    /// Ask whether to save; on `s`, save to a timestamped file.
    pub fn offer_save<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
        prompt: &str,
    ) -> CliResult<()> {
        if console.confirm(prompt)? {
            self.save(None, console.out())?;
        }
        Ok(())
    }

    /// Persist the log once. Failures are printed, not returned.
    ///
    /// Without `path`, a timestamped file is created in the configured
    /// `output_dir` (or the working directory). Returns the written path
    /// on success.
    pub fn save<W: Write>(&self, path: Option<&Path>, out: &mut W) -> io::Result<Option<PathBuf>> {
        let format = self.format;
        let count = self.log.len().to_string();
        log_event_with_fields(
            Event::PersistStart,
            &[("format", format.extension()), ("records", count.as_str())],
        );

        let target = match path {
            Some(p) => Some(p.to_path_buf()),
            None => self
                .config
                .output_dir
                .as_ref()
                .map(|dir| dir.join(default_filename(format, Local::now()))),
        };

        match persist::persist(self.log.as_slice(), target.as_deref(), format) {
            Ok(written) => {
                let shown = written.display().to_string();
                log_event_with_fields(Event::PersistComplete, &[("path", shown.as_str())]);
                writeln!(
                    out,
                    "\n💾 Salvo com sucesso: {} ({} resultados)",
                    shown,
                    self.log.len()
                )?;
                Ok(Some(written))
            }
            Err(e) => {
                let reason = e.to_string();
                log_event_at(Severity::Error, Event::PersistFailed, &[("error", reason.as_str())]);
                writeln!(out, "❌ Erro ao salvar: {}", e)?;
                Ok(None)
            }
        }
    }
}
