//! CLI argument definitions using clap
//!
//! - dorkbr --tabela
//! - dorkbr --exemplos
//! - dorkbr --interativo
//! - dorkbr --busca <tokens...> [--salvar <path>]

use clap::Parser;
use std::path::PathBuf;

use crate::persist::Format;

/// Search query (dork) builder and operator reference
#[derive(Parser, Debug, Default)]
#[command(name = "dorkbr")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Print the operator table
    #[arg(short = 't', long)]
    pub tabela: bool,

    /// Print the operator table and example queries
    #[arg(short = 'e', long)]
    pub exemplos: bool,

    /// Build a query interactively
    #[arg(short = 'i', long)]
    pub interativo: bool,

    /// Quick demo search over the given terms
    #[arg(short = 'b', long, num_args = 0.., value_name = "TERMOS")]
    pub busca: Option<Vec<String>>,

    /// Save results to this path (with --busca)
    #[arg(short = 's', long, value_name = "ARQUIVO")]
    pub salvar: Option<PathBuf>,

    /// Export format
    #[arg(short = 'f', long, value_enum)]
    pub formato: Option<Format>,

    /// Path to a JSON configuration file
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Log informational events to stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

/// What a run does, resolved from the flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Operator table only
    Table,
    /// Operator table, then example gallery
    Examples,
    /// Interactive query builder
    Interactive,
    /// Demo search; saves to `save` if given, otherwise asks
    Search {
        tokens: Vec<String>,
        save: Option<PathBuf>,
    },
    /// Welcome, table, gallery and usage hints
    Overview,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Resolve flags by priority: tabela, exemplos, interativo, busca.
    pub fn mode(&self) -> Mode {
        if self.tabela {
            Mode::Table
        } else if self.exemplos {
            Mode::Examples
        } else if self.interativo {
            Mode::Interactive
        } else if let Some(tokens) = &self.busca {
            Mode::Search {
                tokens: tokens.clone(),
                save: self.salvar.clone(),
            }
        } else {
            Mode::Overview
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("dorkbr").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_no_flags_is_overview() {
        assert_eq!(parse(&[]).mode(), Mode::Overview);
    }

    #[test]
    fn test_short_flags() {
        assert_eq!(parse(&["-t"]).mode(), Mode::Table);
        assert_eq!(parse(&["-e"]).mode(), Mode::Examples);
        assert_eq!(parse(&["-i"]).mode(), Mode::Interactive);
    }

    #[test]
    fn test_priority() {
        assert_eq!(parse(&["--exemplos", "--tabela"]).mode(), Mode::Table);
        assert_eq!(parse(&["-i", "-b", "x"]).mode(), Mode::Interactive);
    }

    #[test]
    fn test_busca_collects_tokens() {
        let cli = parse(&["--busca", "intitle:admin", "senha", "--salvar", "out.json"]);
        assert_eq!(
            cli.mode(),
            Mode::Search {
                tokens: vec!["intitle:admin".to_string(), "senha".to_string()],
                save: Some(PathBuf::from("out.json")),
            }
        );
    }

    #[test]
    fn test_busca_without_tokens() {
        let cli = parse(&["-b"]);
        assert_eq!(
            cli.mode(),
            Mode::Search {
                tokens: vec![],
                save: None,
            }
        );
    }

    #[test]
    fn test_salvar_alone_is_overview() {
        assert_eq!(parse(&["-s", "out.json"]).mode(), Mode::Overview);
    }

    #[test]
    fn test_formato() {
        assert_eq!(parse(&["-f", "csv"]).formato, Some(Format::Csv));
        assert!(Cli::try_parse_from(["dorkbr", "-f", "xml"]).is_err());
    }
}
