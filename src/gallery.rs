//! Example query gallery
//!
//! Static, categorized example queries printed alongside their search URLs.

use std::io::{self, Write};

use crate::query::search_url;

/// A named group of example queries.
#[derive(Debug, Clone, Copy)]
pub struct Category {
    pub title: &'static str,
    pub queries: &'static [&'static str],
}

const CATEGORIES: &[Category] = &[
    Category {
        title: "📂 Vazamento de Banco de Dados",
        queries: &[
            r#"intitle:"index of" "database.sql""#,
            r#"filetype:sql "INSERT INTO" -github"#,
            r#"inurl:backup filetype:sql"#,
        ],
    },
    Category {
        title: "🔐 Painéis Admin Expostos",
        queries: &[
            r#"intitle:"admin login" OR "painel administrativo""#,
            r#"inurl:admin filetype:php"#,
            r#"allintext:"usuário" "senha" login"#,
        ],
    },
    Category {
        title: "⚙️ Arquivos de Configuração",
        queries: &[
            r#"filetype:env "DB_PASSWORD" OR "DB_SENHA""#,
            r#"intext:"API_KEY" filetype:txt"#,
            r#"intitle:"index of" ".env""#,
        ],
    },
    Category {
        title: "📄 Documentos Sensíveis",
        queries: &[
            r#"filetype:pdf "confidencial" OR "secreto""#,
            r#"filetype:doc "uso interno""#,
            r#"inurl:curriculo filetype:pdf site:*.br"#,
        ],
    },
    Category {
        title: "🔍 Brasil Específico",
        queries: &[
            r#"site:*.gov.br filetype:pdf "confidencial""#,
            r#"intext:"CNPJ" filetype:txt"#,
            r#"intitle:"admin" inurl:login site:*.br"#,
        ],
    },
];

/// All gallery categories, in display order.
pub fn categories() -> &'static [Category] {
    CATEGORIES
}

/// Print every category with its queries and their search URLs.
pub fn render_gallery<W: Write>(base: &str, out: &mut W) -> io::Result<()> {
    let rule = "=".repeat(70);

    writeln!(out, "\n{}", rule)?;
    writeln!(out, "🎯 EXEMPLOS PRÁTICOS PARA PENTEST (COPIE E COLE!)")?;
    writeln!(out, "{}", rule)?;

    for category in categories() {
        writeln!(out, "\n{}:", category.title)?;
        for query in category.queries {
            writeln!(out, "   🔍 {}", query)?;
            writeln!(out, "   📎 {}", search_url(base, query))?;
        }
    }

    Ok(())
}
