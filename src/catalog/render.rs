//! Reference table rendering

use std::io::{self, Write};

use super::{Catalog, Service};

/// Width of the `=` rules framing the table
pub const TABLE_WIDTH: usize = 130;

const PRESENT: &str = "✅";
const ABSENT: &str = "❌";

/// Render the catalog as a table, one row per operator in catalog order.
pub fn render_table<W: Write>(catalog: &Catalog, out: &mut W) -> io::Result<()> {
    let rule = "=".repeat(TABLE_WIDTH);

    writeln!(out, "\n{}", rule)?;
    writeln!(out, "📋 TABELA COMPLETA - OPERADORES DE BUSCA")?;
    writeln!(out, "{}", rule)?;
    writeln!(
        out,
        "{:<12} {:<30} {:<8} {:<10} {:<5} {:<8} {:<8} {:<8}",
        "Operador",
        "Objetivo",
        "Mistura",
        "Sozinho",
        Service::Web.label(),
        Service::Images.label(),
        Service::Groups.label(),
        Service::News.label(),
    )?;
    writeln!(out, "{}", "-".repeat(TABLE_WIDTH))?;

    for entry in catalog.iter() {
        let [web, images, groups, news] =
            Service::ALL.map(|s| if entry.supports(s) { PRESENT } else { ABSENT });

        writeln!(
            out,
            "{:<12} {:<30} {:<8} {:<10} {:<5} {:<8} {:<8} {:<8}",
            entry.name, entry.purpose, entry.combinable, entry.standalone, web, images, groups, news,
        )?;
    }

    writeln!(out, "{}", rule)?;
    Ok(())
}
