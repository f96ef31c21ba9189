//! Rendering of lesson results as text, JSON or CSV

use std::io::{self, Write};
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::ValueEnum;
use formula_lab::prelude::*;
use formula_lab::{PivotRecord, Product, SalesRecord};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}

/// Which sample table(s) to print
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableSelection {
    Products,
    Sales,
    Pivot,
    All,
}

impl TableSelection {
    fn includes(self, table: TableSelection) -> bool {
        self == TableSelection::All || self == table
    }
}

impl FromStr for TableSelection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.trim().to_lowercase().as_str() {
            "products" | "product" => Ok(TableSelection::Products),
            "sales" => Ok(TableSelection::Sales),
            "pivot" => Ok(TableSelection::Pivot),
            "all" => Ok(TableSelection::All),
            _ => Err(Error::other(format!(
                "Unknown table: {} (expected products, sales, pivot or all)",
                s
            ))),
        }
    }
}

#[derive(Serialize)]
struct TableDump<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    products: Option<&'a [Product]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sales: Option<&'a [SalesRecord]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pivot: Option<&'a [PivotRecord]>,
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}

fn csv_writer() -> csv::Writer<io::Stdout> {
    csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(io::stdout())
}

fn write_lesson_row<W: Write>(wtr: &mut csv::Writer<W>, lesson: &LessonResult) -> Result<()> {
    wtr.write_record([
        lesson.kind.name(),
        lesson.formula.as_str(),
        lesson.display.as_str(),
    ])?;
    Ok(())
}

pub fn print_lesson(lesson: &LessonResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            println!("{} = {}", lesson.formula, lesson.display);
            Ok(())
        }
        OutputFormat::Json => print_json(lesson),
        OutputFormat::Csv => {
            let mut wtr = csv_writer();
            wtr.write_record(["function", "formula", "result"])?;
            write_lesson_row(&mut wtr, lesson)?;
            wtr.flush().context("Failed to write to stdout")?;
            Ok(())
        }
    }
}

fn write_pivot_text<W: Write>(
    out: &mut W,
    field: PivotField,
    totals: &CategoryTotals,
) -> io::Result<()> {
    let width = totals
        .keys()
        .map(str::len)
        .chain(["Grand Total".len(), field.as_str().len()])
        .max()
        .unwrap_or(0);
    writeln!(out, "{:<width$}  SUM of amount", field.as_str(), width = width)?;
    for (key, total) in totals.iter() {
        writeln!(out, "{:<width$}  {}", key, FormulaValue::Number(total), width = width)?;
    }
    writeln!(
        out,
        "{:<width$}  {}",
        "Grand Total",
        FormulaValue::Number(totals.grand_total()),
        width = width
    )
}

pub fn print_pivot(
    field: PivotField,
    totals: &CategoryTotals,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            write_pivot_text(&mut out, field, totals).context("Failed to write to stdout")
        }
        OutputFormat::Json => print_json(totals),
        OutputFormat::Csv => {
            let mut wtr = csv_writer();
            wtr.write_record([field.as_str(), "amount"])?;
            for (key, total) in totals.iter() {
                wtr.write_record([key, total.to_string().as_str()])?;
            }
            wtr.flush().context("Failed to write to stdout")?;
            Ok(())
        }
    }
}

/// One titled sample table, rendered as rows of strings
struct TableSection {
    title: &'static str,
    header: &'static [&'static str],
    rows: Vec<Vec<String>>,
}

fn table_sections(selection: TableSelection) -> Vec<TableSection> {
    let want = |table| selection.includes(table);
    let mut sections = Vec::new();

    if want(TableSelection::Products) {
        sections.push(TableSection {
            title: "ProductTable",
            header: &["id", "name", "price"],
            rows: PRODUCT_TABLE
                .iter()
                .map(|p| vec![p.id.to_string(), p.name.to_string(), p.price.to_string()])
                .collect(),
        });
    }
    if want(TableSelection::Sales) {
        sections.push(TableSection {
            title: "Sales (A2:B8)",
            header: &["region", "amount"],
            rows: SALES_TABLE
                .iter()
                .map(|s| vec![s.region.to_string(), s.amount.to_string()])
                .collect(),
        });
    }
    if want(TableSelection::Pivot) {
        sections.push(TableSection {
            title: "Pivot source",
            header: &["product", "category", "region", "amount"],
            rows: PIVOT_TABLE
                .iter()
                .map(|r| {
                    vec![
                        r.product.to_string(),
                        r.category.to_string(),
                        r.region.to_string(),
                        r.amount.to_string(),
                    ]
                })
                .collect(),
        });
    }
    sections
}

/// Tab-separated rows under a `# title` line per table
fn write_tables_text<W: Write>(out: &mut W, sections: &[TableSection]) -> io::Result<()> {
    for (i, section) in sections.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "# {}", section.title)?;
        writeln!(out, "{}", section.header.join("\t"))?;
        for row in &section.rows {
            writeln!(out, "{}", row.join("\t"))?;
        }
    }
    Ok(())
}

fn write_tables_csv<W: Write>(wtr: &mut csv::Writer<W>, sections: &[TableSection]) -> Result<()> {
    for section in sections {
        wtr.write_record(section.header)?;
        for row in &section.rows {
            wtr.write_record(row)?;
        }
    }
    wtr.flush().context("Failed to write CSV")?;
    Ok(())
}

pub fn print_tables(selection: TableSelection, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let want = |table| selection.includes(table);
            print_json(&TableDump {
                products: want(TableSelection::Products).then_some(PRODUCT_TABLE),
                sales: want(TableSelection::Sales).then_some(SALES_TABLE),
                pivot: want(TableSelection::Pivot).then_some(PIVOT_TABLE),
            })
        }
        OutputFormat::Text => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            write_tables_text(&mut out, &table_sections(selection))
                .context("Failed to write to stdout")
        }
        OutputFormat::Csv => write_tables_csv(&mut csv_writer(), &table_sections(selection)),
    }
}

pub fn print_dashboard(view: &DashboardView, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for lesson in &view.lessons {
                println!("{:<8} {} = {}", lesson.kind.name(), lesson.formula, lesson.display);
            }
            println!();
            print_pivot(view.pivot_field, &view.pivot, format)
        }
        OutputFormat::Json => print_json(view),
        OutputFormat::Csv => {
            let mut wtr = csv_writer();
            wtr.write_record(["function", "formula", "result"])?;
            for lesson in &view.lessons {
                write_lesson_row(&mut wtr, lesson)?;
            }
            wtr.flush().context("Failed to write to stdout")?;
            Ok(())
        }
    }
}
