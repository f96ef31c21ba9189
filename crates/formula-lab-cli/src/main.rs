//! Formula Lab CLI - evaluate spreadsheet lesson formulas

mod logging;
mod output;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use formula_lab::label;
use formula_lab::prelude::*;

use output::OutputFormat;

#[derive(Parser)]
#[command(name = "flab")]
#[command(
    author,
    version,
    about = "Evaluate the worked examples of the spreadsheet formula lessons"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

/// The three addends shared by SUM, AVERAGE, COUNT, MAX and MIN
#[derive(clap::Args)]
struct Addends {
    #[arg(allow_hyphen_values = true)]
    a: String,
    #[arg(allow_hyphen_values = true)]
    b: String,
    #[arg(allow_hyphen_values = true)]
    c: String,
}

impl Addends {
    fn operands(&self) -> [Operand; 3] {
        [
            Operand::text(&self.a),
            Operand::text(&self.b),
            Operand::text(&self.c),
        ]
    }
}

#[derive(Subcommand)]
enum Commands {
    /// =SUM(a, b, c)
    Sum(Addends),

    /// =AVERAGE(a, b, c), shown with two decimals
    #[command(alias = "avg")]
    Average(Addends),

    /// =COUNT(a, b, c): how many of the values are numbers
    Count(Addends),

    /// =MAX(a, b, c)
    Max(Addends),

    /// =MIN(a, b, c)
    Min(Addends),

    /// =VLOOKUP(key, ProductTable, 3, FALSE)
    #[command(alias = "vlookup")]
    Lookup {
        /// Product id (exact, case-sensitive)
        key: String,
    },

    /// =XLOOKUP(key, ids, prices, if_not_found)
    Xlookup {
        /// Product id (exact, case-sensitive)
        key: String,

        /// Value returned when the id is missing
        #[arg(long, default_value = "Not found")]
        if_not_found: String,
    },

    /// Nested IF grading of a score
    #[command(alias = "if")]
    Grade {
        /// Score to grade
        #[arg(allow_hyphen_values = true)]
        score: String,
    },

    /// =COUNTIF(A2:A8, region) over the sales table
    Countif {
        /// Region label (exact, case-sensitive)
        region: String,
    },

    /// =SUMIF(A2:A8, region, B2:B8) over the sales table
    Sumif {
        /// Region label (exact, case-sensitive)
        region: String,
    },

    /// Sum pivot amounts grouped by a field
    Pivot {
        /// Grouping field: category, region or product
        #[arg(long, default_value = "category")]
        by: String,
    },

    /// Print the embedded sample tables
    Tables {
        /// Table to print: products, sales, pivot or all
        #[arg(long, default_value = "all")]
        table: String,
    },

    /// Show the spreadsheet syntax of a lesson function
    Syntax {
        /// Function name (e.g. VLOOKUP)
        name: String,
    },

    /// Recalculate every lesson from the default inputs plus overrides
    Dashboard {
        /// Input override as field=value (e.g. sum2=x, lookupValue=B003)
        #[arg(long = "set", value_name = "FIELD=VALUE")]
        assignments: Vec<String>,

        /// Grouping field for the pivot lesson
        #[arg(long, default_value = "category")]
        pivot_by: String,

        /// Value XLOOKUP returns on a miss
        #[arg(long, default_value = "Not found")]
        if_not_found: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let format = cli.format;
    match cli.command {
        Commands::Sum(addends) => aggregate(FormulaKind::Sum, &addends, format),
        Commands::Average(addends) => aggregate(FormulaKind::Average, &addends, format),
        Commands::Count(addends) => aggregate(FormulaKind::Count, &addends, format),
        Commands::Max(addends) => aggregate(FormulaKind::Max, &addends, format),
        Commands::Min(addends) => aggregate(FormulaKind::Min, &addends, format),
        Commands::Lookup { key } => {
            let lesson = LessonResult::new(
                FormulaKind::Vlookup,
                label::vlookup_label(&key),
                lookup_by_key(&key, PRODUCT_TABLE),
            );
            output::print_lesson(&lesson, format)
        }
        Commands::Xlookup { key, if_not_found } => {
            let lesson = LessonResult::new(
                FormulaKind::Xlookup,
                label::xlookup_label(&key, PRODUCT_TABLE.len(), &if_not_found),
                xlookup_by_key(&key, PRODUCT_TABLE, if_not_found.as_str()),
            );
            output::print_lesson(&lesson, format)
        }
        Commands::Grade { score } => {
            let classification = classify_score(score.as_str());
            let lesson = LessonResult::new(
                FormulaKind::If,
                label::grade_label(&score),
                classification.into(),
            )
            .with_display(classification.to_string());
            output::print_lesson(&lesson, format)
        }
        Commands::Countif { region } => {
            let lesson = LessonResult::new(
                FormulaKind::Countif,
                label::countif_label(&region, SALES_TABLE.len()),
                FormulaValue::Number(count_by_region(&region, SALES_TABLE) as f64),
            );
            output::print_lesson(&lesson, format)
        }
        Commands::Sumif { region } => {
            let lesson = LessonResult::new(
                FormulaKind::Sumif,
                label::sumif_label(&region, SALES_TABLE.len()),
                FormulaValue::Number(sum_by_region(&region, SALES_TABLE)),
            );
            output::print_lesson(&lesson, format)
        }
        Commands::Pivot { by } => {
            let field: PivotField = by.parse().context("Invalid --by value")?;
            output::print_pivot(field, &aggregate_by(field, PIVOT_TABLE), format)
        }
        Commands::Tables { table } => {
            let selection: output::TableSelection =
                table.parse().context("Invalid --table value")?;
            output::print_tables(selection, format)
        }
        Commands::Syntax { name } => {
            let kind: FormulaKind = name
                .parse()
                .with_context(|| format!("No lesson covers '{}'", name))?;
            println!("{}", kind.syntax());
            Ok(())
        }
        Commands::Dashboard {
            assignments,
            pivot_by,
            if_not_found,
        } => dashboard(&assignments, &pivot_by, if_not_found, format),
    }
}

fn aggregate(kind: FormulaKind, addends: &Addends, format: OutputFormat) -> Result<()> {
    let [a, b, c] = addends.operands();
    let formula = label::aggregate_label(kind, [&a, &b, &c])?;

    let lesson = match kind {
        FormulaKind::Average => LessonResult::new(kind, formula, average3(&a, &b, &c))
            .with_display(average3_display(&a, &b, &c)),
        FormulaKind::Count => {
            LessonResult::new(kind, formula, FormulaValue::Number(count3(&a, &b, &c) as f64))
        }
        FormulaKind::Max => LessonResult::new(kind, formula, max3(&a, &b, &c)),
        FormulaKind::Min => LessonResult::new(kind, formula, min3(&a, &b, &c)),
        _ => LessonResult::new(kind, formula, sum3(a, b, c)),
    };

    output::print_lesson(&lesson, format)
}

fn dashboard(
    assignments: &[String],
    pivot_by: &str,
    if_not_found: String,
    format: OutputFormat,
) -> Result<()> {
    let mut inputs = InputState::default();
    for assignment in assignments {
        inputs
            .apply_assignment(assignment)
            .with_context(|| format!("Failed to apply --set {}", assignment))?;
    }

    let options = DashboardOptions {
        pivot_field: pivot_by.parse().context("Invalid --pivot-by value")?,
        if_not_found,
    };

    let view = DashboardView::recalculate_with_options(&inputs, &options);
    tracing::info!(
        lessons = view.lessons.len(),
        errors = view.error_count(),
        "dashboard recalculated"
    );

    output::print_dashboard(&view, format)
}
