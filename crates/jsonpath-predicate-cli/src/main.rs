//! Command-line tool for evaluating JSONPath filter predicates

mod output;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use jsonpath_predicate::eval::RelationalOperator;
use jsonpath_predicate::{EvaluationOptions, OperatorRegistry, PredicateContext, ValueNode, Verdict};
use std::path::PathBuf;
use std::process::ExitCode;

/// Filter predicate evaluation tool
#[derive(Parser)]
#[command(name = "jsonpath-predicate")]
#[command(author, version, about = "Evaluate JSONPath filter predicates", long_about = None)]
struct Cli {
    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    color: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate one predicate: <LEFT> <OP> <RIGHT>
    Eval {
        /// Operator token (==, <, in, =~, size, ...)
        op: String,
        /// Left operand as JSON text, or `undefined`
        left: String,
        /// Right operand as JSON text, or `undefined`
        right: String,
        /// Fail on unevaluable predicates instead of treating them as false
        #[arg(long)]
        strict: bool,
        /// Treat two undefined operands as equal
        #[arg(long)]
        undefined_equals_undefined: bool,
        /// JSON file with evaluation options; flags override it
        #[arg(long)]
        options: Option<PathBuf>,
    },
    /// List the registered operator tokens
    Operators,
}

/// Parse operand text as JSON, with the bare word `undefined` meaning an unresolved path
fn parse_operand(text: &str) -> Result<ValueNode> {
    if text.trim() == "undefined" {
        return Ok(ValueNode::Undefined);
    }
    ValueNode::from_json_str(text).with_context(|| format!("Invalid JSON operand: {}", text))
}

fn load_options(path: Option<&PathBuf>) -> Result<EvaluationOptions> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read options file: {}", path.display()))?;
            EvaluationOptions::from_json_str(&text)
                .with_context(|| format!("Invalid options file: {}", path.display()))
        }
        None => Ok(EvaluationOptions::default()),
    }
}

fn run_eval(
    op: &str,
    left: &str,
    right: &str,
    options: EvaluationOptions,
) -> Result<Verdict> {
    let registry = OperatorRegistry::with_standard_operators();
    let left = parse_operand(left)?;
    let right = parse_operand(right)?;

    let ctx = PredicateContext::new(&left, options);
    Ok(registry.evaluate(op, &left, &right, &ctx))
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Eval {
            op,
            left,
            right,
            strict,
            undefined_equals_undefined,
            options,
        } => {
            let mut options = load_options(options.as_ref())?;
            if strict {
                options = options.with_strict_errors(true);
            }
            if undefined_equals_undefined {
                options = options.with_undefined_equals_undefined(true);
            }

            let verdict = run_eval(&op, &left, &right, options)?;
            println!("{}", output::format_verdict(&verdict));
            if let Verdict::Error(err) = verdict {
                if options.strict_errors {
                    bail!(err);
                }
            }
        }
        Commands::Operators => {
            let registry = OperatorRegistry::with_standard_operators();
            for token in registry.tokens() {
                let name = token
                    .parse::<RelationalOperator>()
                    .ok()
                    .map(|op| format!("{:?}", op));
                println!("{}", output::format_operator(token, name.as_deref()));
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    human_panic::setup_panic!();

    let cli = Cli::parse();
    output::setup_colors(&cli.color);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", output::format_error(&err));
            ExitCode::FAILURE
        }
    }
}
