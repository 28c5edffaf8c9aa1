use anyhow::{bail, ensure, Context, Result};
use encoding_rs::Encoding;
use indicatif::{ProgressBar, ProgressIterator, ProgressStyle};
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use inflection_table_json::inflection_table::{
    parse_inflection_table_with,
    renderer::{render_csv, render_xml},
    InflectionTable, ParseOptions, RowPolicy, TableKind,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Json,
    Xml,
    Csv,
}

impl OutputFormat {
    fn of(name: &str) -> Result<Self> {
        match name {
            "json" => Ok(Self::Json),
            "xml" => Ok(Self::Xml),
            "csv" => Ok(Self::Csv),
            name => bail!("Unknown output format: {}", name),
        }
    }

    fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Xml => "xml",
            Self::Csv => "csv",
        }
    }
}

struct Args {
    inputs: Vec<String>,
    output_path: Option<String>,
    kind: TableKind,
    format: OutputFormat,
    encoding: &'static Encoding,
    options: ParseOptions,
    verbose: bool,
}

fn usage(opts: &getopts::Options) -> String {
    opts.usage("Usage: inflection-table-json [options] INPUT...")
}

fn get_args() -> Result<Option<Args>> {
    let args: Vec<String> = env::args().skip(1).collect();

    let mut opts = getopts::Options::new();
    opts.optopt("k", "kind", "verb, noun or a part-of-speech heading (default: noun)", "KIND");
    opts.optopt("f", "format", "json, xml or csv (default: json)", "FORMAT");
    opts.optopt("o", "output", "directory to write one file per input", "DIR");
    opts.optopt("e", "encoding", "input encoding label (default: utf-8)", "LABEL");
    opts.optflag("", "strict", "abort a table at the first anomalous row");
    opts.optflag("v", "verbose", "debug logging");
    opts.optflag("h", "help", "print this help");

    let matches = match opts.parse(&args) {
        Ok(m) => m,
        Err(f) => bail!(f),
    };

    if matches.opt_present("h") {
        println!("{}", usage(&opts));
        return Ok(None);
    }

    ensure!(!matches.free.is_empty(), "{}", usage(&opts));

    let kind = match matches.opt_str("k").as_deref() {
        None | Some("noun") => TableKind::Noun,
        Some("verb") => TableKind::Verb,
        Some(heading) => TableKind::from_part_of_speech(heading),
    };

    let format = match matches.opt_str("f") {
        Some(name) => OutputFormat::of(&name)?,
        None => OutputFormat::Json,
    };

    let encoding = match matches.opt_str("e") {
        Some(label) => Encoding::for_label(label.as_bytes())
            .with_context(|| format!("Unknown encoding: {}", label))?,
        None => encoding_rs::UTF_8,
    };

    let options = ParseOptions {
        row_policy: if matches.opt_present("strict") {
            RowPolicy::Reject
        } else {
            RowPolicy::Tolerate
        },
    };

    Ok(Some(Args {
        inputs: matches.free.clone(),
        output_path: matches.opt_str("o"),
        kind,
        format,
        encoding,
        options,
        verbose: matches.opt_present("v"),
    }))
}

enum BuildOut {
    Stdout,
    File { root: PathBuf },
}

impl BuildOut {
    fn init_file(root: &str) -> Result<Self> {
        let root = PathBuf::from(&root);
        fs::create_dir(&root).context("Failed to create output directory")?;

        Ok(Self::File { root })
    }

    fn save(&self, input: &Path, format: OutputFormat, content: &str) -> Result<()> {
        match self {
            BuildOut::Stdout => println!("{}", content),
            BuildOut::File { root } => {
                let stem = input
                    .file_stem()
                    .context("Input has no file name")?
                    .to_string_lossy();
                fs::write(
                    root.join(format!("{}.{}", stem, format.extension())),
                    content,
                )?;
            }
        }

        Ok(())
    }
}

fn render(table: &InflectionTable, format: OutputFormat) -> Result<String> {
    let content = match format {
        OutputFormat::Json => serde_json::to_string_pretty(table)?,
        OutputFormat::Xml => render_xml(&table.to_document()),
        OutputFormat::Csv => render_csv(&table.table)?,
    };
    Ok(content)
}

fn process(args: &Args, out: &BuildOut, input: &Path) -> Result<()> {
    let bytes = fs::read(input).context("Failed to read input")?;
    let (html, _, had_errors) = args.encoding.decode(&bytes);
    if had_errors {
        warn!(input = %input.display(), "input contains malformed characters");
    }

    let table = parse_inflection_table_with(&html, args.kind, &args.options)?;
    for anomaly in &table.diagnostics {
        info!(input = %input.display(), "{}", anomaly);
    }

    out.save(input, args.format, &render(&table, args.format)?)
}

fn main() -> Result<()> {
    let args = match get_args()? {
        Some(args) => args,
        None => return Ok(()),
    };

    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let out = if let Some(output_path) = &args.output_path {
        BuildOut::init_file(output_path)
            .with_context(|| format!("Failed to output directory: {}", output_path))?
    } else {
        BuildOut::Stdout
    };

    let pb = match &out {
        BuildOut::File { .. } if 1 < args.inputs.len() => {
            create_progress_bar(args.inputs.len() as u64)
        }
        _ => ProgressBar::hidden(),
    };

    let mut failed = 0;
    for input in args.inputs.iter().progress_with(pb) {
        let input = PathBuf::from(input);
        if let Err(err) = process(&args, &out, &input)
            .with_context(|| format!("Failed to process: {}", input.display()))
        {
            error!("{:#}", err);
            failed += 1;
        }
    }

    ensure!(failed == 0, "{} of {} inputs failed", failed, args.inputs.len());

    Ok(())
}

fn create_progress_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::with_template(
            "{percent:>3}% [{wide_bar:.cyan/blue}] {pos}/{len} [{elapsed_precise} < {eta_precise}]",
        )
        .unwrap()
        .progress_chars("#-"),
    );
    pb
}
