use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use pdf_twoup::{
    BatchOptions, CellSpec, ClassifierStrategy, JobKind, PixelMode, ProcessOptions, ReadingOrder,
    extract_pages, folder_merged_output_path, images_to_pdf, impose_pdf, load_pdf, merge_files,
    merge_folder, merged_output_path, run_batch, save_pdf,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pdf2up", about = "Blank-page removal and two-up imposition for scanned PDFs", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Batch-process a PDF file or directory tree: drop blank pages, apply
    /// the right-to-left filename rule, compose pages two-up
    Process {
        /// Input PDF file or directory (walked recursively)
        input: PathBuf,

        /// Output root; the input's directory structure is mirrored here
        output: PathBuf,

        /// Blank-page classifier
        #[arg(long, default_value = "exact-white", value_enum)]
        classifier: ClassifierArg,

        /// Mean-value blank threshold (pixel classifiers)
        #[arg(long, default_value = "255.0")]
        threshold: f32,

        /// Classification render resolution (defaults to 72 for mean, 100 for exact-white)
        #[arg(long)]
        classify_dpi: Option<u32>,

        /// Filename substring selecting right-to-left page order
        #[arg(long, default_value = "kokugo")]
        keyword: String,

        /// Disable the right-to-left filename rule
        #[arg(long)]
        no_keyword_reverse: bool,

        /// Reverse the whole page sequence before pairing
        #[arg(long)]
        reverse_reading: bool,

        /// Output resolution
        #[arg(long, default_value = "400")]
        dpi: u32,

        /// Cell width in mm
        #[arg(long, default_value = "182.0")]
        cell_width_mm: f32,

        /// Cell height in mm
        #[arg(long, default_value = "257.0")]
        cell_height_mm: f32,

        /// Only process files whose name contains this substring
        #[arg(long)]
        filter: Option<String>,

        /// Output filename suffix
        #[arg(long, default_value = "_processed")]
        suffix: String,

        /// JPEG quality for composed sheets
        #[arg(long, default_value = "85")]
        jpeg_quality: u8,

        /// Load processing options from a JSON file instead of the flags above
        #[arg(long)]
        options: Option<PathBuf>,
    },

    /// Remove blank pages from every matching PDF in a directory, copying
    /// the surviving pages unchanged
    StripBlanks {
        /// Directory containing the input PDFs (not recursive)
        input_dir: PathBuf,

        /// Directory for the filtered PDFs
        output_dir: PathBuf,

        /// Only process files whose name contains this substring
        #[arg(long, default_value = "mondai")]
        filter: String,

        /// Blank-page classifier
        #[arg(long, default_value = "mean", value_enum)]
        classifier: ClassifierArg,

        /// Mean-value blank threshold (pixel classifiers)
        #[arg(long, default_value = "255.0")]
        threshold: f32,

        /// Classification render resolution
        #[arg(long)]
        classify_dpi: Option<u32>,

        /// Filename substring selecting right-to-left page order
        #[arg(long, default_value = "kokugo")]
        keyword: String,

        /// Output filename suffix
        #[arg(long, default_value = "_no_white")]
        suffix: String,
    },

    /// Compose a single PDF two-up, keeping every page
    Impose {
        /// Input PDF file
        input: PathBuf,

        /// Output file (default: next to the input, suffixed)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Reverse the whole page sequence before pairing
        #[arg(long)]
        reverse_reading: bool,

        /// Output resolution
        #[arg(long, default_value = "400")]
        dpi: u32,

        /// JPEG quality for composed sheets
        #[arg(long, default_value = "85")]
        jpeg_quality: u8,
    },

    /// Turn a directory of JPEG scans into one PDF
    Images {
        /// Directory of .jpg files, consumed in filename order
        dir: PathBuf,

        /// One image per page at B5/300 instead of two-up at B5/400
        #[arg(long)]
        single: bool,
    },

    /// Concatenate PDFs into one file
    Merge {
        /// Input PDF files, in order
        #[arg(required = true, num_args = 1..)]
        inputs: Vec<PathBuf>,

        /// Output file (default: first input's stem + _merged.pdf)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Concatenate every PDF directly inside a folder, sorted by name
    MergeDir {
        /// Folder containing the PDFs
        dir: PathBuf,
    },

    /// Copy a page range into a new PDF (0-based, end exclusive)
    Extract {
        /// Input PDF file
        input: PathBuf,

        /// Output PDF file
        output: PathBuf,

        /// First page index to copy
        start: usize,

        /// One past the last page index to copy
        end: usize,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ClassifierArg {
    /// Mean sample value against a threshold
    Mean,
    /// Every sample must be pure white
    ExactWhite,
    /// No text, images or drawings on the page
    Content,
}

fn build_classifier(
    arg: ClassifierArg,
    threshold: f32,
    classify_dpi: Option<u32>,
) -> ClassifierStrategy {
    match arg {
        ClassifierArg::Mean => ClassifierStrategy::PixelThreshold {
            dpi: classify_dpi.unwrap_or(72),
            threshold,
            mode: PixelMode::MeanThreshold,
        },
        ClassifierArg::ExactWhite => ClassifierStrategy::PixelThreshold {
            dpi: classify_dpi.unwrap_or(100),
            threshold,
            mode: PixelMode::ExactWhite,
        },
        ClassifierArg::Content => ClassifierStrategy::ContentInspection,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Process {
            input,
            output,
            classifier,
            threshold,
            classify_dpi,
            keyword,
            no_keyword_reverse,
            reverse_reading,
            dpi,
            cell_width_mm,
            cell_height_mm,
            filter,
            suffix,
            jpeg_quality,
            options,
        } => {
            let options = match options {
                Some(path) => ProcessOptions::load(&path).await?,
                None => ProcessOptions {
                    cell: CellSpec::from_mm(cell_width_mm, cell_height_mm, dpi),
                    classifier: Some(build_classifier(classifier, threshold, classify_dpi)),
                    rtl_keyword: (!no_keyword_reverse).then_some(keyword),
                    reading_order: if reverse_reading {
                        ReadingOrder::Reversed
                    } else {
                        ReadingOrder::Forward
                    },
                    jpeg_quality,
                },
            };
            let batch = BatchOptions {
                name_filter: filter,
                suffix,
                ..Default::default()
            };
            let summary = run_batch(JobKind::Impose, &input, &output, &options, &batch).await?;
            println!(
                "Processed {} file(s), {} failed",
                summary.processed, summary.failed
            );
        }

        Commands::StripBlanks {
            input_dir,
            output_dir,
            filter,
            classifier,
            threshold,
            classify_dpi,
            keyword,
            suffix,
        } => {
            let options = ProcessOptions {
                classifier: Some(build_classifier(classifier, threshold, classify_dpi)),
                rtl_keyword: Some(keyword),
                ..Default::default()
            };
            let batch = BatchOptions {
                name_filter: Some(filter),
                suffix,
                recursive: false,
                ..Default::default()
            };
            let summary =
                run_batch(JobKind::StripBlanks, &input_dir, &output_dir, &options, &batch).await?;
            println!(
                "Processed {} file(s), {} failed",
                summary.processed, summary.failed
            );
        }

        Commands::Impose {
            input,
            output,
            reverse_reading,
            dpi,
            jpeg_quality,
        } => {
            let options = ProcessOptions {
                cell: CellSpec::b5(dpi),
                classifier: None,
                rtl_keyword: None,
                reading_order: if reverse_reading {
                    ReadingOrder::Reversed
                } else {
                    ReadingOrder::Forward
                },
                jpeg_quality,
            };
            let suffix = if reverse_reading {
                "_2in1_B4_reverse"
            } else {
                "_2in1_B4"
            };
            let output = output.unwrap_or_else(|| {
                let stem = input
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_default();
                input.with_file_name(format!("{stem}{suffix}.pdf"))
            });

            let outcome = impose_pdf(&input, &options).await?;
            save_pdf(outcome.document, &output).await?;
            println!(
                "Imposed {} pages onto {} sheet(s) → {}",
                outcome.stats.source_pages,
                outcome.stats.output_pages,
                output.display()
            );
        }

        Commands::Images { dir, single } => {
            let spec = if single {
                CellSpec::b5(300)
            } else {
                CellSpec::b5(400)
            };
            let outcome = images_to_pdf(&dir, spec, ReadingOrder::Forward, !single, 85).await?;
            let output = outcome.output.clone();
            save_pdf(outcome.document, &output).await?;
            println!(
                "Combined {} image(s) → {}",
                outcome.image_count,
                output.display()
            );
        }

        Commands::Merge { inputs, output } => {
            let merged = merge_files(&inputs).await?;
            let output = output.unwrap_or_else(|| merged_output_path(&inputs[0]));
            save_pdf(merged, &output).await?;
            println!("Merged {} file(s) → {}", inputs.len(), output.display());
        }

        Commands::MergeDir { dir } => {
            let (merged, inputs) = merge_folder(&dir).await?;
            let output = folder_merged_output_path(&dir);
            save_pdf(merged, &output).await?;
            println!("Merged {} file(s) → {}", inputs.len(), output.display());
        }

        Commands::Extract {
            input,
            output,
            start,
            end,
        } => {
            let source = load_pdf(&input).await?;
            let extracted = extract_pages(&source, start, end)?;
            save_pdf(extracted, &output).await?;
            println!(
                "Extracted pages {}..{} of {} → {}",
                start,
                end,
                input.display(),
                output.display()
            );
        }
    }

    Ok(())
}
