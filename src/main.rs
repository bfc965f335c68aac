use std::fs;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};

use stylekit::classes::{generate_all_breakpoints, generate_classes};
use stylekit::export::{to_css, to_html};
use stylekit::preview::lint;
use stylekit::session::EditorSession;
use stylekit::state::Breakpoint;
use stylekit::styles::generate_styles;
use stylekit::templates::builtin_templates;

#[derive(Parser)]
#[command(name = "stylekit", version = "0.2.0")]
#[command(about = "stylekit — style-state engine for visual editors")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export a state JSON file as HTML, CSS, classes, or styles
    Export {
        /// Input state or session JSON file
        file: PathBuf,

        /// Output format (default: html)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Resolve against a specific breakpoint (base, sm, md, lg, xl, 2xl)
        #[arg(long)]
        breakpoint: Option<String>,

        /// Write output to file instead of stdout
        #[arg(short)]
        o: Option<PathBuf>,
    },

    /// Validate a state JSON file and report warnings
    Check {
        /// Input state or session JSON file
        file: PathBuf,

        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },

    /// Start a hot-reload preview server for a state JSON file
    Dev {
        /// Input state or session JSON file
        file: PathBuf,

        /// Server port
        #[arg(long, default_value_t = 3333)]
        port: u16,
    },

    /// Batch export all state JSON files in a directory
    Build {
        /// Input directory containing state JSON files
        dir: PathBuf,

        /// Output directory for exported files
        #[arg(long, default_value = "dist")]
        outdir: PathBuf,
    },

    /// List the built-in component templates
    Templates,
}

/// Output format for the export command.
#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// HTML fragment
    Html,
    /// CSS rule block
    Css,
    /// Utility-class string
    Classes,
    /// Inline-style map as JSON
    Styles,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Export {
            file,
            format,
            breakpoint,
            o,
        } => {
            let session = load_session_or_exit(&file);
            let bp = match breakpoint.as_deref() {
                None => Breakpoint::Base,
                Some(raw) => match raw.parse::<Breakpoint>() {
                    Ok(bp) => bp,
                    Err(e) => {
                        eprintln!("error: {e}");
                        process::exit(1);
                    }
                },
            };
            let effective = session.resolve(bp);

            let output = match format.unwrap_or(OutputFormat::Html) {
                OutputFormat::Html => {
                    let classes = if breakpoint.is_some() {
                        generate_classes(&effective, bp)
                    } else {
                        generate_all_breakpoints(&session)
                    };
                    to_html(&effective, &classes, &generate_styles(&effective))
                }
                OutputFormat::Css => to_css(&effective),
                OutputFormat::Classes => {
                    if breakpoint.is_some() {
                        generate_classes(&effective, bp)
                    } else {
                        generate_all_breakpoints(&session)
                    }
                }
                OutputFormat::Styles => {
                    let styles = generate_styles(&effective);
                    match serde_json::to_string_pretty(&styles) {
                        Ok(json) => json,
                        Err(e) => {
                            eprintln!("error: {e}");
                            process::exit(1);
                        }
                    }
                }
            };

            match o {
                Some(path) => {
                    if let Err(e) = fs::write(&path, output) {
                        eprintln!("error: cannot write '{}': {e}", path.display());
                        process::exit(1);
                    }
                    eprintln!("wrote {}", path.display());
                }
                None => println!("{output}"),
            }
        }

        Commands::Check { file, strict } => {
            let session = load_session_or_exit(&file);
            let warnings = lint(&session.resolve(Breakpoint::Base));
            for w in &warnings {
                eprintln!("warning: {w}");
            }
            if warnings.is_empty() {
                eprintln!("{}: ok", file.display());
            } else if strict {
                process::exit(1);
            }
        }

        Commands::Dev { file, port } => {
            // Fail fast on an unreadable file before binding the port.
            load_session_or_exit(&file);
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(rt) => rt,
                Err(e) => {
                    eprintln!("error: cannot start runtime: {e}");
                    process::exit(1);
                }
            };
            if let Err(e) = runtime.block_on(stylekit::server::run_dev_server(file, port)) {
                eprintln!("error: dev server failed: {e}");
                process::exit(1);
            }
        }

        Commands::Build { dir, outdir } => {
            let entries = match fs::read_dir(&dir) {
                Ok(entries) => entries,
                Err(e) => {
                    eprintln!("error: cannot read '{}': {e}", dir.display());
                    process::exit(1);
                }
            };
            if let Err(e) = fs::create_dir_all(&outdir) {
                eprintln!("error: cannot create '{}': {e}", outdir.display());
                process::exit(1);
            }

            let mut count = 0usize;
            for entry in entries.filter_map(|e| e.ok()) {
                let path = entry.path();
                if path.extension().map(|ext| ext == "json") != Some(true) {
                    continue;
                }
                let session = load_session_or_exit(&path);
                let effective = session.resolve(Breakpoint::Base);
                let classes = generate_all_breakpoints(&session);
                let html = to_html(&effective, &classes, &generate_styles(&effective));
                let css = to_css(&effective);

                let stem = path
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or("element");
                let html_path = outdir.join(format!("{stem}.html"));
                let css_path = outdir.join(format!("{stem}.css"));
                if let Err(e) = fs::write(&html_path, html).and_then(|_| fs::write(&css_path, css))
                {
                    eprintln!("error: cannot write output for '{}': {e}", path.display());
                    process::exit(1);
                }
                count += 1;
            }
            eprintln!("exported {count} file(s) to {}", outdir.display());
        }

        Commands::Templates => {
            for template in builtin_templates() {
                println!(
                    "{:<16} {:<12} {} — {}",
                    template.id,
                    template.category.as_str(),
                    template.name,
                    template.description
                );
            }
        }
    }
}

fn load_session_or_exit(path: &PathBuf) -> EditorSession {
    let json = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: cannot read '{}': {e}", path.display());
            process::exit(1);
        }
    };
    match EditorSession::from_json(&json) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}
