//! # Folio CLI Application
//!
//! Renders the portfolio panels as plain text, or as JSON for scripting.
//!
//! ```text
//! folio_cli                      # configured initial section
//! folio_cli --section skills     # one section
//! folio_cli --all                # every section in navigation order
//! folio_cli --content me.json    # replace the built-in content
//! folio_cli --export-content out.json
//! ```

mod render;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use folio_core::{load_content, save_content, Content, FolioError, FolioResult, Footer, NavigationState, Panel, Section, SiteConfig};

#[derive(Parser, Debug)]
#[command(name = "folio_cli", version, about = "Render the Folio portfolio in the terminal")]
struct Args {
    /// Section to show (about, projects, experience, skills, education)
    #[arg(short, long)]
    section: Option<Section>,

    /// Show every section in navigation order
    #[arg(long, conflicts_with = "section")]
    all: bool,

    /// Content file to use instead of the built-in content
    #[arg(long, value_name = "PATH")]
    content: Option<PathBuf>,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write the effective content as JSON to PATH and exit
    #[arg(long, value_name = "PATH")]
    export_content: Option<PathBuf>,

    /// Print panel data as JSON instead of text
    #[arg(long)]
    json: bool,
}

/// Log filter when `RUST_LOG` is unset; logs go to stderr, panels to stdout
const DEFAULT_LOG_FILTER: &str = "info";

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    match run(&args) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if args.json {
                if let Ok(json) = serde_json::to_string_pretty(&e) {
                    eprintln!("{}", json);
                }
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> FolioResult<String> {
    let config = match &args.config {
        Some(path) => SiteConfig::load_from(path)?,
        None => SiteConfig::load()?,
    };

    let content = match &args.content {
        Some(path) => load_content(path)?,
        None => config.load_content()?,
    };

    if let Some(path) = &args.export_content {
        save_content(&content, path)?;
        return Ok(format!("Wrote content to {}\n", path.display()));
    }

    let sections: Vec<Section> = if args.all {
        Section::ALL.to_vec()
    } else {
        vec![args.section.unwrap_or(config.initial_section)]
    };

    if args.json {
        render_json(&content, &sections)
    } else {
        Ok(render_text(&content, &sections))
    }
}

/// Header, each requested panel, footer
fn render_text(content: &Content, sections: &[Section]) -> String {
    let mut nav = NavigationState::default();
    let mut out = String::new();

    for &section in sections {
        nav.select_section(section);
        out.push_str(&render::render_header(&content.profile, &nav));
        out.push('\n');
        out.push_str(&render::render_panel(Panel::for_section(section, content)));
        out.push('\n');
    }

    out.push_str(&render::render_footer(&Footer::current(&content.profile)));
    out
}

fn render_json(content: &Content, sections: &[Section]) -> FolioResult<String> {
    let panels: Vec<Panel<'_>> = sections
        .iter()
        .map(|section| Panel::for_section(*section, content))
        .collect();

    let mut json = serde_json::to_string_pretty(&panels).map_err(|e| FolioError::SerializationError {
        reason: e.to_string(),
    })?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["folio_cli", "--config", "/nonexistent/folio/config.toml"];
        argv.extend_from_slice(extra);
        Args::parse_from(argv)
    }

    #[test]
    fn test_default_shows_about() {
        let out = run(&args(&[])).unwrap();
        assert!(out.contains("[About]"));
        assert!(out.contains("Building Tomorrow's Healthcare Integration"));
        assert!(out.contains("All rights reserved."));
    }

    #[test]
    fn test_section_flag() {
        let out = run(&args(&["--section", "projects"])).unwrap();
        assert!(out.contains("[Projects]"));
        assert!(out.contains("Service Cloud Management"));
        assert!(!out.contains("Technical Expertise"));
    }

    #[test]
    fn test_all_renders_every_section() {
        let out = run(&args(&["--all"])).unwrap();
        for section in Section::ALL {
            assert!(out.contains(&format!("[{}]", section.label())));
        }
    }

    #[test]
    fn test_json_output() {
        let out = run(&args(&["--section", "skills", "--json"])).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["section"], "skills");
        assert_eq!(value[0]["data"].as_array().unwrap().len(), 11);
    }

    #[test]
    fn test_unknown_section_is_rejected_by_parser() {
        let result = Args::try_parse_from(["folio_cli", "--section", "blog"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_export_then_load() {
        let path = std::env::temp_dir().join("folio_cli_test_export.json");
        let path_str = path.display().to_string();

        run(&args(&["--export-content", path_str.as_str()])).unwrap();
        let out = run(&args(&["--content", path_str.as_str(), "--section", "education"])).unwrap();
        assert!(out.contains("BSc Computer Science"));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_default_log_filter_is_info() {
        assert_eq!(DEFAULT_LOG_FILTER, "info");
        assert_eq!(tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER).to_string(), "info");
    }

    #[test]
    fn test_missing_content_file_fails() {
        let err = run(&args(&["--content", "/nonexistent/portfolio.json"])).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }
}
