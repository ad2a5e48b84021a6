use clap::Parser;
use plainsite::{config, output, render};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "plainsite")]
#[command(about = "Static site generator for plain-text content")]
#[command(long_about = "\
Static site generator for plain-text content

A declarative config.toml names the pages of your site; each page pulls its
content from plain-text files in a matching subfolder of the content root.

Site structure:

  config.toml                      # Site config: base params, pages, social links
  content/
  ├── home/
  │   └── welcome.md               # Content records for the 'home' page
  └── blog/
      ├── first-post.md            # Article pages get one detail page per record
      └── second-post.md

Content file format (sections separated by a literal '-----' line):

  Post title
  -----
  author: Jane
  date: 2026-01-15
  -----
  Short preview, shown in listings.
  -----
  Full body, written in **markdown**.

Pages with content_type = \"default\" render one aggregate page; pages with
content_type = \"article\" additionally render one detail page per record
into a subfolder named after the page.")]
#[command(version)]
struct Cli {
    /// Site configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Delete previously generated output before rendering
    #[arg(short, long)]
    reset: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let status = run(&cli);
    println!("{}", output::status_line(status.code()));
    ExitCode::from(status.code())
}

fn run(cli: &Cli) -> render::RunStatus {
    let config = match config::load_config(&cli.config) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            return render::RunStatus::Failure;
        }
    };

    if cli.reset {
        if let Err(err) = render::reset(&config) {
            eprintln!("Reset failed: {err}");
            return render::RunStatus::Failure;
        }
    }

    match render::render_site(&config) {
        Ok(report) => {
            output::print_render_report(&report);
            report.status()
        }
        Err(err) => {
            eprintln!("{err}");
            render::RunStatus::Failure
        }
    }
}
