//! `block-viewer [INPUT.csv] [--out PATH] [--fragment]`
//!
//! Reads a comma-separated block model (the built-in reference model when no
//! input is given) and writes it as an interactive 3D figure: a full HTML
//! page by default, or only the embeddable fragment with `--fragment`.
//! Output goes to stdout unless `--out` names a file.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use block_model::{parse_csv, SAMPLE_MODEL_CSV};
use block_render::{html, Figure, FigureOptions};
use block_scene::build_scene;

const USAGE: &str = "usage: block-viewer [INPUT.csv] [--out PATH] [--fragment]";

#[derive(Debug, Default, PartialEq)]
struct Args {
    input: Option<PathBuf>,
    out: Option<PathBuf>,
    fragment: bool,
    help: bool,
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Args> {
    let mut parsed = Args::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => parsed.help = true,
            "--fragment" => parsed.fragment = true,
            "-o" | "--out" => {
                let path = args.next().context("--out needs a path")?;
                parsed.out = Some(PathBuf::from(path));
            }
            flag if flag.starts_with('-') => bail!("unknown option '{flag}'\n{USAGE}"),
            input => {
                if parsed.input.is_some() {
                    bail!("more than one input file given\n{USAGE}");
                }
                parsed.input = Some(PathBuf::from(input));
            }
        }
    }

    Ok(parsed)
}

fn render(source: &str, fragment_only: bool) -> Result<String> {
    let records = parse_csv(source).context("failed to read block model")?;
    let scene = build_scene(&records).context("failed to assemble scene")?;
    log::info!(
        "assembled {} blocks, {} edges, bounds {:?}",
        scene.len(),
        scene.edges().len(),
        scene.bounds()
    );

    let figure = Figure::from_scene(&scene, &FigureOptions::default());
    let fragment = html::fragment(&figure)?;
    Ok(if fragment_only { fragment } else { html::page(&fragment) })
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = parse_args(std::env::args().skip(1))?;
    if args.help {
        println!("{USAGE}");
        return Ok(());
    }

    let source = match &args.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            log::info!("no input given, rendering the reference block model");
            SAMPLE_MODEL_CSV.to_string()
        }
    };

    let output = render(&source, args.fragment)?;

    match &args.out {
        Some(path) => {
            std::fs::write(path, &output)
                .with_context(|| format!("failed to write {}", path.display()))?;
            log::info!("wrote {}", path.display());
        }
        None => std::io::stdout()
            .lock()
            .write_all(output.as_bytes())
            .context("failed to write to stdout")?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Result<Args> {
        parse_args(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn no_arguments_uses_sample() {
        assert_eq!(args(&[]).unwrap(), Args::default());
    }

    #[test]
    fn parses_all_options() {
        let parsed = args(&["model.csv", "--out", "page.html", "--fragment"]).unwrap();
        assert_eq!(parsed.input, Some(PathBuf::from("model.csv")));
        assert_eq!(parsed.out, Some(PathBuf::from("page.html")));
        assert!(parsed.fragment);
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(args(&["--out"]).is_err());
        assert!(args(&["--bogus"]).is_err());
        assert!(args(&["a.csv", "b.csv"]).is_err());
    }

    #[test]
    fn renders_page_and_fragment() {
        let page = render(SAMPLE_MODEL_CSV, false).unwrap();
        assert!(page.starts_with("<html>"));

        let fragment = render(SAMPLE_MODEL_CSV, true).unwrap();
        assert!(fragment.starts_with("<div"));
        assert!(page.contains(&fragment));
    }

    #[test]
    fn render_reports_empty_model() {
        let err = render("X,Y,Z,DX,DY,DZ,Rock_Type,Ore_Flag\n", false).unwrap_err();
        assert!(format!("{err:#}").contains("empty"));
    }
}
