//! `tessera-studio`: checks a theme file.
//!
//! Usage: `tessera-studio [--quiet] THEME.xml`
//!
//! Parses every color, border and font the theme defines and logs what it
//! found. Exits non-zero on the first invalid entry.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use tessera_engine::logging::{init_logging, LoggingConfig};
use tessera_theme::{ColorValue, ThemeValues, XmlDocument};

struct Args {
    theme: PathBuf,
    quiet: bool,
}

fn parse_args() -> Result<Args> {
    let mut theme = None;
    let mut quiet = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--quiet" | "-q" => quiet = true,
            flag if flag.starts_with('-') => bail!("unknown option {flag}"),
            path => {
                if theme.replace(PathBuf::from(path)).is_some() {
                    bail!("only one theme file may be given");
                }
            }
        }
    }
    let Some(theme) = theme else {
        bail!("usage: tessera-studio [--quiet] THEME.xml");
    };
    Ok(Args { theme, quiet })
}

fn main() -> Result<()> {
    let args = parse_args()?;
    init_logging(if args.quiet { LoggingConfig::quiet() } else { LoggingConfig::default() });

    let src = std::fs::read_to_string(&args.theme)
        .with_context(|| format!("reading {}", args.theme.display()))?;
    let doc = XmlDocument::parse(&src)
        .with_context(|| format!("parsing {}", args.theme.display()))?;
    let theme = ThemeValues::parse(&doc)
        .with_context(|| format!("loading theme {}", args.theme.display()))?;

    for (id, color) in &theme.colors {
        match color {
            ColorValue::Rgb(_) | ColorValue::Scaled(_) => {
                let rgb = theme.resolve_rgb(id).with_context(|| format!("resolving color {id:?}"))?;
                log::info!("color {id}: {} {:?}", color.kind(), rgb);
            }
            ColorValue::LinearGradient(g) => {
                log::info!("color {id}: linear gradient, {} stops", g.stops.len());
            }
            ColorValue::RadialGradient(g) => {
                log::info!("color {id}: radial gradient, {} stops", g.stops.len());
            }
        }
    }
    for (id, border) in &theme.borders {
        log::info!("border {id}: {:?}", border);
    }
    for (id, font) in &theme.fonts {
        match &font.from {
            Some(base) => log::info!("font {id}: {} (from {base})", font.descriptor),
            None => log::info!("font {id}: {}", font.descriptor),
        }
    }

    log::info!(
        "{}: {} colors, {} borders, {} fonts",
        args.theme.display(),
        theme.colors.len(),
        theme.borders.len(),
        theme.fonts.len()
    );
    Ok(())
}
