//! safemark CLI - render the safe Markdown subset to HTML
//!
//! Usage: `safemark [--spaces-per-tab N] [--clean] [FILE|-]`
//! Set `RUST_LOG=warn` to see non-fatal diagnostics.

use std::io::{self, Read, Write};

use safemark::Options;

fn usage_error(message: String) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidInput,
        format!("{message}\nusage: safemark [--spaces-per-tab N] [--clean] [FILE|-]"),
    )
}

fn main() -> io::Result<()> {
    env_logger::init();

    let mut options = Options::default();
    let mut clean = false;
    let mut path = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--clean" => clean = true,
            "--spaces-per-tab" => {
                let value = args
                    .next()
                    .ok_or_else(|| usage_error("--spaces-per-tab needs a value".to_string()))?;
                options.spaces_per_tab = value
                    .parse()
                    .map_err(|e| usage_error(format!("bad --spaces-per-tab {value:?}: {e}")))?;
            }
            _ if path.is_none() => path = Some(arg),
            _ => return Err(usage_error(format!("unexpected argument {arg:?}"))),
        }
    }

    // Read from stdin or file
    let input = match path.as_deref() {
        Some(p) if p != "-" => std::fs::read_to_string(p)?,
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let html = safemark::render_with_options(&input, &options)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    let html = if clean {
        safemark::strip_empty_elements(&html)
    } else {
        html
    };
    io::stdout().write_all(html.as_bytes())?;

    Ok(())
}
