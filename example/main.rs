//! Resolve relative references against a base url.
//!
//! ```not_rust
//! $ RUST_LOG=debug example https://example.com/about/us/ ../me/ "?section=team"
//! https://example.com/about/me/
//! https://example.com/about/us/?section=team
//! ```
use std::process::ExitCode;
use uref::{RelativeRef, Uri};

fn main() -> ExitCode {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(base) = args.next() else {
        eprintln!("usage: example <base-url> [reference]...");
        return ExitCode::FAILURE;
    };

    let base = match Uri::parse(&base) {
        Ok(ok) => ok,
        Err(err) => {
            eprintln!("{base}: {err}");
            return ExitCode::FAILURE;
        }
    };

    log::info!("base {base}, port {}", base.port());
    if base.credentials().is_some() {
        log::info!("credentials stripped: {}", base.strip_credentials());
    }

    for reference in args {
        let reference = RelativeRef::parse(&reference);
        log::debug!("path {:?}, query {:?}", reference.path(), reference.query());
        println!("{}", reference.apply(&base));
    }

    ExitCode::SUCCESS
}
