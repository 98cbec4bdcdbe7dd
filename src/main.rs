// SPDX-License-Identifier: MPL-2.0
use listing_gallery::app::{self, paths, Flags};
use tracing_subscriber::prelude::*;

const HELP: &str = "\
listing_gallery - property listing viewer

USAGE:
  listing_gallery [OPTIONS] <listing.json>
  listing_gallery [OPTIONS] --id <n>

OPTIONS:
  --lang <id>          UI language (e.g. en-US, fr, pt-BR)
  --i18n-dir <dir>     Directory with .ftl files overriding the built-in ones
  --config-dir <dir>   Directory holding settings.toml
  --api <base-url>     Listing API base URL (used with --id)
  --id <n>             Listing id to fetch from the API
  -h, --help           Print this help
";

fn main() -> iced::Result {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "listing_gallery=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let flags = match parse_flags(pico_args::Arguments::from_env()) {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.config_dir.clone());

    app::run(flags)
}

/// Parses the command line; `Ok(None)` means help was requested.
fn parse_flags(mut args: pico_args::Arguments) -> Result<Option<Flags>, pico_args::Error> {
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let mut flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        i18n_dir: args.opt_value_from_str("--i18n-dir")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        api: args.opt_value_from_str("--api")?,
        listing_id: args.opt_value_from_str("--id")?,
        listing_path: None,
    };

    flags.listing_path = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    if flags.listing_path.is_none() && flags.listing_id.is_none() {
        return Err(pico_args::Error::MissingArgument);
    }

    Ok(Some(flags))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    fn parse(args: &[&str]) -> Result<Option<Flags>, pico_args::Error> {
        parse_flags(pico_args::Arguments::from_vec(
            args.iter().map(OsString::from).collect(),
        ))
    }

    #[test]
    fn listing_path_is_taken_from_free_argument() {
        let flags = parse(&["--lang", "fr", "listing.json"])
            .expect("valid arguments")
            .expect("not a help request");
        assert_eq!(flags.listing_path.as_deref(), Some("listing.json"));
        assert_eq!(flags.lang.as_deref(), Some("fr"));
        assert!(flags.listing_id.is_none());
    }

    #[test]
    fn listing_id_and_api_are_parsed() {
        let flags = parse(&["--id", "17", "--api", "https://listings.example/api"])
            .expect("valid arguments")
            .expect("not a help request");
        assert_eq!(flags.listing_id, Some(17));
        assert_eq!(flags.api.as_deref(), Some("https://listings.example/api"));
        assert!(flags.listing_path.is_none());
    }

    #[test]
    fn help_short_circuits() {
        assert!(parse(&["--help", "--id", "nope"])
            .expect("help is always accepted")
            .is_none());
    }

    #[test]
    fn missing_source_is_rejected() {
        assert!(matches!(
            parse(&["--lang", "fr"]),
            Err(pico_args::Error::MissingArgument)
        ));
    }

    #[test]
    fn malformed_id_is_rejected() {
        assert!(parse(&["--id", "abc"]).is_err());
    }
}
