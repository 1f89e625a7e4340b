use clap::Parser;
use lightsout_core::{DEFAULT_DURATION_SECS, DEFAULT_REVEAL_DELAY_MS, Pattern, SessionConfig};
use wasm_bindgen::prelude::*;

mod game;
mod utils;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Countdown length in seconds
    #[arg(short, long, default_value_t = DEFAULT_DURATION_SECS)]
    seconds: u32,

    /// Pause between solving and showing the full image, in milliseconds
    #[arg(long, default_value_t = DEFAULT_REVEAL_DELAY_MS)]
    reveal_delay_ms: u32,

    /// Starting board as five rows of 0/1, e.g. 10101/01010/10001/01010/10101
    #[arg(short, long)]
    pattern: Option<Pattern>,

    /// Blurred image shown in slices on lit tiles
    #[arg(long, default_value = "blur.jpg")]
    image: String,

    /// Image shown in full once the board is solved
    #[arg(long, default_value = "no_blur.jpg")]
    reveal_image: String,
}

impl Args {
    fn from_location_hash(location_hash: &str) -> Result<Self, clap::Error> {
        Self::try_parse_from(location_hash.split(['#', '&']))
    }

    fn game_props(self) -> game::GameProps {
        let config = SessionConfig::new(
            self.seconds,
            self.reveal_delay_ms,
            self.pattern.unwrap_or_default(),
        );
        game::GameProps {
            config,
            image: self.image.into(),
            reveal_image: self.reveal_image.into(),
        }
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    let (args, parse_error) = match Args::from_location_hash(&location_hash) {
        Ok(args) => (args, None),
        Err(err) => (Args::parse_from([""]), Some(err)),
    };
    if let Some(log_level) = args.verbose.log_level() {
        if let Err(err) = console_log::init_with_level(log_level) {
            gloo::console::warn!(format!("could not initialize logger: {err}"));
        }
    }
    if let Some(err) = parse_error {
        log::error!("ignoring invalid options {:?}: {}", location_hash, err);
    }
    log::debug!("args: {:?}", args);

    let Some(root) = document().get_element_by_id("game") else {
        log::error!("could not find id=\"game\" element");
        return;
    };

    log::debug!("App started");
    yew::Renderer::<game::GameView>::with_root_and_props(root, args.game_props()).render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_hash_uses_defaults() {
        let props = Args::from_location_hash("").unwrap().game_props();

        assert_eq!(props.config, SessionConfig::default());
        assert_eq!(&*props.image, "blur.jpg");
        assert_eq!(&*props.reveal_image, "no_blur.jpg");
    }

    #[test]
    fn hash_options_configure_the_session() {
        let args = Args::from_location_hash(
            "#-v&--seconds=90&--reveal-delay-ms=0&--pattern=11111/11111/11011/11111/11111",
        )
        .unwrap();
        let props = args.game_props();

        assert_eq!(props.config.duration_secs, 90);
        assert_eq!(props.config.reveal_delay_ms, 0);
        assert_eq!(props.config.base.lit_count(), 24);
    }

    #[test]
    fn bad_pattern_is_rejected() {
        assert!(Args::from_location_hash("#--pattern=12345").is_err());
    }

    #[test]
    fn zero_seconds_still_gives_a_playable_clock() {
        let props = Args::from_location_hash("#--seconds=0")
            .unwrap()
            .game_props();

        assert_eq!(props.config.duration_secs, 1);
    }
}
