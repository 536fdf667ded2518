pub mod app;
pub mod cli;
pub mod key_binds;
pub mod message;

use app::PhotoBrowserApp;
use cli::Flags;

fn main() -> cosmic::iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let flags = match Flags::from_env() {
        Ok(flags) => flags,
        Err(e) => {
            eprintln!("{e}\n\n{}", cli::HELP);
            std::process::exit(2);
        }
    };

    if flags.help {
        print!("{}", cli::HELP);
        return Ok(());
    }

    let settings = cosmic::app::Settings::default().size_limits(
        cosmic::iced::Limits::NONE
            .min_width(400.0)
            .min_height(300.0),
    );

    cosmic::app::run::<PhotoBrowserApp>(settings, flags)
}
