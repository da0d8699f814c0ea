use clap::Parser;
use blogctrl::platform::Builder;

#[derive(Debug, Parser)]
pub struct Cli {
    #[clap(
        long,
        value_name = "BLOGAPP_LISTEN",
        env = "BLOGAPP_LISTEN",
        default_value = "127.0.0.1:8000",
    )]
    pub listen: String,
    #[clap(flatten)]
    pub platform_builder: Builder,
    #[clap(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}
