use super::args::*;
use crate::exit_codes::SUCCESS;

pub mod fingerprint;
pub mod inspect;
pub mod layout;

pub fn dispatch(cli: Cli) -> i32 {
    match cli.cmd {
        Command::Inspect(args) => inspect::cmd_inspect(args),
        Command::Layout(args) => layout::cmd_layout(args),
        Command::Match(args) => fingerprint::cmd_match(args),
        Command::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            SUCCESS
        }
    }
}
