mod args;

pub use args::Args;

use crate::processor::ProcessOptions;

impl From<Args> for ProcessOptions {
    fn from(args: Args) -> Self {
        Self { path: args.file, emit_done: !args.no_done }
    }
}
