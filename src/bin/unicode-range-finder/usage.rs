use std::fmt::Write;

use clap::Command;
use clap::CommandFactory;
use unicode_range_finder::CATEGORY_NAMES;

use crate::Args;

pub fn command() -> Command {
    Args::command().after_help(search_params_help())
}

pub fn write_usage<W: std::io::Write>(mut writer: W) -> Result<(), std::io::Error> {
    write!(writer, "{}", command().render_help())?;
    writer.flush()
}

fn search_params_help() -> String {
    let mut help = String::with_capacity(1024);
    help.push_str(
        "Where search params is a space separated set of:
 * A category (e.g. cat=N, cat=Cc etc)
 * A specific or range of characters (e.g. ch=a-z, ch=# etc)
 * A specific or range of codepoints (e.g. cp=1a-af, cp=feff etc)

Categories:
",
    );
    for (gc, name) in CATEGORY_NAMES {
        let _ = writeln!(&mut help, "    {gc}: {name}");
    }
    help
}
