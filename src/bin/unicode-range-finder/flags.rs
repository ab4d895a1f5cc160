use std::ffi::OsString;

/// Long flags that may be written with a single dash, e.g. `-range=0-0x7f`.
const LONG_FLAGS: [&str; 7] = [
    "unicode", "leadup", "highcol", "range", "table", "verbose", "help",
];

/// Rewrites single-dash long flags to double-dash ones.
pub fn normalize_flags<I: IntoIterator<Item = OsString>>(args: I) -> Vec<OsString> {
    let mut end_of_options = false;
    args.into_iter()
        .enumerate()
        .map(|(i, arg)| {
            if i == 0 || end_of_options {
                return arg;
            }
            let Some(s) = arg.to_str() else {
                return arg;
            };
            if s == "--" {
                end_of_options = true;
                return arg;
            }
            if is_single_dash_long_flag(s) {
                return format!("-{s}").into();
            }
            arg
        })
        .collect()
}

fn is_single_dash_long_flag(arg: &str) -> bool {
    let Some(name) = arg.strip_prefix('-') else {
        return false;
    };
    let name = name.split_once('=').map_or(name, |(name, _)| name);
    LONG_FLAGS.contains(&name)
}
