use std::fmt::Write as _;
use std::io::Write;

use crate::Range;
use crate::Ranges;

/// Prints ranges as alternatives wrapped at the specified column.
///
/// The first line starts with the leadup, the continuation lines are indented by the same number
/// of columns. Columns start at 1, non-positive `highcol` disables wrapping.
#[derive(Clone, Debug)]
pub struct Layout<'a> {
    leadup: &'a str,
    highcol: i64,
}

impl<'a> Layout<'a> {
    pub fn new(leadup: &'a str, highcol: i64) -> Self {
        Self { leadup, highcol }
    }

    pub fn write<W: Write>(&self, ranges: &[Range], mut writer: W) -> Result<(), std::io::Error> {
        writer.write_all(self.render(ranges).as_bytes())?;
        writer.flush()
    }

    pub fn render(&self, ranges: &[Range]) -> String {
        let mut output = String::new();
        if ranges.is_empty() {
            return output;
        }
        if self.highcol <= 0 {
            let _ = writeln!(&mut output, "{}{}", self.leadup, Ranges(ranges));
            return output;
        }
        let width = self.leadup.chars().count();
        let indent = " ".repeat(width);
        let mut prefix = self.leadup;
        let mut ranges = ranges;
        while !ranges.is_empty() {
            output.push_str(prefix);
            let num_placed = self.render_line(ranges, width, &mut output);
            ranges = &ranges[num_placed..];
            prefix = indent.as_str();
        }
        output
    }

    // Returns the number of ranges placed on the line.
    fn render_line(&self, ranges: &[Range], low_col: usize, output: &mut String) -> usize {
        let mut token = String::new();
        let mut col = low_col as i64;
        let mut num_placed = 0;
        for (i, range) in ranges.iter().enumerate() {
            token.clear();
            if i > 0 {
                token.push(' ');
            }
            let _ = write!(&mut token, "{}", range);
            if i + 1 < ranges.len() {
                token.push_str(" |");
            }
            col += token.len() as i64;
            // Place at least one range per line.
            if col > self.highcol && num_placed > 0 {
                break;
            }
            output.push_str(&token);
            num_placed += 1;
        }
        output.push('\n');
        num_placed
    }
}
