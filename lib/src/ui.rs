use std::io::{self, Stderr, Stdout, Write};
use tabled::{
    builder::Builder,
    settings::{Padding, Style},
};

/// Spaces between table columns.
pub const DEFAULT_TABLE_SPACE_PADDING: usize = 3;

/// Line-oriented output: command output goes to `out`, warnings to `err`.
pub struct Ui<O: Write, E: Write> {
    out: O,
    err: E,
}

impl Ui<Stdout, Stderr> {
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl Ui<Vec<u8>, Vec<u8>> {
    /// In-memory output, for callers that want to inspect what was written.
    pub fn buffered() -> Self {
        Self::new(Vec::new(), Vec::new())
    }

    pub fn output(&self) -> String {
        String::from_utf8_lossy(&self.out).into_owned()
    }

    pub fn errors(&self) -> String {
        String::from_utf8_lossy(&self.err).into_owned()
    }
}

impl<O: Write, E: Write> Ui<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self { out, err }
    }

    pub fn display_text(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")
    }

    pub fn display_newline(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    pub fn display_warnings(&mut self, warnings: &[String]) -> io::Result<()> {
        for warning in warnings {
            writeln!(self.err, "{warning}")?;
        }
        Ok(())
    }

    /// Two aligned columns, label then value, without a header.
    pub fn display_key_value_table(
        &mut self,
        rows: &[(&str, String)],
        padding: usize,
    ) -> io::Result<()> {
        let rows = rows
            .iter()
            .map(|(key, value)| vec![key.to_string(), value.clone()])
            .collect();
        self.display_table_with_header("", rows, padding)
    }

    /// Borderless table; the first row is the header. Every line gets `prefix`.
    pub fn display_table_with_header(
        &mut self,
        prefix: &str,
        rows: Vec<Vec<String>>,
        padding: usize,
    ) -> io::Result<()> {
        let mut builder = Builder::default();
        for row in rows {
            builder.push_record(row);
        }
        let mut table = builder.build();
        table
            .with(Style::empty())
            .with(Padding::new(0, padding, 0, 0));

        for line in table.to_string().lines() {
            writeln!(self.out, "{prefix}{}", line.trim_end())?;
        }
        Ok(())
    }
}
