//! Serialization for Network
//!
//! Text-based snapshot of a trained network's shape and weights.
//!
//! # Format
//!
//! ```text
//! \nNetwork Version 1\n
//! Tile size = W x H\n
//! Number of inputs = N\n
//! Number of outputs = O\n
//! Number of hidden = M\n
//! Input weights = N x M\n
//!   [0] = <w> <w> ... (M values)\n
//!   ...
//! Output weights = M x O\n
//!   [0] = <w> <w> ... (O values)\n
//!   ...
//! ```
//!
//! Weights are written in the shortest form that parses back to the same
//! `f64`, so a restored network computes bit-identical activations.

use crate::codec::MAX_CODE_BITS;
use crate::network::Network;
use crate::{RecogError, RecogResult};
use std::io::{BufReader, BufWriter, Read, Write};
use std::iter::Peekable;
use std::path::Path;

/// Network serialization format version
const NETWORK_VERSION: u32 = 1;

/// Maximum input size in bytes to prevent unbounded memory growth.
const MAX_INPUT_SIZE: usize = 100_000_000;

/// Maximum number of units in any layer.
const MAX_LAYER_SIZE: usize = 1_000_000;

impl Network {
    /// Read a network from a reader.
    ///
    /// # Errors
    ///
    /// Returns [`RecogError::Snapshot`] if the input is malformed or too
    /// large, or [`RecogError::Io`] if reading fails.
    pub fn read_from_reader(reader: &mut impl Read) -> RecogResult<Self> {
        let buf = read_limited(reader)?;
        Self::read_from_bytes(&buf)
    }

    /// Read a network from a file.
    pub fn read_from_file(path: impl AsRef<Path>) -> RecogResult<Self> {
        let file = std::fs::File::open(path.as_ref())?;
        let mut reader = BufReader::new(file);
        Self::read_from_reader(&mut reader)
    }

    /// Read a network from a byte slice.
    ///
    /// # Examples
    ///
    /// ```
    /// use glyphnet_recog::{Network, NetworkOptions};
    ///
    /// let net = Network::new(&NetworkOptions::new().with_tile_size(3, 3)).unwrap();
    /// let bytes = net.write_to_bytes().unwrap();
    /// assert_eq!(Network::read_from_bytes(&bytes).unwrap(), net);
    /// ```
    pub fn read_from_bytes(data: &[u8]) -> RecogResult<Self> {
        if data.len() > MAX_INPUT_SIZE {
            return Err(too_large());
        }
        let text = std::str::from_utf8(data)
            .map_err(|e| RecogError::Snapshot(format!("invalid UTF-8: {e}")))?;
        let mut lines = text.lines().peekable();
        parse_network(&mut lines)
    }

    /// Write the network to a writer.
    pub fn write_to_writer(&self, writer: &mut impl Write) -> RecogResult<()> {
        let (n, o, m) = (self.num_inputs(), self.num_outputs, self.hidden_count);
        writeln!(writer, "\nNetwork Version {NETWORK_VERSION}")?;
        writeln!(writer, "Tile size = {} x {}", self.tile_width, self.tile_height)?;
        writeln!(writer, "Number of inputs = {n}")?;
        writeln!(writer, "Number of outputs = {o}")?;
        writeln!(writer, "Number of hidden = {m}")?;

        writeln!(writer, "Input weights = {n} x {m}")?;
        write_matrix(writer, &self.input_weights)?;
        writeln!(writer, "Output weights = {m} x {o}")?;
        write_matrix(writer, &self.output_weights)?;
        Ok(())
    }

    /// Write the network to a file.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> RecogResult<()> {
        let file = std::fs::File::create(path.as_ref())?;
        let mut writer = BufWriter::new(file);
        self.write_to_writer(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Write the network to a byte vector.
    pub fn write_to_bytes(&self) -> RecogResult<Vec<u8>> {
        let mut buf = Vec::new();
        self.write_to_writer(&mut buf)?;
        Ok(buf)
    }
}

// ============================================================================
// Internal helpers
// ============================================================================

fn too_large() -> RecogError {
    RecogError::Snapshot(format!(
        "input too large: exceeds maximum allowed size of {MAX_INPUT_SIZE} bytes"
    ))
}

/// Read from a reader with a size limit, returning a clear error if exceeded.
fn read_limited(reader: &mut impl Read) -> RecogResult<Vec<u8>> {
    let mut buf = Vec::new();
    reader
        .take((MAX_INPUT_SIZE + 1) as u64)
        .read_to_end(&mut buf)?;
    if buf.len() > MAX_INPUT_SIZE {
        return Err(too_large());
    }
    Ok(buf)
}

fn write_matrix(writer: &mut impl Write, rows: &[Vec<f64>]) -> RecogResult<()> {
    for (i, row) in rows.iter().enumerate() {
        write!(writer, "  [{i}] =")?;
        for w in row {
            write!(writer, " {w}")?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

fn parse_network<'a>(lines: &mut Peekable<impl Iterator<Item = &'a str>>) -> RecogResult<Network> {
    let version: u32 = parse_field(lines, "Network Version ")?;
    if version != NETWORK_VERSION {
        return Err(RecogError::Snapshot(format!(
            "invalid Network version: {version}"
        )));
    }

    let (tile_width, tile_height) = parse_dims::<u32>(lines, "Tile size = ")?;
    let num_inputs: usize = parse_field(lines, "Number of inputs = ")?;
    let num_outputs: usize = parse_field(lines, "Number of outputs = ")?;
    let hidden_count: usize = parse_field(lines, "Number of hidden = ")?;

    if tile_width == 0 || tile_height == 0 || num_inputs == 0 || hidden_count == 0 {
        return Err(RecogError::Snapshot(format!(
            "zero dimension: tile {tile_width}x{tile_height}, \
             {num_inputs} inputs, {hidden_count} hidden"
        )));
    }
    if tile_width as usize * tile_height as usize != num_inputs {
        return Err(RecogError::Snapshot(format!(
            "tile size {tile_width}x{tile_height} does not match {num_inputs} inputs"
        )));
    }
    if !(1..=MAX_CODE_BITS).contains(&num_outputs) {
        return Err(RecogError::Snapshot(format!(
            "invalid output count: {num_outputs}"
        )));
    }
    if num_inputs > MAX_LAYER_SIZE || hidden_count > MAX_LAYER_SIZE {
        return Err(RecogError::Snapshot(format!(
            "layer too large: {num_inputs} inputs, {hidden_count} hidden"
        )));
    }

    let input_weights = parse_matrix(lines, "Input weights = ", num_inputs, hidden_count)?;
    let output_weights = parse_matrix(lines, "Output weights = ", hidden_count, num_outputs)?;

    if let Some(extra) = next_content_line(lines) {
        return Err(RecogError::Snapshot(format!(
            "unexpected trailing line: '{extra}'"
        )));
    }

    Ok(Network {
        tile_width,
        tile_height,
        num_outputs,
        hidden_count,
        input_weights,
        output_weights,
    })
}

/// Next line that is not blank, trimmed.
fn next_content_line<'a>(lines: &mut Peekable<impl Iterator<Item = &'a str>>) -> Option<&'a str> {
    lines.map(str::trim).find(|l| !l.is_empty())
}

/// Require the next non-blank line to start with `prefix` and return the rest.
fn expect_line<'a>(
    lines: &mut Peekable<impl Iterator<Item = &'a str>>,
    prefix: &str,
) -> RecogResult<&'a str> {
    let line = next_content_line(lines).ok_or_else(|| {
        RecogError::Snapshot(format!("expected line with '{prefix}' not found"))
    })?;
    line.strip_prefix(prefix)
        .map(str::trim)
        .ok_or_else(|| RecogError::Snapshot(format!("expected '{prefix}', found '{line}'")))
}

fn parse_num<T>(s: &str, what: &str) -> RecogResult<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    s.parse::<T>()
        .map_err(|e| RecogError::Snapshot(format!("failed to parse {what} '{s}': {e}")))
}

/// Parse the number after `prefix` on the next line.
fn parse_field<'a, T>(
    lines: &mut Peekable<impl Iterator<Item = &'a str>>,
    prefix: &str,
) -> RecogResult<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let rest = expect_line(lines, prefix)?;
    parse_num(rest, prefix.trim())
}

/// Parse an `A x B` pair after `prefix` on the next line.
fn parse_dims<'a, T>(
    lines: &mut Peekable<impl Iterator<Item = &'a str>>,
    prefix: &str,
) -> RecogResult<(T, T)>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let rest = expect_line(lines, prefix)?;
    let (a, b) = rest
        .split_once('x')
        .ok_or_else(|| RecogError::Snapshot(format!("expected 'A x B', found '{rest}'")))?;
    Ok((
        parse_num(a.trim(), prefix.trim())?,
        parse_num(b.trim(), prefix.trim())?,
    ))
}

/// Parse a matrix header and exactly `rows` rows of `cols` weights.
fn parse_matrix<'a>(
    lines: &mut Peekable<impl Iterator<Item = &'a str>>,
    prefix: &str,
    rows: usize,
    cols: usize,
) -> RecogResult<Vec<Vec<f64>>> {
    let (r, c) = parse_dims::<usize>(lines, prefix)?;
    if (r, c) != (rows, cols) {
        return Err(RecogError::Snapshot(format!(
            "{} is {r} x {c}, expected {rows} x {cols}",
            prefix.trim_end_matches([' ', '='])
        )));
    }

    let mut matrix = Vec::with_capacity(rows);
    for i in 0..rows {
        let line = lines
            .peek()
            .copied()
            .map(str::trim)
            .filter(|l| l.starts_with('['))
            .ok_or_else(|| {
                RecogError::Snapshot(format!("expected {rows} weight rows, found {i}"))
            })?;
        lines.next();
        matrix.push(parse_row(line, i, cols)?);
    }
    if lines.peek().is_some_and(|l| l.trim().starts_with('[')) {
        return Err(RecogError::Snapshot(format!(
            "more than {rows} weight rows"
        )));
    }
    Ok(matrix)
}

/// Parse a row line like `[3] = 0.1 0.2 0.3`.
fn parse_row(line: &str, index: usize, cols: usize) -> RecogResult<Vec<f64>> {
    let (label, values) = line
        .strip_prefix('[')
        .and_then(|rest| rest.split_once(']'))
        .ok_or_else(|| RecogError::Snapshot(format!("malformed weight row: '{line}'")))?;
    let label: usize = parse_num(label.trim(), "row index")?;
    if label != index {
        return Err(RecogError::Snapshot(format!(
            "row [{label}] out of order, expected [{index}]"
        )));
    }
    let values = values
        .trim_start()
        .strip_prefix('=')
        .ok_or_else(|| RecogError::Snapshot(format!("malformed weight row: '{line}'")))?;

    let row = values
        .split_whitespace()
        .map(|s| {
            let w: f64 = parse_num(s, "weight")?;
            if w.is_finite() {
                Ok(w)
            } else {
                Err(RecogError::Snapshot(format!("non-finite weight in row [{index}]: {s}")))
            }
        })
        .collect::<RecogResult<Vec<f64>>>()?;
    if row.len() != cols {
        return Err(RecogError::Snapshot(format!(
            "row [{index}] has {} weights, expected {cols}",
            row.len()
        )));
    }
    Ok(row)
}
