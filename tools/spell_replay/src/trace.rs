use anyhow::{bail, Context, Result};
use spellcast::Reading;

const HEADER: &str = "t_ms,held,ax,ay,az,gx,gy,gz";
const COLUMNS: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TraceRow {
    pub t_ms: u64,
    pub held: bool,
    pub reading: Reading,
}

pub fn parse_trace(text: &str) -> Result<Vec<TraceRow>> {
    let mut rows = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        let line_no = line_no + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed == HEADER {
            continue;
        }
        let row = parse_row(trimmed).with_context(|| format!("line {line_no}"))?;
        rows.push(row);
    }
    Ok(rows)
}

fn parse_row(line: &str) -> Result<TraceRow> {
    let parts: Vec<&str> = line.split(',').map(str::trim).collect();
    if parts.len() != COLUMNS {
        bail!("expected {COLUMNS} columns, found {}", parts.len());
    }

    let t_ms = parts[0]
        .parse::<u64>()
        .with_context(|| format!("invalid t_ms '{}'", parts[0]))?;
    let held = match parts[1] {
        "1" | "true" => true,
        "0" | "false" => false,
        other => bail!("invalid held '{other}'"),
    };
    let axis = |idx: usize, field: &str| -> Result<i16> {
        parts[idx]
            .parse::<i16>()
            .with_context(|| format!("invalid {field} '{}'", parts[idx]))
    };

    Ok(TraceRow {
        t_ms,
        held,
        reading: Reading::new(
            axis(2, "ax")?,
            axis(3, "ay")?,
            axis(4, "az")?,
            axis(5, "gx")?,
            axis(6, "gy")?,
            axis(7, "gz")?,
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_header_comments_and_blank_lines() {
        let text = "# flick left\nt_ms,held,ax,ay,az,gx,gy,gz\n\n10,1,0,0,16384,-12,32767,4\n";
        let rows = parse_trace(text).expect("trace");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].t_ms, 10);
        assert!(rows[0].held);
        assert_eq!(rows[0].reading.gy, i16::MAX);
        assert_eq!(rows[0].reading.az, 16_384);
    }

    #[test]
    fn reports_line_of_bad_value() {
        let err = parse_trace("0,0,0,0,0,0,0,0\n10,1,0,0,0,0,40000,0\n").expect_err("overflow");
        let message = format!("{err:#}");
        assert!(message.contains("line 2"), "{message}");
        assert!(message.contains("gy"), "{message}");
    }

    #[test]
    fn rejects_short_rows() {
        assert!(parse_trace("10,1,0,0,0\n").is_err());
    }
}
