use std::io::Write;

use anyhow::{Context, Result};
use prometheus::{Encoder, TextEncoder};

/// Write every registered metric family in the Prometheus text format.
pub fn write_text<W: Write>(w: &mut W) -> Result<()> {
    let mf = prometheus::gather();
    let encoder = TextEncoder::new();
    let mut buf = Vec::new();
    encoder.encode(&mf, &mut buf).context("encode metrics")?;
    w.write_all(&buf).context("write metrics")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::counters;

    #[test]
    fn text_exposition_contains_counters() {
        counters::on_normalized("posix", false, 2);
        counters::inc_output_error("not_utf8");

        let mut buf = Vec::new();
        write_text(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("pathnorm_paths_total"));
        assert!(text.contains("pathnorm_parent_refs_retained_total"));
        assert!(text.contains(r#"reason="not_utf8""#));
    }
}
