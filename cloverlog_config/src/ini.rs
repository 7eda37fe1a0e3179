//! Minimal INI reader for `key=value` config files.

use std::collections::BTreeMap;

/// Flattened key/value pairs; section headers do not namespace keys.
pub type IniMap = BTreeMap<String, String>;

/// Parse INI text into a flat map.
///
/// Accepted lines:
/// - blank lines, `;` and `#` comments
/// - `[section]` headers (ignored, keys share one namespace, later wins)
/// - `key = value`, optionally followed by `; comment`
/// - `key = "value"` or `key = 'value'`; quoted values keep `;` and whitespace
///
/// Any other non-empty line fails the whole parse.
pub fn parse_ini(text: &str) -> eyre::Result<IniMap> {
    let mut out = IniMap::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
            continue;
        }
        if line.starts_with('[') {
            if !line.ends_with(']') {
                eyre::bail!("line {}: unterminated section header", idx + 1);
            }
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            eyre::bail!("line {}: expected key=value", idx + 1);
        };
        let key = key.trim();
        if key.is_empty() {
            eyre::bail!("line {}: empty key", idx + 1);
        }
        let value = parse_value(value.trim())
            .map_err(|msg| eyre::eyre!("line {}: {}", idx + 1, msg))?;
        out.insert(key.to_string(), value.to_string());
    }
    Ok(out)
}

fn parse_value(v: &str) -> Result<&str, &'static str> {
    for q in ['"', '\''] {
        if let Some(rest) = v.strip_prefix(q) {
            let Some(end) = rest.find(q) else {
                return Err("unterminated quoted value");
            };
            let tail = rest[end + 1..].trim_start();
            if !tail.is_empty() && !tail.starts_with(';') {
                return Err("unexpected text after quoted value");
            }
            return Ok(&rest[..end]);
        }
    }
    Ok(v.split_once(';').map_or(v, |(value, _comment)| value.trim_end()))
}
