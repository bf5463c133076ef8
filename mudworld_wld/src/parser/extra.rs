use std::io::BufRead;

use mudworld_data::ExtraDescDef;

use crate::error::ParseError;
use crate::scanner::LineScanner;

/// Scan an extra-description record: one `~`-terminated keyword line,
/// then a description block.
pub(super) fn scan_extra<R: BufRead>(scanner: &mut LineScanner<R>) -> Result<ExtraDescDef, ParseError> {
    scanner.must_advance()?;
    let raw = scanner.current();
    let keywords: Vec<String> = raw
        .strip_suffix('~')
        .ok_or_else(|| ParseError::UnterminatedExtraKeywords { found: raw.to_string() })?
        .split_whitespace()
        .map(str::to_string)
        .collect();

    let description = scanner.collect_until("~")?;

    Ok(ExtraDescDef { keywords, description })
}
