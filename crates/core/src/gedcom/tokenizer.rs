/// One leveled GEDCOM line, borrowed from the source text.
///
/// At level 0 `tag` holds the record id (`@I1@`) and `remainder` the record
/// type (`INDI`, `FAM`, ...). At deeper levels `tag` is the tag and
/// `remainder` its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record<'a> {
    pub level: u32,
    pub tag: &'a str,
    pub remainder: &'a str,
}

/// Split one raw line into a [`Record`].
///
/// Only the first two whitespace runs separate fields, so the remainder keeps
/// its inner spacing (`John /Doe/`, `1 JAN 1900`). Returns `None` for blank
/// lines, lines with a single token, and lines whose level is not an unsigned
/// integer.
pub fn tokenize_line(raw: &str) -> Option<Record<'_>> {
    let line = raw.trim();
    let (level, rest) = line.split_once(char::is_whitespace)?;
    let level = level.parse::<u32>().ok()?;

    let rest = rest.trim_start();
    let (tag, remainder) = match rest.split_once(char::is_whitespace) {
        Some((tag, remainder)) => (tag, remainder.trim_start()),
        None => (rest, ""),
    };

    Some(Record { level, tag, remainder })
}

/// Tokenize a whole file's text, dropping lines that do not form a record.
pub fn tokenize(text: &str) -> Vec<Record<'_>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    text.lines()
        .filter_map(|line| {
            let record = tokenize_line(line);
            if record.is_none() && !line.trim().is_empty() {
                log::debug!("Skipping malformed GEDCOM line: {line:?}");
            }
            record
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_first_two_whitespace_runs() {
        let record = tokenize_line("1 NAME John  /Doe/").expect("record");
        assert_eq!(record, Record { level: 1, tag: "NAME", remainder: "John  /Doe/" });

        let record = tokenize_line("  2\tDATE   1 JAN 1900\r").expect("record");
        assert_eq!(record, Record { level: 2, tag: "DATE", remainder: "1 JAN 1900" });
    }

    #[test]
    fn two_tokens_give_empty_remainder() {
        let record = tokenize_line("1 BIRT").expect("record");
        assert_eq!(record.tag, "BIRT");
        assert_eq!(record.remainder, "");
    }

    #[test]
    fn rejects_short_and_non_numeric_lines() {
        assert_eq!(tokenize_line(""), None);
        assert_eq!(tokenize_line("   "), None);
        assert_eq!(tokenize_line("0"), None);
        assert_eq!(tokenize_line("NOT VALID GEDCOM"), None);
        assert_eq!(tokenize_line("-1 NAME Someone"), None);
        assert_eq!(tokenize_line("x1 NAME Someone"), None);
    }

    #[test]
    fn tokenize_strips_bom_and_skips_noise() {
        let text = "\u{feff}0 HEAD\n\nstray text\n0 @I1@ INDI\r\n1 NAME A /B/\r\n";
        let records = tokenize(text);
        let tags: Vec<&str> = records.iter().map(|r| r.tag).collect();
        assert_eq!(tags, vec!["HEAD", "@I1@", "NAME"]);
        assert_eq!(records[1].remainder, "INDI");
    }
}
