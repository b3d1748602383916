/// Split normalized text into workout segments on commas, periods and newlines.
///
/// A period between two digits is a decimal point and does not split.
pub fn split_segments(text: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut segments = Vec::new();
    let mut start = 0;

    for (i, &(offset, ch)) in chars.iter().enumerate() {
        let is_delimiter = match ch {
            ',' | '\n' => true,
            '.' => {
                let prev_digit = i > 0 && chars[i - 1].1.is_ascii_digit();
                let next_digit = chars.get(i + 1).is_some_and(|&(_, c)| c.is_ascii_digit());
                !(prev_digit && next_digit)
            }
            _ => false,
        };

        if is_delimiter {
            segments.push(&text[start..offset]);
            start = offset + ch.len_utf8();
        }
    }
    segments.push(&text[start..]);

    segments
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}
