//! SMS reply shaping

/// Appended whenever a reply is cut
pub const CONTINUATION_NOTICE: &str = "\n\nअधिक जानकारी के लिए WhatsApp करें।";

const ELLIPSIS: &str = "...";

/// A sentence break must lie beyond this share of `max_len` to be used
const MIN_BREAK_RATIO: f64 = 0.8;

/// Fit `text` into `max_len` characters
///
/// Text that already fits is returned unchanged. Otherwise the text is cut
/// after the last `।` or `.` that leaves room for [`CONTINUATION_NOTICE`],
/// provided that break lies beyond 80% of `max_len`; failing that it is
/// hard-cut and `...` is added before the notice. The result never exceeds
/// `max_len` characters.
pub fn truncate_for_sms(text: &str, max_len: usize) -> String {
    let total = text.chars().count();
    if total <= max_len {
        return text.to_string();
    }

    let notice_len = CONTINUATION_NOTICE.chars().count();
    let ellipsis_len = ELLIPSIS.chars().count();

    if max_len < notice_len + ellipsis_len {
        tracing::warn!(max_len, "SMS limit too small for continuation notice");
        return take_chars(text, max_len).to_string();
    }

    let window = take_chars(text, max_len - notice_len);
    let break_at = window
        .char_indices()
        .enumerate()
        .filter(|(_, (_, c))| *c == '।' || *c == '.')
        .map(|(char_pos, (byte_pos, c))| (char_pos, byte_pos + c.len_utf8()))
        .last();

    if let Some((char_pos, byte_end)) = break_at {
        if char_pos as f64 > max_len as f64 * MIN_BREAK_RATIO {
            return format!("{}{}", &window[..byte_end], CONTINUATION_NOTICE);
        }
    }

    let hard = take_chars(text, max_len - notice_len - ellipsis_len);
    format!("{}{}{}", hard, ELLIPSIS, CONTINUATION_NOTICE)
}

/// Prefix of at most `n` characters
fn take_chars(text: &str, n: usize) -> &str {
    match text.char_indices().nth(n) {
        Some((byte_pos, _)) => &text[..byte_pos],
        None => text,
    }
}
