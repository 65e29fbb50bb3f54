//! Positional parameter substitution into translated templates.
//!
//! Templates use `{0}`, `{1}`, ... placeholders. A single quote is an escape
//! character in this syntax (`''` renders one quote), so bare quotes found in
//! catalog texts are doubled before substitution to keep them literal. Quote
//! pairs that are already doubled are kept as they are.

use std::borrow::Cow;

/// Substitute `parameters` into `template`.
///
/// With no parameters the template is returned untouched. Placeholders whose
/// index has no parameter, or that are not numeric, are left verbatim; this
/// function never fails.
pub fn format_message<S: AsRef<str>>(template: &str, parameters: &[S]) -> String {
    if parameters.is_empty() {
        return template.to_string();
    }

    let escaped = escape_quotes(template);
    substitute(&escaped, parameters)
}

/// Double every quote that is not already part of a doubled pair
fn escape_quotes(template: &str) -> Cow<'_, str> {
    if !template.contains('\'') {
        return Cow::Borrowed(template);
    }

    let mut escaped = String::with_capacity(template.len() + 8);
    let mut run = 0usize;

    for ch in template.chars() {
        if ch == '\'' {
            run += 1;
            continue;
        }
        push_quote_run(&mut escaped, run);
        run = 0;
        escaped.push(ch);
    }
    push_quote_run(&mut escaped, run);

    Cow::Owned(escaped)
}

fn push_quote_run(out: &mut String, run: usize) {
    let quotes = (run + 1) / 2 * 2;
    out.extend(std::iter::repeat('\'').take(quotes));
}

fn substitute<S: AsRef<str>>(pattern: &str, parameters: &[S]) -> String {
    let mut out = String::with_capacity(pattern.len() + 16);
    let mut chars = pattern.char_indices().peekable();

    while let Some((pos, ch)) = chars.next() {
        match ch {
            '\'' => {
                if let Some(&(_, '\'')) = chars.peek() {
                    chars.next();
                    out.push('\'');
                    continue;
                }
                // quoted literal section up to the next quote
                for (_, quoted) in chars.by_ref() {
                    if quoted == '\'' {
                        break;
                    }
                    out.push(quoted);
                }
            }
            '{' => {
                let rest = &pattern[pos + 1..];
                let Some(end) = rest.find('}') else {
                    out.push_str(&pattern[pos..]);
                    break;
                };

                let body = &rest[..end];
                let index = body
                    .split(',')
                    .next()
                    .and_then(|i| i.trim().parse::<usize>().ok());

                match index.and_then(|i| parameters.get(i)) {
                    Some(value) => out.push_str(value.as_ref()),
                    None => {
                        out.push('{');
                        out.push_str(body);
                        out.push('}');
                    }
                }

                // skip the placeholder body and closing brace
                let close = pos + 1 + end;
                while let Some(&(next, _)) = chars.peek() {
                    if next > close {
                        break;
                    }
                    chars.next();
                }
            }
            _ => out.push(ch),
        }
    }

    out
}
