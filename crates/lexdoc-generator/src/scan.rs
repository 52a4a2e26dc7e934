//! Heuristic field scan over sample-document text
//!
//! Looks for capitalized two-word names, numeric dates, dollar amounts and
//! street addresses. Each hit becomes a form field prefilled with the value.

use crate::schema::ExtractedSchema;
use lexdoc_domain::{DocumentType, FieldKind, FieldSpec};

const MAX_NAMES: usize = 2;
const MAX_ADDRESS_WORDS: usize = 6;

const STREET_SUFFIXES: &[&str] = &[
    "street", "st", "avenue", "ave", "road", "rd", "drive", "dr", "lane", "ln",
];

/// Scan sample text for fillable values
///
/// Returns a schema with `from_content` set; its field list is empty when
/// nothing was found.
pub fn scan_content(text: &str, document_type: DocumentType) -> ExtractedSchema {
    let mut fields = Vec::new();

    // 1. Party names
    for (idx, name) in find_names(text).into_iter().take(MAX_NAMES).enumerate() {
        fields.push(
            FieldSpec::required(
                format!("party{}Name", idx + 1),
                format!("Party {} Name", idx + 1),
                FieldKind::Text,
            )
            .with_extracted_value(name),
        );
    }

    // 2. Document date
    if let Some(date) = find_dates(text).into_iter().next() {
        fields.push(
            FieldSpec::required("date", "Document Date", FieldKind::Date)
                .with_extracted_value(date),
        );
    }

    // 3. Amount
    if let Some(amount) = find_amounts(text).into_iter().next() {
        fields.push(
            FieldSpec::required("amount", "Amount", FieldKind::Text).with_extracted_value(amount),
        );
    }

    // 4. Address
    if let Some(address) = find_addresses(text).into_iter().next() {
        let (name, label) = match document_type {
            DocumentType::Rental => ("propertyAddress", "Property Address"),
            _ => ("party1Address", "Party 1 Address"),
        };
        fields.push(
            FieldSpec::required(name, label, FieldKind::Text).with_extracted_value(address),
        );
    }

    ExtractedSchema {
        document_type,
        fields,
        clauses: Vec::new(),
        from_content: true,
    }
}

/// End of an ASCII capitalized word (`[A-Z][a-z]+`) starting at `i`
fn capitalized_word_end(bytes: &[u8], i: usize) -> Option<usize> {
    if !bytes.get(i)?.is_ascii_uppercase() {
        return None;
    }
    let mut end = i + 1;
    while end < bytes.len() && bytes[end].is_ascii_lowercase() {
        end += 1;
    }
    (end > i + 1).then_some(end)
}

/// Two capitalized words separated by a single space, left to right, non-overlapping
pub(crate) fn find_names(text: &str) -> Vec<String> {
    let bytes = text.as_bytes();
    let mut names = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        if let Some(first_end) = capitalized_word_end(bytes, i) {
            if bytes.get(first_end) == Some(&b' ') {
                if let Some(second_end) = capitalized_word_end(bytes, first_end + 1) {
                    names.push(text[i..second_end].to_string());
                    i = second_end;
                    continue;
                }
            }
        }
        i += 1;
    }

    names
}

/// Length of the ASCII digit run starting at `i`, capped at `max`
fn digit_run(bytes: &[u8], i: usize, max: usize) -> usize {
    bytes[i.min(bytes.len())..]
        .iter()
        .take(max)
        .take_while(|b| b.is_ascii_digit())
        .count()
}

/// `M/D/YYYY` or `M-D-YYYY` starting at `i`
fn date_at(bytes: &[u8], i: usize) -> Option<usize> {
    for month_len in [2, 1] {
        if digit_run(bytes, i, month_len) != month_len {
            continue;
        }
        let sep_pos = i + month_len;
        let sep = match bytes.get(sep_pos) {
            Some(b'/') => b'/',
            Some(b'-') => b'-',
            _ => continue,
        };
        let day_start = sep_pos + 1;
        for day_len in [2, 1] {
            if digit_run(bytes, day_start, day_len) != day_len {
                continue;
            }
            let year_sep = day_start + day_len;
            if bytes.get(year_sep) != Some(&sep) {
                continue;
            }
            if digit_run(bytes, year_sep + 1, 4) == 4 {
                return Some(year_sep + 5);
            }
        }
    }
    None
}

pub(crate) fn find_dates(text: &str) -> Vec<String> {
    let bytes = text.as_bytes();
    let mut dates = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        if let Some(end) = date_at(bytes, i) {
            dates.push(text[i..end].to_string());
            i = end;
        } else {
            i += 1;
        }
    }

    dates
}

/// Dollar amounts such as `$2,500` or `$1200.50`
pub(crate) fn find_amounts(text: &str) -> Vec<String> {
    let bytes = text.as_bytes();
    let mut amounts = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'$' && bytes.get(i + 1).is_some_and(|b| b.is_ascii_digit()) {
            let mut end = i + 1;
            while end < bytes.len() && (bytes[end].is_ascii_digit() || bytes[end] == b',') {
                end += 1;
            }
            if bytes.get(end) == Some(&b'.') && bytes.get(end + 1).is_some_and(|b| b.is_ascii_digit()) {
                end += 1;
                while end < bytes.len() && bytes[end].is_ascii_digit() {
                    end += 1;
                }
            }
            let amount = text[i..end].trim_end_matches(',');
            amounts.push(amount.to_string());
            i = end;
        } else {
            i += 1;
        }
    }

    amounts
}

fn is_street_suffix(word: &str) -> bool {
    let word = word.trim_end_matches(['.', ',']).to_lowercase();
    STREET_SUFFIXES.contains(&word.as_str())
}

/// House number followed by up to a few words, the last of which is a street suffix
pub(crate) fn find_addresses(text: &str) -> Vec<String> {
    let mut addresses = Vec::new();

    for line in text.lines() {
        let words: Vec<&str> = line.split_whitespace().collect();
        let mut idx = 0;
        while idx < words.len() {
            if !words[idx].chars().all(|c| c.is_ascii_digit()) {
                idx += 1;
                continue;
            }

            let tail = &words[idx + 1..];
            let street_words = tail
                .iter()
                .take(MAX_ADDRESS_WORDS)
                .take_while(|w| w.trim_end_matches(['.', ',']).chars().all(|c| c.is_ascii_alphabetic()))
                .count();
            // Longest prefix ending on a suffix, at least one word before it
            let suffix_at = (1..street_words).rev().find(|&j| is_street_suffix(tail[j]));

            match suffix_at {
                Some(j) => {
                    let mut parts = vec![words[idx]];
                    parts.extend_from_slice(&tail[..=j]);
                    let address = parts.join(" ");
                    addresses.push(address.trim_end_matches(',').to_string());
                    idx += j + 2;
                }
                None => idx += 1,
            }
        }
    }

    addresses
}
