/// Form field that receives typed input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    Name,
    Symptoms,
}

impl Field {
    pub fn next(self) -> Self {
        match self {
            Field::Name => Field::Symptoms,
            Field::Symptoms => Field::Name,
        }
    }
}

/// Presentation-only form state: focus and a byte cursor per field.
/// The text itself lives in the session.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub focus: Field,
    pub name_cursor: usize,
    pub symptoms_cursor: usize,
}

impl FormState {
    pub fn cursor(&self, field: Field) -> usize {
        match field {
            Field::Name => self.name_cursor,
            Field::Symptoms => self.symptoms_cursor,
        }
    }

    pub fn set_cursor(&mut self, field: Field, cursor: usize) {
        match field {
            Field::Name => self.name_cursor = cursor,
            Field::Symptoms => self.symptoms_cursor = cursor,
        }
    }
}

// =============================================================================
// Text editing helpers (cursor is a byte index on a char boundary)
// =============================================================================

fn clamp_cursor(text: &str, cursor: usize) -> usize {
    let mut c = cursor.min(text.len());
    while !text.is_char_boundary(c) {
        c -= 1;
    }
    c
}

pub fn insert_str(text: &str, cursor: usize, s: &str) -> (String, usize) {
    let cursor = clamp_cursor(text, cursor);
    let mut out = String::with_capacity(text.len() + s.len());
    out.push_str(&text[..cursor]);
    out.push_str(s);
    out.push_str(&text[cursor..]);
    (out, cursor + s.len())
}

pub fn backspace(text: &str, cursor: usize) -> (String, usize) {
    let cursor = clamp_cursor(text, cursor);
    match text[..cursor].char_indices().next_back() {
        Some((start, _)) => (format!("{}{}", &text[..start], &text[cursor..]), start),
        None => (text.to_string(), cursor),
    }
}

pub fn delete(text: &str, cursor: usize) -> (String, usize) {
    let cursor = clamp_cursor(text, cursor);
    match text[cursor..].chars().next() {
        Some(c) => (format!("{}{}", &text[..cursor], &text[cursor + c.len_utf8()..]), cursor),
        None => (text.to_string(), cursor),
    }
}

pub fn left(text: &str, cursor: usize) -> usize {
    let cursor = clamp_cursor(text, cursor);
    text[..cursor].char_indices().next_back().map(|(i, _)| i).unwrap_or(0)
}

pub fn right(text: &str, cursor: usize) -> usize {
    let cursor = clamp_cursor(text, cursor);
    text[cursor..].chars().next().map(|c| cursor + c.len_utf8()).unwrap_or(cursor)
}

/// Start of the line containing the cursor
pub fn home(text: &str, cursor: usize) -> usize {
    let cursor = clamp_cursor(text, cursor);
    text[..cursor].rfind('\n').map(|i| i + 1).unwrap_or(0)
}

/// End of the line containing the cursor
pub fn end(text: &str, cursor: usize) -> usize {
    let cursor = clamp_cursor(text, cursor);
    text[cursor..].find('\n').map(|i| cursor + i).unwrap_or(text.len())
}
