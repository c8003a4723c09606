use crate::core::Position;

/// Position just past the last character of `text`
pub fn end_position(text: &str) -> Position {
    let line = text.matches('\n').count();
    let character = match text.rfind('\n') {
        Some(newline) => text.len() - newline - 1,
        None => text.len(),
    };
    Position::new(line, character)
}

/// Byte offset of `position` in `text`, or None if it lies outside the text
/// or inside a multi-byte character
pub fn offset_at(text: &str, position: Position) -> Option<usize> {
    let mut line_start = 0;
    for _ in 0..position.line {
        line_start += text[line_start..].find('\n')? + 1;
    }

    let line_end = text[line_start..]
        .find('\n')
        .map(|newline| line_start + newline)
        .unwrap_or(text.len());
    let offset = line_start + position.character;

    (offset <= line_end && text.is_char_boundary(offset)).then_some(offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_position() {
        assert_eq!(end_position(""), Position::new(0, 0));
        assert_eq!(end_position("abc"), Position::new(0, 3));
        assert_eq!(end_position("package main\n"), Position::new(1, 0));
        assert_eq!(end_position("a\nbc"), Position::new(1, 2));
    }

    #[test]
    fn test_offset_at() {
        let text = "package main\n\ntype T struct{}\n";

        assert_eq!(offset_at(text, Position::new(0, 0)), Some(0));
        assert_eq!(offset_at(text, Position::new(2, 5)), Some(19));
        assert_eq!(offset_at(text, end_position(text)), Some(text.len()));
        assert_eq!(offset_at(text, Position::new(0, 40)), None);
        assert_eq!(offset_at(text, Position::new(9, 0)), None);
    }
}
