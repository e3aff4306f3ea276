//! Separator-based path segmentation.

/// Iterator over the non-empty segments of a path string.
///
/// Segments are yielded left to right. Runs of consecutive separators
/// collapse, and leading or trailing separators are ignored, so no empty
/// segment is ever produced. The iterator borrows the input; nothing is
/// copied or mutated, and cloning the iterator restarts it from wherever it
/// currently stands.
#[derive(Clone, Debug)]
pub struct PathSegments<'a> {
    remaining: &'a str,
    separator: char,
}

impl<'a> PathSegments<'a> {
    pub fn new(path: &'a str, separator: char) -> PathSegments<'a> {
        PathSegments {
            remaining: path,
            separator: separator,
        }
    }
}

impl<'a> Iterator for PathSegments<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let trimmed = self.remaining.trim_start_matches(self.separator);

        if trimmed.is_empty() {
            self.remaining = trimmed;
            return None;
        }

        match trimmed.find(self.separator) {
            Some(position) => {
                let (segment, rest) = trimmed.split_at(position);
                self.remaining = rest;
                Some(segment)
            }
            None => {
                self.remaining = "";
                Some(trimmed)
            }
        }
    }
}
