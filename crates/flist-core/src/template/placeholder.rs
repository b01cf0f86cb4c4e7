//! Placeholder tokens inside template paths.

/// A reserved character in a template path, replaced at resolution time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    /// `*`: the source resource's own file name.
    Original,
    /// `&`: a fingerprint of the source URL, keeping the resource's extension.
    Unique,
}

impl Placeholder {
    /// Order in which tokens are substituted within one path.
    pub const RESOLUTION_ORDER: [Placeholder; 2] = [Placeholder::Original, Placeholder::Unique];

    pub fn token(self) -> char {
        match self {
            Placeholder::Original => '*',
            Placeholder::Unique => '&',
        }
    }

    pub fn from_token(c: char) -> Option<Self> {
        match c {
            '*' => Some(Placeholder::Original),
            '&' => Some(Placeholder::Unique),
            _ => None,
        }
    }

    /// Number of occurrences of this token in `path`.
    pub fn count_in(self, path: &str) -> usize {
        path.matches(self.token()).count()
    }
}

/// Builds a concrete path from `template`, replacing each token with `name_for`'s value.
///
/// Tokens are replaced in a single scan; substituted names are never expanded again.
pub fn render<'a>(template: &str, mut name_for: impl FnMut(Placeholder) -> &'a str) -> String {
    let mut out = String::with_capacity(template.len());
    for c in template.chars() {
        match Placeholder::from_token(c) {
            Some(p) => out.push_str(name_for(p)),
            None => out.push(c),
        }
    }
    out
}

/// Placeholders present in `path`, in resolution order.
pub fn placeholders_in(path: &str) -> Vec<Placeholder> {
    Placeholder::RESOLUTION_ORDER
        .into_iter()
        .filter(|p| path.contains(p.token()))
        .collect()
}
