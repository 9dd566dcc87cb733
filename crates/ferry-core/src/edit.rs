//! In-memory text edits applied between checkout and checkin.

/// A literal find/replace pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    /// Exact substring to search for.
    pub find: String,

    /// Text substituted for every occurrence.
    pub with: String,
}

/// Edits applied to checked-out content.
///
/// The order is fixed: replacement first, then append, then prepend. A
/// prepended prefix therefore always ends up ahead of an appended suffix
/// and neither is subject to the replacement.
#[derive(Debug, Clone, Default)]
pub struct EditPlan {
    /// Literal substring replacement, all non-overlapping occurrences.
    pub replace: Option<Replacement>,

    /// Text appended after the content.
    pub append: Option<String>,

    /// Text prepended before the content.
    pub prepend: Option<String>,
}

impl EditPlan {
    /// Check if this plan contains no edits.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.replace.is_none() && self.append.is_none() && self.prepend.is_none()
    }

    /// Apply the edits to `input`, producing the new content.
    ///
    /// A replacement whose target does not occur (or is empty) is a no-op,
    /// not an error; callers detect "nothing changed" by comparing the
    /// result against the input.
    #[must_use]
    pub fn apply(&self, input: &str) -> String {
        let mut output = match &self.replace {
            Some(r) if !r.find.is_empty() => input.replace(&r.find, &r.with),
            _ => input.to_string(),
        };

        if let Some(suffix) = &self.append {
            output.push_str(suffix);
        }

        if let Some(prefix) = &self.prepend {
            output.insert_str(0, prefix);
        }

        output
    }
}
